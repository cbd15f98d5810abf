use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{WeightedEnum, error::ParseRarityError};

/// The five product tiers, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, WeightedEnum)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[probability(70.494)]
    #[label("一般")]
    Common,
    #[probability(27.53)]
    #[label("高級")]
    Uncommon,
    #[probability(1.8)]
    #[label("希少")]
    Rare,
    #[probability(0.16)]
    #[label("英雄")]
    Heroic,
    #[probability(0.016)]
    #[label("伝説")]
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Heroic,
        Rarity::Legendary,
    ];

    pub const fn alias(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Heroic => "heroic",
            Rarity::Legendary => "legendary",
        }
    }

    /// The tiers offered as "draw until" targets.
    pub const fn is_special(&self) -> bool {
        matches!(self, Rarity::Heroic | Rarity::Legendary)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label or the ASCII alias, case-insensitively.
impl FromStr for Rarity {
    type Err = ParseRarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rarity::ALL
            .into_iter()
            .find(|r| r.label() == s || r.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRarityError(s.to_string()))
    }
}

//! # gachasim
//!
//! A gacha draw simulator: weighted random pulls from a fixed rarity table,
//! plus per-tier statistics of what came out.
//!
//! Sampling is a single cumulative-sum scan: draw a uniform percent in
//! `[0, 100)` and return the first label whose running weight exceeds it.
//! Whatever the weights leave uncovered at the tail goes to the
//! last-declared label.
//!
//! ## Quick start (pairs)
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use gachasim::{CategoricalSampler, RarityTable, tally};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RarityTable::from_pairs([
//!     ("common", 60.0),
//!     ("uncommon", 30.0),
//!     ("rare", 9.0),
//!     ("legendary", 1.0),
//! ])?;
//! let sampler = CategoricalSampler::new(table);
//!
//! let mut rng = rand::rng();
//! let session = sampler.draw_n(&mut rng, NonZeroUsize::new(11).unwrap());
//! let stats = tally(sampler.table(), &session);
//! print!("{stats}");
//! # Ok(()) }
//! ```
//!
//! ## Quick start (enum + macro)
//!
//! ```rust
//! use gachasim::{CategoricalSampler, Rarity, Roller};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sampler = CategoricalSampler::new(Rarity::table()?);
//! let mut roller = Roller::from_seed(7);
//! let (session, count) = sampler.draw_until(&mut roller, &Rarity::Heroic)?;
//! assert_eq!(session.last(), Some(&Rarity::Heroic));
//! println!("{} after {count} draws", Rarity::Heroic);
//! # Ok(()) }
//! ```
//!
//! ## Randomness
//! Every operation takes its randomness as a [`PercentSource`]. Any
//! `rand::RngCore` qualifies; [`Roller`] is the seedable default and
//! [`ScriptedSource`] replays fixed values for tests.

extern crate self as gachasim;

mod error;
mod rarity;
mod roller;
mod sampler;
mod session;
mod source;
mod stats;
mod table;

pub use error::{DrawError, ParseRarityError, ProbError, StatsError};
pub use rarity::Rarity;
pub use roller::Roller;
pub use sampler::{CategoricalSampler, DEFAULT_DRAW_LIMIT};
pub use session::{RollKind, RollSession};
pub use source::{PERCENT_SCALE, PercentSource, ScriptedSource};
pub use stats::{Statistics, percentages, tally};
pub use table::{Bucket, RarityTable};

/// Derive macro imported from `gachasim_macros`.
/// See the crate-level example for usage.
pub use gachasim_macros::WeightedEnum;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its percentage weight is exposed via
/// [`WeightedEnum::ENTRIES`], in declaration order.
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs for the enum.
    const ENTRIES: &'static [(Self, f64)];

    /// Display label of the variant.
    fn label(&self) -> &'static str;

    /// Build a [`RarityTable`] from the enum entries.
    ///
    /// # Errors
    /// See [`RarityTable::from_pairs`].
    fn table() -> Result<RarityTable<Self>, ProbError>
    where
        Self: Copy,
    {
        RarityTable::from_pairs(Self::ENTRIES.iter().copied())
    }
}

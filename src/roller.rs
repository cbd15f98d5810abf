use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::source::{PERCENT_SCALE, PercentSource};

/// The production randomness source: an OS-seeded or explicitly seeded `StdRng`.
#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let rng = StdRng::from_os_rng();
        Roller { rng }
    }

    /// Reproducible roller, used by `--seed`.
    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Roller { rng }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    #[cfg(test)]
    pub fn test_roller() -> Self {
        Self::from_seed(42)
    }
}

impl PercentSource for Roller {
    #[inline]
    fn next_percent(&mut self) -> f64 {
        self.rng.random::<f64>() * PERCENT_SCALE
    }
}

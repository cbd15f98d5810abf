//! The randomness capability the sampler draws from.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

/// Upper bound (exclusive) of the values a [`PercentSource`] yields.
pub const PERCENT_SCALE: f64 = 100.0;

/// A source of uniform real numbers in `[0, 100)`.
///
/// Every [`RngCore`] is a source; tests substitute a [`ScriptedSource`] to
/// hit exact cumulative-sum boundaries.
pub trait PercentSource {
    fn next_percent(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> PercentSource for R {
    #[inline]
    fn next_percent(&mut self) -> f64 {
        self.random::<f64>() * PERCENT_SCALE
    }
}

/// Replays a fixed list of percents, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
}

impl ScriptedSource {
    /// Returns `None` when `values` is empty.
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: VecDeque<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        Some(Self { values })
    }
}

impl PercentSource for ScriptedSource {
    fn next_percent(&mut self) -> f64 {
        // non-empty by construction
        let value = self.values.pop_front().unwrap_or_default();
        self.values.push_back(value);
        value
    }
}

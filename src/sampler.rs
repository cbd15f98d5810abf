use std::fmt;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::{
    error::DrawError,
    session::{RollKind, RollSession},
    source::PercentSource,
    table::RarityTable,
};

/// Default cap on [`CategoricalSampler::draw_until`].
///
/// For the rarest product tier (0.016%) the chance of still missing after
/// this many draws is below `1e-690`.
pub const DEFAULT_DRAW_LIMIT: usize = 10_000_000;

/// Draws labels from a [`RarityTable`] by cumulative-sum sampling.
///
/// The sampler holds no per-draw state; randomness comes from the
/// [`PercentSource`] passed to each call.
#[derive(Debug, Clone)]
pub struct CategoricalSampler<T> {
    table: RarityTable<T>,
    limit: usize,
}

impl<T> CategoricalSampler<T> {
    pub fn new(table: RarityTable<T>) -> Self {
        Self {
            table,
            limit: DEFAULT_DRAW_LIMIT,
        }
    }

    /// Cap the number of draws a single [`draw_until`](Self::draw_until) may take.
    pub fn with_limit(mut self, limit: NonZeroUsize) -> Self {
        self.limit = limit.get();
        self
    }

    pub fn table(&self) -> &RarityTable<T> {
        &self.table
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<T: Clone> CategoricalSampler<T> {
    /// One weighted draw. Never fails.
    pub fn draw_one<S: PercentSource + ?Sized>(&self, source: &mut S) -> T {
        let percent = source.next_percent();
        let label = self.table.pick(percent);
        trace!("drew {percent:.6}");
        label.clone()
    }

    /// `n` independent draws.
    pub fn draw_n<S: PercentSource + ?Sized>(
        &self,
        source: &mut S,
        n: NonZeroUsize,
    ) -> RollSession<T> {
        let n = n.get();
        let draws: Vec<T> = (0..n).map(|_| self.draw_one(source)).collect();
        debug!("batch of {n} draws complete");
        RollSession::new(RollKind::Batch(n), draws)
    }
}

impl<T: Clone + PartialEq + fmt::Display> CategoricalSampler<T> {
    /// Draw until `target` comes up, returning every draw and the draw count.
    ///
    /// The last element of the session is always `target`.
    ///
    /// # Errors
    /// * [`DrawError::UnknownTarget`] if `target` is not a table label.
    /// * [`DrawError::Exhausted`] if the limit is reached first; the partial
    ///   session is dropped.
    pub fn draw_until<S: PercentSource + ?Sized>(
        &self,
        source: &mut S,
        target: &T,
    ) -> Result<(RollSession<T>, usize), DrawError> {
        if !self.table.contains(target) {
            return Err(DrawError::UnknownTarget {
                target: target.to_string(),
            });
        }

        let mut draws = Vec::new();
        while draws.len() < self.limit {
            let label = self.draw_one(source);
            let hit = label == *target;
            draws.push(label);
            if hit {
                let count = draws.len();
                debug!("{target} after {count} draws");
                let session = RollSession::new(RollKind::UntilTarget(target.clone()), draws);
                return Ok((session, count));
            }
        }

        Err(DrawError::Exhausted {
            target: target.to_string(),
            draws: draws.len(),
        })
    }
}

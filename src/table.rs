//! The ordered `(label, weight)` table and its cumulative-sum scan.

use serde::Serialize;

use crate::error::ProbError;

/// Where a drawn percent lands in a [`RarityTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// The first entry whose running sum strictly exceeds the percent.
    Covered(usize),
    /// No running sum exceeded the percent: the weights sum to less than the
    /// drawn value, or rounding left a gap at the tail.
    Remainder,
}

/// An immutable, ordered table of labels and their percentage weights.
///
/// Weights conventionally sum to 100. Any part of `[0, 100)` the weights
/// leave uncovered belongs to the last-declared label.
#[derive(Debug, Clone, Serialize)]
pub struct RarityTable<T> {
    items: Vec<T>,
    weights: Vec<f64>,
}

impl<T> RarityTable<T> {
    /// Build from any `(label, weight)` iterator, in declaration order.
    ///
    /// # Errors
    /// * [`ProbError::Empty`] if there are no labels.
    /// * [`ProbError::Negative`] if any weight is negative.
    /// * [`ProbError::NonFinite`] if any weight is NaN or infinite.
    /// * [`ProbError::ZeroSum`] if every weight is zero.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let mut items = Vec::new();
        let mut weights = Vec::new();
        for (t, w) in pairs {
            items.push(t);
            weights.push(w);
        }
        if items.is_empty() {
            return Err(ProbError::Empty);
        }

        let mut sum = 0.0f64;
        for (index, &w) in weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ProbError::NonFinite { index });
            }
            if w.is_sign_negative() && w != 0.0 {
                return Err(ProbError::Negative { index, value: w });
            }
            sum += w;
        }
        if sum == 0.0 {
            return Err(ProbError::ZeroSum);
        }

        Ok(Self { items, weights })
    }

    /// Locate `percent` by walking the running sum in declared order.
    pub fn scan(&self, percent: f64) -> Bucket {
        let mut cumulative = 0.0;
        for (i, w) in self.weights.iter().enumerate() {
            cumulative += w;
            if percent < cumulative {
                return Bucket::Covered(i);
            }
        }
        Bucket::Remainder
    }

    /// The label `percent` selects. The remainder goes to the last label.
    pub fn pick(&self, percent: f64) -> &T {
        let idx = match self.scan(percent) {
            Bucket::Covered(i) => i,
            Bucket::Remainder => self.items.len() - 1,
        };
        &self.items[idx]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> &[T] {
        &self.items
    }

    /// `(label, weight)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.items.iter().zip(self.weights.iter().copied())
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }
}

impl<T: PartialEq> RarityTable<T> {
    pub fn position(&self, label: &T) -> Option<usize> {
        self.items.iter().position(|t| t == label)
    }

    pub fn contains(&self, label: &T) -> bool {
        self.position(label).is_some()
    }

    pub fn weight(&self, label: &T) -> Option<f64> {
        self.position(label).map(|i| self.weights[i])
    }
}

use std::fmt;

use serde::Serialize;

/// The user action a [`RollSession`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollKind<T> {
    /// A fixed-size batch (1 for a single pull, 11 for a multi-pull).
    Batch(usize),
    /// Draws repeated until the given label appeared.
    UntilTarget(T),
}

/// The ordered draws produced by one user action.
///
/// A session is built once by the sampler and then only read; the next
/// action produces a new session instead of extending this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollSession<T> {
    kind: RollKind<T>,
    draws: Vec<T>,
}

impl<T> RollSession<T> {
    pub(crate) fn new(kind: RollKind<T>, draws: Vec<T>) -> Self {
        Self { kind, draws }
    }

    pub fn kind(&self) -> &RollKind<T> {
        &self.kind
    }

    pub fn draws(&self) -> &[T] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.draws.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.draws.iter()
    }

    pub fn into_draws(self) -> Vec<T> {
        self.draws
    }
}

impl<'a, T> IntoIterator for &'a RollSession<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.draws.iter()
    }
}

/// Space-separated labels, in draw order.
impl<T: fmt::Display> fmt::Display for RollSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, draw) in self.draws.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{draw}")?;
        }
        Ok(())
    }
}

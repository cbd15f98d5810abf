//! Per-label tallies and percentages of a [`RollSession`].

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::{error::StatsError, session::RollSession, table::RarityTable};

/// Occurrence counts for every table label, in table order.
///
/// Derived from a session on demand; labels that never came up are present
/// with a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics<T> {
    counts: Vec<(T, usize)>,
    total: usize,
}

impl<T> Statistics<T> {
    pub fn counts(&self) -> &[(T, usize)] {
        &self.counts
    }

    /// Number of draws tallied.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(t, c)| (t, *c))
    }
}

impl<T: PartialEq> Statistics<T> {
    pub fn count(&self, label: &T) -> Option<usize> {
        self.counts.iter().find(|(t, _)| t == label).map(|(_, c)| *c)
    }
}

/// Count each label of `session` against `table`, in one pass.
pub fn tally<T>(table: &RarityTable<T>, session: &RollSession<T>) -> Statistics<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    let mut counts: Vec<(T, usize)> = table.labels().iter().map(|t| (t.clone(), 0)).collect();
    let mut total = 0;
    for draw in session {
        match table.position(draw) {
            Some(i) => {
                counts[i].1 += 1;
                total += 1;
            }
            None => warn!("ignoring label {draw:?} not declared in the table"),
        }
    }
    Statistics { counts, total }
}

/// Each label's share of the tallied draws, `count / total * 100`.
///
/// # Errors
/// [`StatsError::EmptySession`] when nothing was tallied.
pub fn percentages<T: Clone>(stats: &Statistics<T>) -> Result<Vec<(T, f64)>, StatsError> {
    if stats.total == 0 {
        return Err(StatsError::EmptySession);
    }
    let total = stats.total as f64;
    Ok(stats
        .counts
        .iter()
        .map(|(t, c)| (t.clone(), *c as f64 / total * 100.0))
        .collect())
}

/// One `label: count (pp.pp%)` line per label.
impl<T: fmt::Display> fmt::Display for Statistics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, count) in &self.counts {
            let pct = if self.total == 0 {
                0.0
            } else {
                *count as f64 / self.total as f64 * 100.0
            };
            writeln!(f, "{label}: {count} ({pct:.2}%)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RollKind;

    fn letters() -> RarityTable<&'static str> {
        RarityTable::from_pairs([
            ("A", 70.494),
            ("B", 27.53),
            ("C", 1.8),
            ("D", 0.16),
            ("E", 0.016),
        ])
        .unwrap()
    }

    fn session(draws: &[&'static str]) -> RollSession<&'static str> {
        RollSession::new(RollKind::Batch(draws.len()), draws.to_vec())
    }

    #[test]
    fn tally_lists_every_label() {
        let stats = tally(&letters(), &session(&["A", "A", "B", "E"]));
        assert_eq!(
            stats.counts(),
            &[("A", 2), ("B", 1), ("C", 0), ("D", 0), ("E", 1)]
        );
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.count(&"C"), Some(0));
        assert_eq!(stats.count(&"Z"), None);
    }

    #[test]
    fn tally_sum_matches_session_length() {
        let draws = ["C", "A", "A", "D", "B", "A", "B", "A", "A", "E", "A"];
        let stats = tally(&letters(), &session(&draws));
        assert_eq!(stats.iter().map(|(_, c)| c).sum::<usize>(), draws.len());
    }

    #[test]
    fn tally_skips_undeclared_labels() {
        let stats = tally(&letters(), &session(&["A", "Q"]));
        assert_eq!(stats.total(), 1);
        assert_eq!(stats.count(&"A"), Some(1));
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let stats = tally(&letters(), &session(&["A", "A", "B", "E", "C", "A", "D"]));
        let pct = percentages(&stats).unwrap();
        let sum: f64 = pct.iter().map(|(_, p)| p).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum={sum}");
        assert_eq!(pct[0], ("A", 3.0 / 7.0 * 100.0));
    }

    #[test]
    fn percentages_reject_empty() {
        let stats = tally(&letters(), &session(&[]));
        assert_eq!(percentages(&stats), Err(StatsError::EmptySession));
    }

    #[test]
    fn summary_lines() {
        let stats = tally(&letters(), &session(&["A", "A", "B", "E"]));
        assert_eq!(
            stats.to_string(),
            "A: 2 (50.00%)\nB: 1 (25.00%)\nC: 0 (0.00%)\nD: 0 (0.00%)\nE: 1 (25.00%)\n"
        );
    }
}

//! Concordant / discordant pair counting shared by the Kendall family.

use core::cmp::Ordering::Equal;

use crate::correlation::validate_pair;
use crate::error::McdaError;

/// Classification of every unordered index pair `(i, j)`, `i != j`.
///
/// Each pair lands in exactly one bucket, so the five counts sum to `N * (N - 1) / 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    /// Ordered the same way in both vectors
    pub concordant: u64,
    /// Ordered opposite ways
    pub discordant: u64,
    /// Tied in the first vector only
    pub tied_first: u64,
    /// Tied in the second vector only
    pub tied_second: u64,
    /// Tied in both vectors
    pub tied_both: u64,
}

impl PairCounts {
    /// Total number of pairs, `N * (N - 1) / 2`.
    pub fn total(&self) -> u64 {
        self.concordant + self.discordant + self.tied_first + self.tied_second + self.tied_both
    }

    /// `Nc - Nd` as a float.
    pub fn score(&self) -> f64 {
        self.concordant as f64 - self.discordant as f64
    }
}

/// Count concordant, discordant and tied pairs between `r` and `q`.
///
/// O(N^2); every pair is compared once.
pub fn count_pairs(r: &[f64], q: &[f64]) -> Result<PairCounts, McdaError> {
    let n = validate_pair("count_pairs", r, q)?;
    Ok(tally(r, q, n))
}

/// Pair counting without validation, for callers that already checked.
pub(crate) fn tally(r: &[f64], q: &[f64], n: usize) -> PairCounts {
    let mut counts = PairCounts::default();
    for i in 1..n {
        for j in 0..i {
            match (r[i].partial_cmp(&r[j]), q[i].partial_cmp(&q[j])) {
                (Some(Equal), Some(Equal)) => counts.tied_both += 1,
                (Some(Equal), Some(_)) => counts.tied_first += 1,
                (Some(_), Some(Equal)) => counts.tied_second += 1,
                (Some(a), Some(b)) if a == b => counts.concordant += 1,
                (Some(_), Some(_)) => counts.discordant += 1,
                // Only NaN compares as None, and validated input has none
                _ => {}
            }
        }
    }
    counts
}

//! Kendall tau, Goodman-Kruskal gamma and tie-corrected Kendall tau-b.
//!
//! All three are computed from one [`PairCounts`] pass; they differ only in
//! how the concordant/discordant balance is scaled.

use crate::correlation::pairs::{tally, PairCounts};
use crate::correlation::validate_pair;
use crate::error::McdaError;

/// Kendall rank correlation coefficient.
///
/// `tau = (Nc - Nd) / (N * (N - 1) / 2)`. Tied pairs count in neither `Nc`
/// nor `Nd` but still count in the denominator.
pub fn kendall_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("kendall_coeff", r, q)?;
    let counts = tally(r, q, n);
    Ok(counts.score() / pair_total(n))
}

/// Goodman-Kruskal gamma.
///
/// `gamma = (Nc - Nd) / (Nc + Nd)`. Fails when every pair is tied in at
/// least one vector.
pub fn goodman_kruskal_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("goodman_kruskal_coeff", r, q)?;
    let counts = tally(r, q, n);

    let untied = (counts.concordant + counts.discordant) as f64;
    if untied == 0.0 {
        return Err(McdaError::degenerate(
            "goodman_kruskal_coeff",
            "no concordant or discordant pairs",
        ));
    }
    Ok(counts.score() / untied)
}

/// Kendall tau-b, the tie-corrected variant.
///
/// `tau_b = (Nc - Nd) / sqrt((n0 - n1) * (n0 - n2))` where `n0` is the
/// number of pairs and `n1`, `n2` the pairs tied in `r` and in `q`. Equals
/// [`kendall_coeff`] when neither vector has ties. Only the statistic is
/// returned; no significance level is computed.
pub fn kendall_tau_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("kendall_tau_coeff", r, q)?;
    let counts = tally(r, q, n);
    tau_b(&counts, n)
}

fn tau_b(counts: &PairCounts, n: usize) -> Result<f64, McdaError> {
    let n0 = pair_total(n);
    let n1 = (counts.tied_first + counts.tied_both) as f64;
    let n2 = (counts.tied_second + counts.tied_both) as f64;

    let denominator = ((n0 - n1) * (n0 - n2)).sqrt();
    if denominator == 0.0 {
        return Err(McdaError::degenerate(
            "kendall_tau_coeff",
            "a ranking vector is constant",
        ));
    }
    Ok(counts.score() / denominator)
}

fn pair_total(n: usize) -> f64 {
    (n * (n - 1)) as f64 / 2.0
}

//! Objective Criteria Weighting
//!
//! Derives criterion weights from the decision matrix alone. A criterion whose
//! values barely differ across alternatives cannot discriminate between them
//! and receives little weight; widely dispersed criteria receive more.

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use crate::criteria::CriterionType;
use crate::error::McdaError;
use crate::normalization::sum_normalization;

/// Entropy weighting method.
///
/// 1. Sum-normalize every column as a benefit criterion and take absolute
///    values, giving `p_ij`.
/// 2. Shannon entropy per column: `h_j = -(1 / ln M) * sum_i(p_ij * ln(p_ij))`,
///    with `0 * ln(0)` taken as 0.
/// 3. Dispersion `d_j = 1 - h_j`.
/// 4. Weights `w_j = d_j / sum(d)`.
///
/// A column holding one repeated value has `p_ij = 1 / M` everywhere, so its
/// dispersion is exactly 0 and it gets exactly zero weight. Needs at least
/// two alternatives (`ln M` must be nonzero) and fails when every column is
/// constant, since all dispersions are then zero.
pub fn entropy_weighting(matrix: &Array2<f64>) -> Result<Array1<f64>, McdaError> {
    const CONTEXT: &str = "entropy_weighting";
    let (m, n) = matrix.dim();
    if m < 2 {
        return Err(McdaError::TooFewElements {
            context: CONTEXT,
            required: 2,
            found: m,
        });
    }

    let types = vec![CriterionType::Benefit; n];
    let pij = sum_normalization(matrix, &types)
        .map_err(|err| match err {
            McdaError::DegenerateInput { condition, .. } => McdaError::DegenerateInput {
                context: CONTEXT,
                condition,
            },
            other => other,
        })?
        .mapv(f64::abs);

    let scale = 1.0 / (m as f64).ln();
    let dispersion: Array1<f64> = matrix
        .axis_iter(Axis(1))
        .zip(pij.axis_iter(Axis(1)))
        .map(|(raw, column)| {
            if raw.iter().all(|&x| x == raw[0]) {
                return 0.0;
            }
            let plogp: f64 = column
                .iter()
                .filter(|&&p| p != 0.0)
                .map(|&p| p * p.ln())
                .sum();
            1.0 + scale * plogp
        })
        .collect();

    let total = dispersion.sum();
    if total <= 0.0 {
        return Err(McdaError::degenerate(CONTEXT, "zero total dispersion"));
    }

    let weights = dispersion / total;
    debug!(criteria = n, alternatives = m, weights = ?weights.as_slice(), "Entropy weights computed");
    Ok(weights)
}

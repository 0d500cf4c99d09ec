//! Ranking Correlation Module
//!
//! Pairwise agreement measures between two ranking vectors over the same
//! alternatives (e.g. the rankings two MCDA methods produce):
//! - Spearman, weighted Spearman and the WS rank similarity coefficient
//! - Pearson product-moment correlation
//! - Kendall tau, Goodman-Kruskal gamma and tie-corrected Kendall tau-b
//!
//! All functions take two equal-length slices with at least two elements.
//! Denominators that vanish for a particular input are reported as
//! [`McdaError::DegenerateInput`] instead of producing NaN.

use core::fmt;

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::McdaError;

mod kendall;
mod pairs;
mod pearson;
mod rank;

pub use kendall::{goodman_kruskal_coeff, kendall_coeff, kendall_tau_coeff};
pub use pairs::{count_pairs, PairCounts};
pub use pearson::pearson_coeff;
pub use rank::{spearman_coeff, weighted_spearman_coeff, ws_coeff};

/// Check that `r` and `q` can be compared and return their common length.
pub(crate) fn validate_pair(
    context: &'static str,
    r: &[f64],
    q: &[f64],
) -> Result<usize, McdaError> {
    if r.len() != q.len() {
        return Err(McdaError::ShapeMismatch {
            context,
            expected: r.len(),
            found: q.len(),
        });
    }
    if r.len() < 2 {
        return Err(McdaError::TooFewElements {
            context,
            required: 2,
            found: r.len(),
        });
    }
    if r.iter().chain(q).any(|v| !v.is_finite()) {
        return Err(McdaError::degenerate(
            context,
            "non-finite value in a ranking vector",
        ));
    }
    Ok(r.len())
}

/// Selects one of the correlation coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    Spearman,
    WeightedSpearman,
    /// WS rank similarity coefficient
    Ws,
    Pearson,
    Kendall,
    GoodmanKruskal,
    /// Tie-corrected Kendall tau-b
    KendallTau,
}

impl CorrelationMethod {
    pub const ALL: [CorrelationMethod; 7] = [
        CorrelationMethod::Spearman,
        CorrelationMethod::WeightedSpearman,
        CorrelationMethod::Ws,
        CorrelationMethod::Pearson,
        CorrelationMethod::Kendall,
        CorrelationMethod::GoodmanKruskal,
        CorrelationMethod::KendallTau,
    ];

    /// Name of the function this method dispatches to.
    pub fn name(self) -> &'static str {
        match self {
            CorrelationMethod::Spearman => "spearman_coeff",
            CorrelationMethod::WeightedSpearman => "weighted_spearman_coeff",
            CorrelationMethod::Ws => "ws_coeff",
            CorrelationMethod::Pearson => "pearson_coeff",
            CorrelationMethod::Kendall => "kendall_coeff",
            CorrelationMethod::GoodmanKruskal => "goodman_kruskal_coeff",
            CorrelationMethod::KendallTau => "kendall_tau_coeff",
        }
    }

    /// Compare two ranking vectors with this coefficient.
    pub fn compute(self, r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
        let value = match self {
            CorrelationMethod::Spearman => spearman_coeff(r, q),
            CorrelationMethod::WeightedSpearman => weighted_spearman_coeff(r, q),
            CorrelationMethod::Ws => ws_coeff(r, q),
            CorrelationMethod::Pearson => pearson_coeff(r, q),
            CorrelationMethod::Kendall => kendall_coeff(r, q),
            CorrelationMethod::GoodmanKruskal => goodman_kruskal_coeff(r, q),
            CorrelationMethod::KendallTau => kendall_tau_coeff(r, q),
        }?;
        debug!(method = self.name(), n = r.len(), value, "Correlation computed");
        Ok(value)
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pairwise coefficient matrix between the columns of `rankings`.
///
/// Each column of `rankings` is one ranking vector over the same set of
/// alternatives (rows). Entry `(i, j)` of the result is
/// `method(column i, column j)`; the matrix is only symmetric when the
/// coefficient itself is.
pub fn correlation_matrix(
    rankings: &Array2<f64>,
    method: CorrelationMethod,
) -> Result<Array2<f64>, McdaError> {
    let columns: Vec<Vec<f64>> = rankings
        .axis_iter(Axis(1))
        .map(|column| column.to_vec())
        .collect();
    let k = columns.len();

    let mut matrix = Array2::<f64>::zeros((k, k));
    for (i, first) in columns.iter().enumerate() {
        for (j, second) in columns.iter().enumerate() {
            matrix[[i, j]] = method.compute(first, second)?;
        }
    }

    debug!(
        method = method.name(),
        rankings = k,
        alternatives = rankings.nrows(),
        "Correlation matrix computed"
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_validate_pair() {
        assert_eq!(validate_pair("t", &[1.0, 2.0], &[2.0, 1.0]), Ok(2));
        assert_eq!(
            validate_pair("t", &[1.0, 2.0, 3.0], &[2.0, 1.0]),
            Err(McdaError::ShapeMismatch {
                context: "t",
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            validate_pair("t", &[1.0], &[1.0]),
            Err(McdaError::TooFewElements {
                context: "t",
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_non_finite_ranks_are_rejected() {
        let finite = [1.0, 2.0, 3.0];
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let with_bad = [1.0, bad, 3.0];
            for method in CorrelationMethod::ALL {
                for (r, q) in [(&with_bad, &finite), (&finite, &with_bad)] {
                    assert_eq!(
                        method.compute(r, q),
                        Err(McdaError::DegenerateInput {
                            context: method.name(),
                            condition: "non-finite value in a ranking vector".into()
                        }),
                        "{} with {}",
                        method,
                        bad
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_method_reports_full_agreement() {
        let r = [1.0, 2.0, 3.0, 4.0, 5.0];
        for method in CorrelationMethod::ALL {
            let value = method.compute(&r, &r).unwrap();
            assert!(
                (value - 1.0).abs() < 1e-12,
                "{} on identical rankings gave {}",
                method,
                value
            );
        }
    }

    #[test]
    fn test_errors_carry_function_name() {
        for method in CorrelationMethod::ALL {
            let err = method.compute(&[1.0, 2.0], &[1.0]).unwrap_err();
            match err {
                McdaError::ShapeMismatch { context, .. } => assert_eq!(context, method.name()),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_correlation_matrix() {
        // Columns: identity ranking, its reversal, and a single swap
        let rankings = array![
            [1.0, 5.0, 1.0],
            [2.0, 4.0, 3.0],
            [3.0, 3.0, 2.0],
            [4.0, 2.0, 4.0],
            [5.0, 1.0, 5.0],
        ];
        let matrix = correlation_matrix(&rankings, CorrelationMethod::Spearman).unwrap();

        assert_eq!(matrix.dim(), (3, 3));
        for i in 0..3 {
            assert!((matrix[[i, i]] - 1.0).abs() < 1e-12);
        }
        assert!((matrix[[0, 1]] + 1.0).abs() < 1e-12);
        // One adjacent swap: sum d^2 = 2, 1 - 12/120 = 0.9
        assert!((matrix[[0, 2]] - 0.9).abs() < 1e-12);
        assert!((matrix[[0, 2]] - matrix[[2, 0]]).abs() < 1e-12);
    }

    #[test]
    fn test_method_serde_names() {
        let json = serde_json::to_string(&CorrelationMethod::GoodmanKruskal).unwrap();
        assert_eq!(json, "\"goodman_kruskal\"");
        let parsed: CorrelationMethod = serde_json::from_str("\"kendall_tau\"").unwrap();
        assert_eq!(parsed, CorrelationMethod::KendallTau);
    }
}

//! Numerical building blocks for multi-criteria decision analysis (MCDA).
//!
//! - [`correlation`]: agreement between two ranking vectors (Spearman,
//!   weighted Spearman, WS, Pearson, Kendall, Goodman-Kruskal, tau-b)
//! - [`normalization`]: column-wise rescaling of a decision matrix with
//!   per-column benefit/cost direction
//! - [`weighting`]: objective criteria weights from entropy
//!
//! Every function is pure: inputs are borrowed, outputs freshly allocated,
//! and degenerate inputs are reported as [`McdaError`] rather than NaN.

pub mod config;
pub mod correlation;
pub mod criteria;
pub mod error;
pub mod normalization;
pub mod weighting;

pub use config::McdaConfig;
pub use correlation::{
    correlation_matrix, count_pairs, goodman_kruskal_coeff, kendall_coeff, kendall_tau_coeff,
    pearson_coeff, spearman_coeff, weighted_spearman_coeff, ws_coeff, CorrelationMethod,
    PairCounts,
};
pub use criteria::{parse_types, CriterionType};
pub use error::McdaError;
pub use normalization::{
    linear_normalization, max_normalization, minmax_normalization, sum_normalization,
    vector_normalization, NormalizationMethod,
};
pub use weighting::entropy_weighting;

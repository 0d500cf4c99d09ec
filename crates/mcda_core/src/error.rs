//! Error taxonomy shared by every public operation.

use thiserror::Error;

/// Errors raised by the correlation, normalization and weighting routines.
///
/// Every variant is terminal for the call that produced it. `context` always
/// names the public operation that rejected the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdaError {
    /// Input dimensions are inconsistent with each other.
    #[error("{context}: shape mismatch, expected {expected} but found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// Input is too short for the formula to be defined.
    #[error("{context}: needs at least {required} elements, found {found}")]
    TooFewElements {
        context: &'static str,
        required: usize,
        found: usize,
    },

    /// A denominator of the formula vanishes for this input.
    #[error("{context}: degenerate input ({condition})")]
    DegenerateInput {
        context: &'static str,
        condition: String,
    },

    /// A raw criterion sign outside {+1, -1}.
    #[error("invalid criterion type {value} in column {column}: expected 1 (benefit) or -1 (cost)")]
    InvalidCriterionType { column: usize, value: f64 },
}

impl McdaError {
    pub(crate) fn degenerate(context: &'static str, condition: impl Into<String>) -> Self {
        let condition = condition.into();
        tracing::debug!(context, condition = %condition, "Rejected degenerate input");
        McdaError::DegenerateInput { context, condition }
    }
}

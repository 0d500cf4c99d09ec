//! Criterion direction (benefit vs. cost) for decision-matrix columns.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::McdaError;

/// Direction of a decision criterion.
///
/// Raw data usually encodes this as a sign vector: `1` for benefit columns
/// (higher is better) and `-1` for cost columns (lower is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionType {
    Benefit,
    Cost,
}

impl CriterionType {
    /// Sign encoding: `1.0` for benefit, `-1.0` for cost.
    pub fn sign(self) -> f64 {
        match self {
            CriterionType::Benefit => 1.0,
            CriterionType::Cost => -1.0,
        }
    }

    /// Decode a raw sign. `column` is only used for the error report.
    pub fn from_sign(value: f64, column: usize) -> Result<Self, McdaError> {
        if value == 1.0 {
            Ok(CriterionType::Benefit)
        } else if value == -1.0 {
            Ok(CriterionType::Cost)
        } else {
            Err(McdaError::InvalidCriterionType { column, value })
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Benefit => write!(f, "benefit"),
            CriterionType::Cost => write!(f, "cost"),
        }
    }
}

/// Convert a raw sign vector into criterion types.
///
/// Fails on the first entry that is neither `1` nor `-1`.
pub fn parse_types(signs: &[f64]) -> Result<Vec<CriterionType>, McdaError> {
    signs
        .iter()
        .enumerate()
        .map(|(column, &value)| CriterionType::from_sign(value, column))
        .collect()
}

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationMethod;
use crate::criteria::CriterionType;
use crate::error::McdaError;
use crate::normalization::NormalizationMethod;

/// Method selection for callers that choose coefficients and normalizations
/// from configuration rather than in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct McdaConfig {
    /// Coefficient used to compare rankings (spearman, weighted_spearman, ws,
    /// pearson, kendall, goodman_kruskal, kendall_tau)
    pub correlation: CorrelationMethod,

    /// Column rescaling scheme (linear, min_max, max, sum, vector)
    pub normalization: NormalizationMethod,
}

impl Default for McdaConfig {
    fn default() -> Self {
        Self {
            correlation: CorrelationMethod::Spearman,
            normalization: NormalizationMethod::MinMax,
        }
    }
}

impl McdaConfig {
    /// Compare two rankings with the configured coefficient.
    pub fn correlate(&self, r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
        self.correlation.compute(r, q)
    }

    /// Normalize a decision matrix with the configured scheme.
    pub fn normalize(
        &self,
        matrix: &Array2<f64>,
        types: &[CriterionType],
    ) -> Result<Array2<f64>, McdaError> {
        self.normalization.apply(matrix, types)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

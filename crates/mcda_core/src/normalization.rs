//! Decision Matrix Normalization Module
//!
//! Rescales every column of an `M x N` decision matrix (M alternatives,
//! N criteria) onto a unitless range. Benefit columns keep their direction;
//! cost columns are inverted so that a higher normalized value is always
//! better:
//!
//! | Method   | Benefit column          | Cost column                  |
//! |----------|-------------------------|------------------------------|
//! | linear   | `x / max`               | `min / x`                    |
//! | min-max  | `(x - min) / (max - min)` | `(max - x) / (max - min)`  |
//! | max      | `x / max`               | `1 - x / max`                |
//! | sum      | `x / sum`               | `(1 / x) / sum(1 / x)`       |
//! | vector   | `x / sqrt(sum(x^2))`    | `1 - x / sqrt(sum(x^2))`     |
//!
//! Columns are independent of each other. The input matrix is only borrowed;
//! every function allocates its output.

use core::fmt;

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::criteria::CriterionType;
use crate::error::McdaError;

/// Selects one of the normalization schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    Linear,
    MinMax,
    Max,
    Sum,
    Vector,
}

impl NormalizationMethod {
    pub const ALL: [NormalizationMethod; 5] = [
        NormalizationMethod::Linear,
        NormalizationMethod::MinMax,
        NormalizationMethod::Max,
        NormalizationMethod::Sum,
        NormalizationMethod::Vector,
    ];

    /// Name of the function this method dispatches to.
    pub fn name(self) -> &'static str {
        match self {
            NormalizationMethod::Linear => "linear_normalization",
            NormalizationMethod::MinMax => "minmax_normalization",
            NormalizationMethod::Max => "max_normalization",
            NormalizationMethod::Sum => "sum_normalization",
            NormalizationMethod::Vector => "vector_normalization",
        }
    }

    /// Normalize `matrix` column by column with this scheme.
    pub fn apply(
        self,
        matrix: &Array2<f64>,
        types: &[CriterionType],
    ) -> Result<Array2<f64>, McdaError> {
        let normalized = match self {
            NormalizationMethod::Linear => linear_normalization(matrix, types),
            NormalizationMethod::MinMax => minmax_normalization(matrix, types),
            NormalizationMethod::Max => max_normalization(matrix, types),
            NormalizationMethod::Sum => sum_normalization(matrix, types),
            NormalizationMethod::Vector => vector_normalization(matrix, types),
        }?;
        debug!(
            method = self.name(),
            alternatives = matrix.nrows(),
            criteria = matrix.ncols(),
            "Decision matrix normalized"
        );
        Ok(normalized)
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Linear normalization: `x / max` for benefit, `min / x` for cost columns.
pub fn linear_normalization(
    matrix: &Array2<f64>,
    types: &[CriterionType],
) -> Result<Array2<f64>, McdaError> {
    const CONTEXT: &str = "linear_normalization";
    normalize_columns(CONTEXT, matrix, types, |j, column, ty| match ty {
        CriterionType::Benefit => {
            let max = nonzero(CONTEXT, column_max(&column), "zero maximum", j)?;
            Ok(column.mapv(|x| x / max))
        }
        CriterionType::Cost => {
            reject_zero_entries(CONTEXT, &column, j)?;
            let min = column_min(&column);
            Ok(column.mapv(|x| min / x))
        }
    })
}

/// Min-max normalization onto `[0, 1]`.
///
/// The best value of every column maps to 1.0 and the worst to 0.0.
pub fn minmax_normalization(
    matrix: &Array2<f64>,
    types: &[CriterionType],
) -> Result<Array2<f64>, McdaError> {
    const CONTEXT: &str = "minmax_normalization";
    normalize_columns(CONTEXT, matrix, types, |j, column, ty| {
        let max = column_max(&column);
        let min = column_min(&column);
        let range = nonzero(CONTEXT, max - min, "zero range", j)?;
        Ok(match ty {
            CriterionType::Benefit => column.mapv(|x| (x - min) / range),
            CriterionType::Cost => column.mapv(|x| (max - x) / range),
        })
    })
}

/// Max normalization: `x / max` for benefit, `1 - x / max` for cost columns.
pub fn max_normalization(
    matrix: &Array2<f64>,
    types: &[CriterionType],
) -> Result<Array2<f64>, McdaError> {
    const CONTEXT: &str = "max_normalization";
    normalize_columns(CONTEXT, matrix, types, |j, column, ty| {
        let max = nonzero(CONTEXT, column_max(&column), "zero maximum", j)?;
        Ok(match ty {
            CriterionType::Benefit => column.mapv(|x| x / max),
            CriterionType::Cost => column.mapv(|x| 1.0 - x / max),
        })
    })
}

/// Sum normalization: every column sums to 1.
///
/// Cost columns are normalized on their reciprocals.
pub fn sum_normalization(
    matrix: &Array2<f64>,
    types: &[CriterionType],
) -> Result<Array2<f64>, McdaError> {
    const CONTEXT: &str = "sum_normalization";
    normalize_columns(CONTEXT, matrix, types, |j, column, ty| match ty {
        CriterionType::Benefit => {
            let sum = nonzero(CONTEXT, column.sum(), "zero sum", j)?;
            Ok(column.mapv(|x| x / sum))
        }
        CriterionType::Cost => {
            reject_zero_entries(CONTEXT, &column, j)?;
            let reciprocals = column.mapv(f64::recip);
            let sum = nonzero(CONTEXT, reciprocals.sum(), "zero sum of reciprocals", j)?;
            Ok(reciprocals / sum)
        }
    })
}

/// Vector normalization by the Euclidean norm of each column.
pub fn vector_normalization(
    matrix: &Array2<f64>,
    types: &[CriterionType],
) -> Result<Array2<f64>, McdaError> {
    const CONTEXT: &str = "vector_normalization";
    normalize_columns(CONTEXT, matrix, types, |j, column, ty| {
        let norm = column.iter().map(|&x| x * x).sum::<f64>().sqrt();
        let norm = nonzero(CONTEXT, norm, "zero Euclidean norm", j)?;
        Ok(match ty {
            CriterionType::Benefit => column.mapv(|x| x / norm),
            CriterionType::Cost => column.mapv(|x| 1.0 - x / norm),
        })
    })
}

/// Validate shapes, then build the output one column at a time.
fn normalize_columns<F>(
    context: &'static str,
    matrix: &Array2<f64>,
    types: &[CriterionType],
    mut transform: F,
) -> Result<Array2<f64>, McdaError>
where
    F: FnMut(usize, ArrayView1<'_, f64>, CriterionType) -> Result<Array1<f64>, McdaError>,
{
    if types.len() != matrix.ncols() {
        return Err(McdaError::ShapeMismatch {
            context,
            expected: matrix.ncols(),
            found: types.len(),
        });
    }
    if matrix.nrows() == 0 {
        return Err(McdaError::TooFewElements {
            context,
            required: 1,
            found: 0,
        });
    }

    let mut normalized = Array2::<f64>::zeros(matrix.raw_dim());
    for (j, (column, &ty)) in matrix.axis_iter(Axis(1)).zip(types.iter()).enumerate() {
        let values = transform(j, column, ty)?;
        normalized.column_mut(j).assign(&values);
    }
    Ok(normalized)
}

fn column_max(column: &ArrayView1<'_, f64>) -> f64 {
    column.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x))
}

fn column_min(column: &ArrayView1<'_, f64>) -> f64 {
    column.fold(f64::INFINITY, |acc, &x| acc.min(x))
}

fn nonzero(
    context: &'static str,
    value: f64,
    what: &str,
    column: usize,
) -> Result<f64, McdaError> {
    if value == 0.0 {
        Err(McdaError::degenerate(
            context,
            format!("{} in column {}", what, column),
        ))
    } else {
        Ok(value)
    }
}

/// Cost transforms that divide by `x` cannot accept a zero entry.
fn reject_zero_entries(
    context: &'static str,
    column: &ArrayView1<'_, f64>,
    j: usize,
) -> Result<(), McdaError> {
    match column.iter().position(|&x| x == 0.0) {
        Some(row) => Err(McdaError::degenerate(
            context,
            format!("zero value at row {} of cost column {}", row, j),
        )),
        None => Ok(()),
    }
}

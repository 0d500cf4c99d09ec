use crate::correlation::validate_pair;
use crate::error::McdaError;

/// Pearson product-moment correlation coefficient.
///
/// Returns a value between -1.0 (perfect inverse correlation) and 1.0
/// (perfect correlation). A constant vector has zero variance and is
/// rejected as degenerate.
pub fn pearson_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("pearson_coeff", r, q)? as f64;

    let mean_r = r.iter().sum::<f64>() / n;
    let mean_q = q.iter().sum::<f64>() / n;

    let (covariance, var_r, var_q) =
        r.iter()
            .zip(q.iter())
            .fold((0.0, 0.0, 0.0), |(cov, vr, vq), (&ri, &qi)| {
                let dr = ri - mean_r;
                let dq = qi - mean_q;
                (cov + dr * dq, vr + dr * dr, vq + dq * dq)
            });

    let denominator = (var_r * var_q).sqrt();
    if denominator == 0.0 {
        return Err(McdaError::degenerate(
            "pearson_coeff",
            "zero variance in a ranking vector",
        ));
    }

    Ok(covariance / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_linear() {
        let r = [1.0, 2.0, 3.0];
        let q = [2.0, 4.0, 6.0];
        assert!((pearson_coeff(&r, &q).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_agreement() {
        // dr = [-1, 0, 1], dq = [-1, 1, 0]: cov = 1, var = 2 and 2
        let r = [1.0, 2.0, 3.0];
        let q = [1.0, 3.0, 2.0];
        assert!((pearson_coeff(&r, &q).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_vector_is_degenerate() {
        let err = pearson_coeff(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap_err();
        assert!(matches!(
            err,
            McdaError::DegenerateInput {
                context: "pearson_coeff",
                ..
            }
        ));
    }
}

//! Rank-difference coefficients: Spearman, weighted Spearman and WS.

use crate::correlation::validate_pair;
use crate::error::McdaError;

/// Spearman rank correlation coefficient.
///
/// `rS = 1 - 6 * sum((R_i - Q_i)^2) / (N * (N^2 - 1))`
///
/// Assumes both vectors hold ranks without ties; for arbitrary scores the
/// value is still computed with the same formula.
pub fn spearman_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("spearman_coeff", r, q)? as f64;

    let sum_sq: f64 = r
        .iter()
        .zip(q.iter())
        .map(|(&ri, &qi)| (ri - qi) * (ri - qi))
        .sum();

    Ok(1.0 - 6.0 * sum_sq / (n * (n * n - 1.0)))
}

/// Weighted Spearman coefficient `rW`.
///
/// Each squared rank difference is weighted by `(N - R_i + 1) + (N - Q_i + 1)`,
/// so disagreements near the top of the rankings cost more than those near
/// the bottom.
///
/// `rW = 1 - 6 * sum((R_i - Q_i)^2 * ((N - R_i + 1) + (N - Q_i + 1))) / (N^4 + N^3 - N^2 - N)`
pub fn weighted_spearman_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("weighted_spearman_coeff", r, q)? as f64;

    let numerator: f64 = r
        .iter()
        .zip(q.iter())
        .map(|(&ri, &qi)| {
            let diff = ri - qi;
            diff * diff * ((n - ri + 1.0) + (n - qi + 1.0))
        })
        .sum();
    let denominator = n.powi(4) + n.powi(3) - n * n - n;

    Ok(1.0 - 6.0 * numerator / denominator)
}

/// WS rank similarity coefficient.
///
/// `WS = 1 - sum(2^(-R_i) * |R_i - Q_i| / max(|R_i - 1|, |R_i - N|))`
///
/// The denominator is taken element by element: for each position it is the
/// larger of the distance from the best rank and the distance from the worst
/// rank of `R_i`. The coefficient is asymmetric, `R` is the reference ranking.
pub fn ws_coeff(r: &[f64], q: &[f64]) -> Result<f64, McdaError> {
    let n = validate_pair("ws_coeff", r, q)? as f64;

    // reach >= (N - 1) / 2 > 0 for every real R_i once N >= 2
    let penalty: f64 = r
        .iter()
        .zip(q.iter())
        .map(|(&ri, &qi)| {
            let reach = (ri - 1.0).abs().max((ri - n).abs());
            (-ri).exp2() * (ri - qi).abs() / reach
        })
        .sum();

    Ok(1.0 - penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_spearman_reversal() {
        let r = [1.0, 2.0, 3.0, 4.0, 5.0];
        let q = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert!((spearman_coeff(&r, &q).unwrap() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_spearman_two_elements() {
        // N = 2: denominator 6, swapped ranks give sum d^2 = 2
        assert!((spearman_coeff(&[1.0, 2.0], &[2.0, 1.0]).unwrap() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_weighted_spearman() {
        let r = [1.0, 2.0, 3.0];
        let q = [1.0, 3.0, 2.0];
        // Numerator 6 * (1 * 3 + 1 * 3) = 36, denominator 81 + 27 - 9 - 3 = 96
        assert!((weighted_spearman_coeff(&r, &q).unwrap() - 0.625).abs() < EPS);
        assert!((weighted_spearman_coeff(&r, &r).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_weighted_spearman_penalizes_top_swaps() {
        let r = [1.0, 2.0, 3.0, 4.0];
        let top_swap = [2.0, 1.0, 3.0, 4.0];
        let bottom_swap = [1.0, 2.0, 4.0, 3.0];
        let top = weighted_spearman_coeff(&r, &top_swap).unwrap();
        let bottom = weighted_spearman_coeff(&r, &bottom_swap).unwrap();
        assert!(top < bottom, "top={} bottom={}", top, bottom);
    }

    #[test]
    fn test_ws_coeff() {
        let r = [1.0, 2.0, 3.0];
        let q = [1.0, 3.0, 2.0];
        // 0 + 2^-2 * 1 / max(1, 1) + 2^-3 * 1 / max(2, 0) = 0.3125
        assert!((ws_coeff(&r, &q).unwrap() - 0.6875).abs() < EPS);
    }

    #[test]
    fn test_ws_coeff_is_asymmetric() {
        let r = [1.0, 2.0, 3.0, 4.0];
        let q = [3.0, 1.0, 2.0, 4.0];
        let forward = ws_coeff(&r, &q).unwrap();
        let backward = ws_coeff(&q, &r).unwrap();
        // Element-wise reach: r -> [3, 2, 2, 3], q -> [2, 3, 2, 3]
        let expected_forward = 1.0 - (0.5 * 2.0 / 3.0 + 0.25 / 2.0 + 0.125 / 2.0);
        let expected_backward = 1.0 - (0.125 * 2.0 / 2.0 + 0.5 / 3.0 + 0.25 / 2.0);
        assert!((forward - expected_forward).abs() < EPS);
        assert!((backward - expected_backward).abs() < EPS);
        assert!((forward - backward).abs() > 0.05);
    }
}

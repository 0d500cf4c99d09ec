//! Ranking Comparison Demo
//!
//! Derives entropy weights for a small decision matrix, scores the
//! alternatives under two normalizations and compares the resulting rankings
//! with every correlation coefficient.
//!
//! Usage: cargo run --example compare_rankings

use anyhow::{Context, Result};
use mcda_core::{
    correlation_matrix, entropy_weighting, parse_types, CorrelationMethod, NormalizationMethod,
};
use ndarray::{array, Array1, Array2};
use tracing::info;

/// Rank 1 goes to the highest score.
fn rank_descending(scores: &Array1<f64>) -> Vec<f64> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0.0; scores.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = (position + 1) as f64;
    }
    ranks
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Five alternatives: price, range, charging time, comfort
    let matrix = array![
        [42_000.0, 410.0, 35.0, 7.0],
        [38_500.0, 360.0, 40.0, 6.0],
        [51_000.0, 520.0, 25.0, 8.0],
        [45_500.0, 450.0, 30.0, 9.0],
        [36_000.0, 300.0, 55.0, 5.0],
    ];
    let types = parse_types(&[-1.0, 1.0, -1.0, 1.0]).context("criterion signs")?;

    let weights = entropy_weighting(&matrix).context("entropy weighting")?;
    info!(weights = ?weights.to_vec(), "Criteria weights");

    let methods = [NormalizationMethod::MinMax, NormalizationMethod::Vector];
    let mut rankings = Array2::<f64>::zeros((matrix.nrows(), methods.len()));
    for (k, method) in methods.iter().enumerate() {
        let normalized = method
            .apply(&matrix, &types)
            .with_context(|| format!("normalizing with {}", method))?;
        let scores = normalized.dot(&weights);
        let ranks = rank_descending(&scores);
        info!(method = method.name(), ranks = ?ranks, "Ranking");
        rankings.column_mut(k).assign(&Array1::from(ranks));
    }

    println!("\nAgreement between {} and {}:", methods[0], methods[1]);
    for method in CorrelationMethod::ALL {
        let matrix = correlation_matrix(&rankings, method)?;
        println!("  {:<24} {:>8.4}", method.name(), matrix[[0, 1]]);
    }

    Ok(())
}

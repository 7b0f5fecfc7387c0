//! Per-pair statistic and p-value computation.
//!
//! For groups i < j with sizes nᵢ, nⱼ over a pooled sample of size n:
//!
//! ```text
//! y    = meanRank(i) − meanRank(j)
//! g    = sqrt((n(n+1)/12 − tie/(12(n−1))) · (1/nᵢ + 1/nⱼ))
//! stat = y / g
//! ```
//!
//! with a two-tailed p-value against the standard normal reference.

use dunn_core::errors::ComputeError;
use statrs::distribution::{ContinuousCDF, Normal};

use super::types::PairResult;
use crate::ranks::RankTable;

/// Compute the z statistic and p-value for every unordered group pair,
/// in canonical (i, j) order.
///
/// `labels` must have one entry per group in `table`. Fails with a
/// degenerate-variance error when the radicand is zero, negative, or
/// non-finite — the all-values-tied edge of the formula.
pub fn pairwise_statistics(
    labels: &[String],
    table: &RankTable,
) -> Result<Vec<PairResult>, ComputeError> {
    debug_assert_eq!(labels.len(), table.group_count());

    let n = table.len() as f64;
    let tie = table.tie_correction();
    // Pooled part of the variance term. Collapses to exactly zero when
    // every observation falls into a single tie run.
    let pooled_variance = n * (n + 1.0) / 12.0 - tie / (12.0 * (n - 1.0));

    let k = table.group_count();
    let mut pairs = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k - 1 {
        for j in i + 1..k {
            let n_i = table.group_len(i) as f64;
            let n_j = table.group_len(j) as f64;
            let y = table.mean_rank(i) - table.mean_rank(j);
            let radicand = pooled_variance * (1.0 / n_i + 1.0 / n_j);
            if radicand <= 0.0 || !radicand.is_finite() {
                return Err(ComputeError::DegenerateVariance { radicand });
            }
            let statistic = y / radicand.sqrt();
            pairs.push(PairResult {
                id: format!("{}-{}", labels[i], labels[j]),
                statistic,
                p_value: two_tailed_p(statistic),
                q_value: None,
            });
        }
    }
    Ok(pairs)
}

/// Two-tailed p-value of a z statistic against the standard normal.
///
/// Branches on Φ(stat) instead of assuming the statistic's sign; both
/// branches agree at stat = 0, giving p = 1.
fn two_tailed_p(statistic: f64) -> f64 {
    let phi = match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.cdf(statistic),
        Err(_) => return f64::NAN, // standard normal parameters are always valid
    };
    if phi > 0.5 {
        2.0 * (1.0 - phi)
    } else {
        2.0 * phi
    }
}

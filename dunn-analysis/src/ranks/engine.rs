//! Mid-rank assignment over the pooled sample.

use dunn_core::errors::InputError;
use rustc_hash::FxHashMap;

use super::types::{value_key, RankTable};

/// Compute pooled mid-ranks and the tie correction for `groups`.
///
/// Requires at least 2 groups, each non-empty. The caller's data is never
/// mutated: pooling and sorting happen on internal copies. Values that
/// compare equal are tied regardless of which group supplied them, and
/// every occurrence of a tied value receives the identical mid-rank.
pub fn rank(groups: &[Vec<f64>]) -> Result<RankTable, InputError> {
    if groups.len() < 2 {
        return Err(InputError::TooFewGroups {
            found: groups.len(),
        });
    }
    for (index, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(InputError::EmptyGroup { index });
        }
    }

    let mut pooled: Vec<f64> = groups.iter().flatten().copied().collect();
    if pooled.is_empty() {
        return Err(InputError::EmptyPooledSample);
    }
    let n = pooled.len();
    pooled.sort_by(f64::total_cmp);

    // Walk runs of equal values in the sorted pool. A run of t values
    // occupying ordinal ranks start+1 ..= end gets the mid-rank
    // (start + end + 1) / 2; runs of t > 1 feed the tie correction.
    let mut by_value: FxHashMap<u64, f64> = FxHashMap::default();
    let mut tie_correction = 0.0;
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && pooled[end] == pooled[start] {
            end += 1;
        }
        let mid_rank = (start + end + 1) as f64 / 2.0;
        by_value.insert(value_key(pooled[start]), mid_rank);
        let t = (end - start) as f64;
        if t > 1.0 {
            tie_correction += t * t * t - t;
        }
        start = end;
    }

    let group_ranks: Vec<Vec<f64>> = groups
        .iter()
        .map(|group| group.iter().map(|&v| by_value[&value_key(v)]).collect())
        .collect();

    tracing::debug!(
        n,
        groups = groups.len(),
        tie_correction,
        "pooled sample ranked"
    );

    Ok(RankTable::new(group_ranks, n, tie_correction, by_value))
}

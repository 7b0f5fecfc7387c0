//! Core types for the rank engine.

use rustc_hash::FxHashMap;

/// Mid-ranks of a pooled sample, plus the tie correction term.
///
/// Built once per invocation by [`rank`](super::rank) and immutable
/// afterward. Lookup is by value, never by original position, so tied
/// values resolve to the same mid-rank no matter which group supplied
/// them.
#[derive(Debug, Clone)]
pub struct RankTable {
    /// Mid-ranks per group, element order preserved within each group.
    group_ranks: Vec<Vec<f64>>,
    /// Pooled sample size.
    n: usize,
    /// Σ(t³ − t) over pooled tie runs of size t > 1.
    tie_correction: f64,
    /// Normalized value bits → mid-rank.
    by_value: FxHashMap<u64, f64>,
}

impl RankTable {
    pub(crate) fn new(
        group_ranks: Vec<Vec<f64>>,
        n: usize,
        tie_correction: f64,
        by_value: FxHashMap<u64, f64>,
    ) -> Self {
        Self {
            group_ranks,
            n,
            tie_correction,
            by_value,
        }
    }

    /// Pooled sample size.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Σ(t³ − t) over pooled tie runs of size t > 1.
    pub fn tie_correction(&self) -> f64 {
        self.tie_correction
    }

    /// Number of input groups.
    pub fn group_count(&self) -> usize {
        self.group_ranks.len()
    }

    /// Size of one group.
    pub fn group_len(&self, group: usize) -> usize {
        self.group_ranks[group].len()
    }

    /// Mid-ranks of one group, in the group's original element order.
    pub fn group_ranks(&self, group: usize) -> &[f64] {
        &self.group_ranks[group]
    }

    /// Mean mid-rank of one group.
    pub fn mean_rank(&self, group: usize) -> f64 {
        let ranks = &self.group_ranks[group];
        ranks.iter().sum::<f64>() / ranks.len() as f64
    }

    /// Mid-rank of a pooled value, or `None` if the value never occurred.
    pub fn rank_of(&self, value: f64) -> Option<f64> {
        self.by_value.get(&value_key(value)).copied()
    }

    /// Sum of all mid-ranks; n(n+1)/2 by construction.
    pub fn rank_sum(&self) -> f64 {
        self.group_ranks.iter().flatten().sum()
    }
}

/// Hash key for a pooled value. Folds -0.0 into +0.0 so both zeros share
/// one mid-rank. NaN must never reach the engine (sanitizer contract).
pub(crate) fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

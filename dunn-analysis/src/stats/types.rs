//! Result records for the pairwise comparisons.

use dunn_core::config::CorrectionMethod;
use serde::{Deserialize, Serialize};

/// One pairwise comparison between two groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResult {
    /// Pair identifier, `<label_i>-<label_j>` in canonical order.
    pub id: String,
    /// Signed z-like test statistic.
    pub statistic: f64,
    /// Two-tailed p-value against the standard normal reference.
    pub p_value: f64,
    /// Adjusted value; populated only when a correction was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_value: Option<f64>,
}

impl PairResult {
    /// The value a report should display: q when corrected, raw p otherwise.
    pub fn reported_value(&self) -> f64 {
        self.q_value.unwrap_or(self.p_value)
    }
}

/// Ordered result set of one test invocation. Owned by the caller once
/// returned; the engine never mutates it afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DunnReport {
    /// Pairwise results in canonical order: i = 0..k-2, j = i+1..k-1,
    /// lexicographic over (i, j). Positional contract for consumers.
    pub pairs: Vec<PairResult>,
    /// Correction method that produced the q-values.
    pub correction: CorrectionMethod,
    /// Group labels, in caller group order.
    pub labels: Vec<String>,
}

impl DunnReport {
    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.labels.len()
    }

    /// The result for pair (i, j), i < j, via the canonical ordering.
    pub fn pair(&self, i: usize, j: usize) -> Option<&PairResult> {
        let k = self.labels.len();
        if i >= j || j >= k {
            return None;
        }
        let index = i * (k - 1) - i * (i - 1) / 2 + (j - i - 1);
        self.pairs.get(index)
    }
}

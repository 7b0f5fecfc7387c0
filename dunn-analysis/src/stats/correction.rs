//! Multiple-comparison corrections over the raw p-values.

use dunn_core::config::CorrectionMethod;

use super::types::PairResult;

/// Apply `method` to `pairs`, populating each `q_value` in place.
///
/// `None` leaves every q-value unset. Pure given its inputs; the pair
/// order is never changed.
pub fn apply_correction(pairs: &mut [PairResult], method: CorrectionMethod) {
    match method {
        CorrectionMethod::None => {}
        CorrectionMethod::Bonferroni => bonferroni(pairs),
        CorrectionMethod::Fdr => fdr_step_up(pairs),
    }
}

/// q = min(1, p·m) over m comparisons.
fn bonferroni(pairs: &mut [PairResult]) {
    let m = pairs.len() as f64;
    for pair in pairs.iter_mut() {
        pair.q_value = Some((pair.p_value * m).min(1.0));
    }
}

/// Benjamini-Hochberg step-up, descending-rank form.
///
/// The m p-values are sorted descending; a p-value first occurring at
/// position i (1-based, 1 = largest) gets q = p·m/(m+1−i). Every q is
/// capped from above at the largest raw p-value. Equal p-values share
/// the rank of their first occurrence in the sorted order.
fn fdr_step_up(pairs: &mut [PairResult]) {
    if pairs.is_empty() {
        return;
    }
    let m = pairs.len() as f64;
    let mut descending: Vec<f64> = pairs.iter().map(|p| p.p_value).collect();
    descending.sort_by(|a, b| b.total_cmp(a));
    let p_top = descending[0];

    for pair in pairs.iter_mut() {
        let position = descending
            .iter()
            .position(|&p| p == pair.p_value)
            .map_or(1, |idx| idx + 1);
        let q = pair.p_value * (m / (m + 1.0 - position as f64));
        pair.q_value = Some(if q >= p_top { p_top } else { q });
    }
}

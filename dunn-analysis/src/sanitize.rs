//! Input cleaning ahead of the rank engine.
//!
//! Missing observations arrive as NaN (or infinities from upstream
//! arithmetic); the rank engine requires finite values. Cleaning is an
//! explicit pre-step — `dunn_test` never cleans implicitly.

/// Groups smaller than this after cleaning trigger a low-power warning.
pub const MIN_GROUP_SIZE: usize = 5;

/// Remove non-finite observations from every group.
///
/// Group order and the relative order of surviving observations are
/// preserved. Groups left with fewer than [`MIN_GROUP_SIZE`] observations
/// are warned about but never removed or rejected here — downstream
/// validation decides whether an emptied group is fatal.
pub fn clean_groups(groups: &[Vec<f64>]) -> Vec<Vec<f64>> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let cleaned: Vec<f64> = group.iter().copied().filter(|v| v.is_finite()).collect();
            let dropped = group.len() - cleaned.len();
            if dropped > 0 {
                tracing::debug!(group = index, dropped, "dropped non-finite observations");
            }
            if cleaned.len() < MIN_GROUP_SIZE {
                tracing::warn!(
                    group = index,
                    len = cleaned.len(),
                    min = MIN_GROUP_SIZE,
                    "cleaned group is small; low statistical power"
                );
            }
            cleaned
        })
        .collect()
}

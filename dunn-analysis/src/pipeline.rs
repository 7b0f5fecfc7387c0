//! End-to-end test invocation: validate, rank, compare, correct.

use dunn_core::config::DunnConfig;
use dunn_core::errors::DunnResult;

use crate::ranks;
use crate::stats::{self, DunnReport};

/// Run Dunn's test over `groups`.
///
/// Labels are validated and defaulted up front, then the pooled sample
/// is ranked, every unordered pair is compared, and the configured
/// correction is applied. Any failure aborts the invocation — no partial
/// report is ever returned, and reporters are never invoked on failure.
///
/// Pure and single-threaded; concurrent invocations share no state.
pub fn dunn_test(groups: &[Vec<f64>], config: &DunnConfig) -> DunnResult<DunnReport> {
    let labels = config.resolve_labels(groups.len())?;
    let table = ranks::rank(groups)?;
    let mut pairs = stats::pairwise_statistics(&labels, &table)?;
    stats::apply_correction(&mut pairs, config.correction);

    tracing::debug!(
        groups = groups.len(),
        pooled = table.len(),
        pairs = pairs.len(),
        correction = %config.correction,
        "dunn test complete"
    );

    Ok(DunnReport {
        pairs,
        correction: config.correction,
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dunn_core::config::CorrectionMethod;
    use dunn_core::errors::{DunnError, InputError};

    #[test]
    fn test_default_labels_and_pair_count() {
        let groups = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let report = dunn_test(&groups, &DunnConfig::new()).unwrap();
        assert_eq!(report.labels, vec!["0", "1", "2"]);
        assert_eq!(report.pairs.len(), 3);
        assert_eq!(report.correction, CorrectionMethod::None);
    }

    #[test]
    fn test_label_mismatch_aborts_before_ranking() {
        // The empty group would also fail, but the label check fires first.
        let groups = vec![vec![1.0], vec![]];
        let config = DunnConfig::new().with_labels(["a"]);
        let err = dunn_test(&groups, &config).unwrap_err();
        assert!(matches!(
            err,
            DunnError::Input(InputError::LabelCountMismatch { groups: 2, labels: 1 })
        ));
    }
}

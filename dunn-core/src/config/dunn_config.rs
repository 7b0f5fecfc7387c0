//! Per-invocation test configuration.

use serde::{Deserialize, Serialize};

use super::CorrectionMethod;
use crate::errors::InputError;

/// Configuration for one test invocation.
///
/// Labels are optional; when absent, groups get positional labels
/// "0".."k-1". There is no fallback argument unpacking: groups always
/// arrive as one slice of samples, configuration always arrives here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DunnConfig {
    /// Group labels, one per group, in group order.
    pub labels: Option<Vec<String>>,
    /// Multiple-comparison correction to apply.
    pub correction: CorrectionMethod,
}

impl DunnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit group labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the correction method.
    pub fn with_correction(mut self, correction: CorrectionMethod) -> Self {
        self.correction = correction;
        self
    }

    /// Resolve the effective labels for `k` groups.
    ///
    /// Supplied labels must match the group count exactly; absent labels
    /// default to positional "0".."k-1".
    pub fn resolve_labels(&self, k: usize) -> Result<Vec<String>, InputError> {
        match &self.labels {
            Some(labels) if labels.len() != k => Err(InputError::LabelCountMismatch {
                groups: k,
                labels: labels.len(),
            }),
            Some(labels) => Ok(labels.clone()),
            None => Ok((0..k).map(|i| i.to_string()).collect()),
        }
    }
}

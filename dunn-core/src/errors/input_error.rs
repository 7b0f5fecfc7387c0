//! Input validation errors.

/// Errors that can occur while validating the caller-supplied groups
/// and labels. All are unrecoverable for the current invocation.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Group {index} is empty")]
    EmptyGroup { index: usize },

    #[error("Need at least 2 groups, got {found}")]
    TooFewGroups { found: usize },

    #[error("Pooled sample is empty")]
    EmptyPooledSample,

    #[error("Got {groups} groups but {labels} labels")]
    LabelCountMismatch { groups: usize, labels: usize },
}

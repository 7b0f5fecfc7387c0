//! Argument errors.

/// Errors that can occur when an argument is recognized as well-formed
/// input but names something the engine does not provide.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("Unknown correction method '{given}': expected 'none', 'bonferroni' or 'fdr'")]
    UnknownCorrection { given: String },

    #[error("Export target path is empty")]
    EmptyExportTarget,
}

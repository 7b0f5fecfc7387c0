//! Statistic computation errors.

/// Errors that can occur while computing the pairwise statistics.
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    /// The variance radicand collapsed to zero or below. Happens when
    /// every pooled observation falls into a single tie run.
    #[error("Degenerate variance term (radicand {radicand})")]
    DegenerateVariance { radicand: f64 },
}

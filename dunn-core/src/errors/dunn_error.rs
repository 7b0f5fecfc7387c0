//! Umbrella error for a whole test invocation.

use super::{ArgumentError, ComputeError, InputError};

/// Errors that can occur during a test invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DunnError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Compute error: {0}")]
    Compute(#[from] ComputeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type DunnResult<T> = Result<T, DunnError>;

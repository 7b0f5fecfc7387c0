//! # dunn-core
//!
//! Foundation crate for the Dunn pairwise-comparison engine.
//! Defines the shared errors, configuration, and tracing bootstrap.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod trace;

// Re-export the most commonly used types at the crate root.
pub use config::{CorrectionMethod, DunnConfig};
pub use errors::{ArgumentError, ComputeError, DunnError, DunnResult, InputError};

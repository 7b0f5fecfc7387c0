//! Error handling for the Dunn engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod argument_error;
pub mod compute_error;
pub mod dunn_error;
pub mod input_error;

pub use argument_error::ArgumentError;
pub use compute_error::ComputeError;
pub use dunn_error::{DunnError, DunnResult};
pub use input_error::InputError;

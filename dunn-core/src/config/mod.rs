//! Configuration for a test invocation.

pub mod correction;
pub mod dunn_config;

pub use correction::CorrectionMethod;
pub use dunn_config::DunnConfig;

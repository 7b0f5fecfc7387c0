//! Pairwise statistics and multiple-comparison corrections.
//!
//! Consumes the rank table: for every unordered group pair the
//! mean-rank-difference z statistic with its tie-corrected variance term
//! and a two-tailed p-value, then an optional Bonferroni or
//! Benjamini-Hochberg adjustment.

pub mod correction;
pub mod pairwise;
pub mod types;

pub use correction::apply_correction;
pub use pairwise::pairwise_statistics;
pub use types::{DunnReport, PairResult};

//! # dunn-analysis
//!
//! Rank-based pairwise comparisons after a rejected Kruskal-Wallis null:
//! pooled mid-ranks with tie correction, per-pair z statistics with
//! two-tailed p-values, Bonferroni / Benjamini-Hochberg adjustment, and
//! console / CSV report generation.
//!
//! The omnibus Kruskal-Wallis test itself is out of scope — callers run it
//! first and come here for the post-hoc pairwise comparisons.

pub mod pipeline;
pub mod ranks;
pub mod report;
pub mod sanitize;
pub mod stats;

// Re-exports for convenience
pub use pipeline::dunn_test;
pub use ranks::{rank, RankTable};
pub use report::{create_reporter, write_csv, ConsoleReporter, CsvReporter, Reporter};
pub use sanitize::clean_groups;
pub use stats::{apply_correction, pairwise_statistics, DunnReport, PairResult};

//! Reporters — output formats for a completed test report.
//!
//! Two formats: a fixed-width console rendering and a CSV export. Both
//! lay the pairs out as lower-triangular matrices over the group labels,
//! statistics first, then p-values (or q-values when a correction was
//! applied). Reporters only ever see a successfully computed report.

pub mod console;
pub mod csv;

pub use console::ConsoleReporter;
pub use csv::{write_csv, CsvReporter};

use crate::stats::DunnReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &DunnReport) -> String;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(ConsoleReporter)),
        "csv" => Some(Box::new(CsvReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "csv"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_knows_every_listed_format() {
        for &format in available_formats() {
            let reporter = create_reporter(format).unwrap();
            assert_eq!(reporter.name(), format);
        }
        assert!(create_reporter("sarif").is_none());
    }
}

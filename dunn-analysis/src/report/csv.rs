//! CSV reporter — two comma-separated triangular blocks.
//!
//! Block layout: a header row naming every column label after the first,
//! then one data row per group except the last. Row i starts with its own
//! label, leaves columns up to its own index empty, and carries values
//! for every column past it. The statistic block comes first, a blank
//! line separates it from the p-value block (q-values when a correction
//! was applied).

use std::path::Path;

use dunn_core::errors::{ArgumentError, DunnResult};

use super::Reporter;
use crate::stats::DunnReport;

enum BlockKind {
    Statistic,
    PValue,
}

/// CSV reporter for file export.
pub struct CsvReporter;

impl CsvReporter {
    fn push_block(&self, out: &mut String, report: &DunnReport, kind: &BlockKind) {
        let labels = &report.labels;
        let k = labels.len();

        out.push_str(match kind {
            BlockKind::Statistic => "statistic",
            BlockKind::PValue => "p-value",
        });
        for label in &labels[1..] {
            out.push(',');
            out.push_str(label);
        }
        out.push('\n');

        for i in 0..k - 1 {
            out.push_str(&labels[i]);
            for j in 1..k {
                out.push(',');
                if j > i {
                    let Some(pair) = report.pair(i, j) else { continue };
                    let value = match kind {
                        BlockKind::Statistic => pair.statistic,
                        BlockKind::PValue => pair.reported_value(),
                    };
                    out.push_str(&value.to_string());
                }
            }
            out.push('\n');
        }
    }
}

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn generate(&self, report: &DunnReport) -> String {
        let mut out = String::new();
        self.push_block(&mut out, report, &BlockKind::Statistic);
        out.push('\n');
        self.push_block(&mut out, report, &BlockKind::PValue);
        out
    }
}

/// Write the CSV report to `path`.
///
/// An empty path is rejected before anything is touched on disk; write
/// failures surface as I/O errors.
pub fn write_csv(report: &DunnReport, path: &Path) -> DunnResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ArgumentError::EmptyExportTarget.into());
    }
    std::fs::write(path, CsvReporter.generate(report))?;
    Ok(())
}

//! Console reporter — fixed-width triangular matrices.
//!
//! Column widths derive from the longest group label. Negative values get
//! one fewer decimal than positive ones so the sign never breaks column
//! alignment. Column labels run along the top and bottom of each matrix,
//! the row label repeats at both ends of its row, and cells above the
//! diagonal are blanked with a `-` placeholder.

use super::Reporter;
use crate::stats::DunnReport;

enum MatrixKind {
    Statistic,
    PValue,
}

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn header_line(&self, labels: &[String], width: usize) -> String {
        let mut line = format!("  {}", " ".repeat(width));
        for label in &labels[1..] {
            line.push_str(&format!("{label:<width$}    "));
        }
        line
    }

    fn push_matrix(&self, out: &mut String, report: &DunnReport, kind: &MatrixKind) {
        let labels = &report.labels;
        let k = labels.len();
        let width = labels.iter().map(|l| l.len()).max().unwrap_or(1);
        // One fewer decimal for negatives: the minus sign takes the slot.
        let (neg_dec, pos_dec) = if width < 4 { (4, 5) } else { (width, width + 1) };

        let header = self.header_line(labels, width);
        out.push_str(&header);
        out.push('\n');

        for i in 0..k - 1 {
            let mut line = format!("{:>width$}  ", labels[i]);
            for _ in 0..i {
                line.push_str(&format!("{:<w$}", "-", w = width + 4));
            }
            for j in i + 1..k {
                // Pairs exist for all i < j < k by construction.
                let Some(pair) = report.pair(i, j) else { continue };
                let value = match kind {
                    MatrixKind::Statistic => pair.statistic,
                    MatrixKind::PValue => pair.reported_value(),
                };
                if value < 0.0 {
                    line.push_str(&format!("{value:.neg_dec$} "));
                } else {
                    line.push_str(&format!("{value:.pos_dec$} "));
                }
            }
            line.push_str(&labels[i]);
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str(&header);
        out.push('\n');
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &DunnReport) -> String {
        let mut out = String::new();
        out.push('\n');
        self.push_matrix(&mut out, report, &MatrixKind::Statistic);
        out.push_str("\nDunn test H0 z-statistic\n\n");
        self.push_matrix(&mut out, report, &MatrixKind::PValue);
        out.push_str(&format!(
            "\nAdjustment method for p-value: {}\n",
            report.correction
        ));
        out
    }
}

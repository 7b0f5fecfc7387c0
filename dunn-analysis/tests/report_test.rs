//! Reporter integration tests over a real pipeline run.

use dunn_core::config::{CorrectionMethod, DunnConfig};
use dunn_analysis::{create_reporter, dunn_test, write_csv, ConsoleReporter, Reporter};

fn sample_report(correction: CorrectionMethod) -> dunn_analysis::DunnReport {
    let groups = vec![
        vec![0.2855, 0.3385, 0.0886, 0.2059, 0.3632],
        vec![0.5217, 0.7634, 0.3254, 0.4253, 0.3781],
        vec![0.9891, 1.1927, 0.7883, 0.5492, 0.5446],
        vec![1.2671, 1.6253, 1.2661, 1.1542, 1.2685],
        vec![1.2570, 1.2659, 1.2378, 0.9546, 2.3654],
    ];
    let config = DunnConfig::new()
        .with_labels(["a", "b", "c", "d", "e"])
        .with_correction(correction);
    dunn_test(&groups, &config).unwrap()
}

#[test]
fn console_renders_two_labeled_matrices() {
    let report = sample_report(CorrectionMethod::None);
    let out = ConsoleReporter.generate(&report);

    // Column header appears four times: above and below each matrix.
    let header_count = out
        .lines()
        .filter(|line| line.trim_start().starts_with("b    c"))
        .count();
    assert_eq!(header_count, 4);
    assert!(out.contains("Dunn test H0 z-statistic"));
    assert!(out.ends_with("Adjustment method for p-value: none\n"));

    // Row d holds three blanked cells, the d-e statistic, and its label.
    let d_row = out.lines().find(|l| l.trim_start().starts_with("d ")).unwrap();
    assert_eq!(d_row.matches('-').count(), 3);
    assert!(d_row.contains("0.42967"));
    assert!(d_row.trim_end().ends_with('d'));
}

#[test]
fn console_names_the_applied_correction() {
    let report = sample_report(CorrectionMethod::Fdr);
    let out = ConsoleReporter.generate(&report);
    assert!(out.ends_with("Adjustment method for p-value: fdr\n"));
    // d-e keeps its own p-value as q under the step-up.
    assert!(out.contains("0.66744"));
}

#[test]
fn csv_export_round_trips_through_a_file() {
    let report = sample_report(CorrectionMethod::Fdr);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dunn.csv");

    write_csv(&report, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // 5 statistic lines, separator, 5 p-value lines.
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "statistic,b,c,d,e");
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "p-value,b,c,d,e");

    // Row d: three empty columns, then the d-e q-value.
    assert!(lines[10].starts_with("d,,,,0.6674"));

    // Every data row carries k-1 commas.
    for line in lines.iter().filter(|l| !l.is_empty()) {
        assert_eq!(line.matches(',').count(), 4, "bad row: {line}");
    }
}

#[test]
fn factory_builds_reporters_by_name() {
    let report = sample_report(CorrectionMethod::None);
    let console = create_reporter("console").unwrap();
    let csv = create_reporter("csv").unwrap();
    assert!(console.generate(&report).contains("Dunn test"));
    assert!(csv.generate(&report).starts_with("statistic,"));
    assert!(create_reporter("html").is_none());
}

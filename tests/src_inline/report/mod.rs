
use super::*;
use crate::model::record::SessionScores;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("banditfit_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn build_report() -> ScoreReport {
    let mut report = ScoreReport::default();
    report.push(
        0,
        SessionScores {
            nll: 3.5,
            aic: 11.0,
            bic: 12.5,
        },
    );
    report.push(1, SessionScores::nan());
    report.push(
        2,
        SessionScores {
            nll: 2.0,
            aic: 8.0,
            bic: 9.0,
        },
    );
    report
}

#[test]
fn test_csv_header_and_row_count() {
    let report = build_report();
    let dir = make_temp_dir();
    let path = dir.join("scores.csv");
    write_scores_csv(&report, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), report.len() + 1);
    assert_eq!(lines[0], "Job_ID,NLL,BIC,AIC");
    assert_eq!(lines[1], "0,3.5,12.5,11");
    assert_eq!(lines[2], "1,NaN,NaN,NaN");
}

#[test]
fn test_csv_job_id_column_is_positional() {
    let report = build_report();
    let dir = make_temp_dir();
    let path = dir.join("scores.csv");
    write_scores_csv(&report, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let ids: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn test_summary_counts_failures() {
    let report = build_report();
    let summary = build_summary(&report);
    assert_eq!(summary.n_sessions, 3);
    assert_eq!(summary.n_failed, 1);
    assert_eq!(summary.failed_job_ids, vec![1]);
    assert!(summary.totals.nll.is_nan());
}

#[test]
fn test_summary_json_schema() {
    let report = build_report();
    let summary = build_summary(&report);
    let dir = make_temp_dir();
    let path = dir.join("summary.json");
    write_summary_json(&summary, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"tool\""));
    assert!(text.contains("\"n_sessions\""));
    assert!(text.contains("\"failed_job_ids\""));
    // Non-finite totals serialize as null.
    assert!(text.contains("null"));
}

#[test]
fn test_summary_json_deterministic() {
    let report = build_report();
    let summary = build_summary(&report);
    let dir = make_temp_dir();
    write_summary_json(&summary, &dir.join("a.json")).unwrap();
    write_summary_json(&summary, &dir.join("b.json")).unwrap();
    let a = std::fs::read_to_string(dir.join("a.json")).unwrap();
    let b = std::fs::read_to_string(dir.join("b.json")).unwrap();
    assert_eq!(a, b);
}

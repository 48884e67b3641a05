//! Integration tests for record source loading
//!
//! Tests cover:
//! - Loading the three HR datasets from a data directory
//! - All-or-nothing fallback when one dataset is missing or malformed
//! - Welfare claims failing open independently of the HR datasets

use payroll_common::IssueType;
use payroll_triage::extract_all_issues;
use payroll_triage::source::{
    load_records, welfare_claims_path, ATTENDANCE_FILE, EMPLOYEES_FILE, LEDGER_FILE,
};
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, file: &str, content: &str) {
    std::fs::write(dir.join(file), content).unwrap();
}

fn write_datasets(dir: &Path) {
    write(
        dir,
        EMPLOYEES_FILE,
        r#"[{"employee_id":"E1","name":"김철수","grade":"과장"},{"employee_id":"E2","name":"이영희"}]"#,
    );
    write(
        dir,
        ATTENDANCE_FILE,
        r#"[{"employee_id":"E1","date":"2024-11-28","status":"unclosed"},
            {"employee_id":"E2","date":"2024-11-28","status":"closed"}]"#,
    );
    write(
        dir,
        LEDGER_FILE,
        r#"[{"issue_id":"AUD-001","employee_id":"E2","status":"Pending","diff":450000,
             "issue_type":"소급 적용","logic_text":"10/1 승진 소급"}]"#,
    );
}

#[tokio::test]
async fn test_load_all_datasets() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());

    let records = load_records(dir.path()).await;
    assert_eq!(records.employees.len(), 2);
    assert_eq!(records.attendance.len(), 2);
    assert_eq!(records.ledger.len(), 1);
    assert_eq!(records.employee_name("E1"), "김철수");
}

#[tokio::test]
async fn test_missing_dataset_empties_all() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());
    std::fs::remove_file(dir.path().join(LEDGER_FILE)).unwrap();

    let records = load_records(dir.path()).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_malformed_dataset_empties_all() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());
    write(dir.path(), ATTENDANCE_FILE, "[{\"employee_id\": ");

    let records = load_records(dir.path()).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_missing_directory_yields_empty_records() {
    let records = load_records(Path::new("/nonexistent/payroll-data")).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_extraction_without_welfare_file() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());

    let records = load_records(dir.path()).await;
    let issues = extract_all_issues(&records, &welfare_claims_path(dir.path()));

    let types: Vec<_> = issues.iter().map(|i| i.issue_type()).collect();
    assert_eq!(types, vec![IssueType::Chaser, IssueType::Auditor]);
    assert_eq!(issues[0].name, "김철수");
    assert_eq!(issues[1].name, "이영희");
}

#[tokio::test]
async fn test_welfare_claims_fail_open_independently() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "welfare_claims.json",
        r#"[{"claim_id":"WEL-001","employee_id":"E2","name":"이영희","status":"Pending",
             "treatment_type":"도수치료","amount":120000,"receipt_items":"도수치료 1회",
             "ai_verdict":"승인 권고","ai_reason":"규정 범위 내","policy_ref":"제12조"}]"#,
    );

    // HR datasets absent: only the welfare claim survives
    let records = load_records(dir.path()).await;
    let issues = extract_all_issues(&records, &welfare_claims_path(dir.path()));

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].issue_type(), IssueType::Welfare);
}

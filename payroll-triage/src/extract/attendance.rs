//! Attendance extractor
//!
//! Collects every unclosed attendance day per employee into a single Chaser
//! issue whose description lists the days and their count.

use super::IssueExtractor;
use chrono::{Datelike, NaiveDate};
use payroll_common::records::RecordSet;
use payroll_common::{Issue, IssueDetail};
use std::collections::BTreeMap;

/// Row status values marking an attendance day as not yet closed
pub const UNCLOSED_STATUSES: &[&str] = &["unclosed", "미마감"];

pub const CHASER_TITLE: &str = "근태 미마감";

pub struct AttendanceExtractor;

impl IssueExtractor for AttendanceExtractor {
    fn name(&self) -> &'static str {
        "Attendance"
    }

    fn extract(&self, records: &RecordSet) -> Vec<Issue> {
        // employee_id → distinct unclosed dates in first-seen order
        let mut unclosed: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for row in &records.attendance {
            if !UNCLOSED_STATUSES.contains(&row.status.as_str()) {
                continue;
            }
            let dates = unclosed.entry(row.employee_id.as_str()).or_default();
            if !dates.contains(&row.date.as_str()) {
                dates.push(row.date.as_str());
            }
        }

        unclosed
            .into_iter()
            .map(|(employee_id, dates)| {
                Issue::new(
                    format!("CHASER-{}", employee_id),
                    employee_id,
                    records.employee_name(employee_id),
                    CHASER_TITLE,
                    IssueDetail::Chaser {
                        description: describe_missing_days(&dates),
                    },
                )
            })
            .collect()
    }
}

/// "11월 28일, 11월 29일 (2건) 미마감"
pub fn describe_missing_days(dates: &[&str]) -> String {
    let formatted: Vec<String> = dates.iter().map(|d| format_day(d)).collect();
    format!("{} ({}건) 미마감", formatted.join(", "), dates.len())
}

/// Format an ISO date as "M월 D일"; other text is kept verbatim
fn format_day(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}월 {}일", d.month(), d.day()),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of days embedded in a description built by `describe_missing_days`
    fn missing_day_count(description: &str) -> Option<usize> {
        let open = description.rfind('(')?;
        let close = description[open..].find("건)")? + open;
        description[open + 1..close].parse().ok()
    }
    use payroll_common::records::{AttendanceRecord, EmployeeRecord};
    use payroll_common::{IssueStatus, IssueType};

    fn row(employee_id: &str, date: &str, status: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: date.to_string(),
            status: status.to_string(),
        }
    }

    fn records(attendance: Vec<AttendanceRecord>) -> RecordSet {
        RecordSet {
            employees: vec![
                EmployeeRecord {
                    employee_id: "E1".to_string(),
                    name: "김철수".to_string(),
                    department: None,
                },
                EmployeeRecord {
                    employee_id: "E2".to_string(),
                    name: "이영희".to_string(),
                    department: None,
                },
            ],
            attendance,
            ledger: vec![],
        }
    }

    #[test]
    fn test_groups_unclosed_days_per_employee() {
        let records = records(vec![
            row("E1", "2024-11-28", "unclosed"),
            row("E2", "2024-11-27", "unclosed"),
            row("E1", "2024-11-29", "unclosed"),
            row("E1", "2024-11-30", "closed"),
        ]);

        let issues = AttendanceExtractor.extract(&records);
        assert_eq!(issues.len(), 2);

        let first = &issues[0];
        assert_eq!(first.issue_id, "CHASER-E1");
        assert_eq!(first.name, "김철수");
        assert_eq!(first.issue_type(), IssueType::Chaser);
        assert_eq!(first.status, IssueStatus::Pending);
        assert_eq!(first.diff(), None);
        assert_eq!(first.description(), Some("11월 28일, 11월 29일 (2건) 미마감"));
    }

    #[test]
    fn test_count_matches_distinct_dates() {
        let records = records(vec![
            row("E1", "2024-11-28", "unclosed"),
            row("E1", "2024-11-28", "unclosed"),
            row("E1", "2024-11-29", "미마감"),
        ]);

        let issues = AttendanceExtractor.extract(&records);
        let description = issues[0].description().unwrap();
        assert_eq!(missing_day_count(description), Some(2));
    }

    #[test]
    fn test_unknown_employee_gets_sentinel_name() {
        let records = records(vec![row("E9", "2024-11-28", "unclosed")]);

        let issues = AttendanceExtractor.extract(&records);
        assert_eq!(issues[0].name, "Unknown");
    }

    #[test]
    fn test_no_unclosed_rows() {
        let records = records(vec![row("E1", "2024-11-28", "approved")]);
        assert!(AttendanceExtractor.extract(&records).is_empty());
    }

    #[test]
    fn test_non_iso_date_kept_verbatim() {
        assert_eq!(describe_missing_days(&["11/28"]), "11/28 (1건) 미마감");
    }
}

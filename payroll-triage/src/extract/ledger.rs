//! Ledger extractor
//!
//! One Auditor issue per pending shadow-ledger row. The calculation kind is
//! classified here, once, from the row's category text.

use super::{IssueExtractor, PENDING_STATUS};
use payroll_common::records::RecordSet;
use payroll_common::{CalculationKind, Issue, IssueDetail};

pub struct LedgerExtractor;

impl IssueExtractor for LedgerExtractor {
    fn name(&self) -> &'static str {
        "Ledger"
    }

    fn extract(&self, records: &RecordSet) -> Vec<Issue> {
        records
            .ledger
            .iter()
            .filter(|row| row.status == PENDING_STATUS)
            .map(|row| {
                Issue::new(
                    row.issue_id.clone(),
                    row.employee_id.clone(),
                    records.employee_name(&row.employee_id),
                    row.issue_type.clone(),
                    IssueDetail::Auditor {
                        diff: row.diff,
                        logic_text: row.logic_text.clone(),
                        calculation: CalculationKind::classify(&row.issue_type),
                        description: None,
                    },
                )
            })
            .collect()
    }
}

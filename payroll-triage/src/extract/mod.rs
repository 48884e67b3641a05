//! Issue extractors
//!
//! Three independent, stateless extractors each scan one dataset and emit
//! typed issues for the rows that need action:
//! 1. **attendance** - unclosed attendance days → one Chaser issue per employee
//! 2. **ledger** - pending shadow-ledger rows → one Auditor issue per row
//! 3. **welfare** - pending welfare claims → one Welfare issue per claim
//!
//! Outputs are concatenated in declaration order. A failing source degrades
//! to an empty contribution; it never blocks the other extractors.

pub mod attendance;
pub mod ledger;
pub mod welfare;

pub use attendance::AttendanceExtractor;
pub use ledger::LedgerExtractor;
pub use welfare::WelfareExtractor;

use payroll_common::records::RecordSet;
use payroll_common::Issue;
use std::path::Path;
use tracing::{debug, info};

/// Row status marking a ledger row or claim as awaiting review
pub const PENDING_STATUS: &str = "Pending";

/// Common interface of the issue extractors
pub trait IssueExtractor {
    /// Extractor name for logging
    fn name(&self) -> &'static str;

    /// Scan the record set and emit issues for rows needing action
    fn extract(&self, records: &RecordSet) -> Vec<Issue>;
}

/// Run every extractor in order and concatenate their outputs
pub fn run_extractors(records: &RecordSet, extractors: &[&dyn IssueExtractor]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for extractor in extractors {
        let found = extractor.extract(records);
        debug!("{} extractor produced {} issues", extractor.name(), found.len());
        issues.extend(found);
    }
    issues
}

/// Extract issues from all three sources
///
/// Welfare claims are read from `welfare_claims_path` by the welfare
/// extractor's own fail-open boundary.
pub fn extract_all_issues(records: &RecordSet, welfare_claims_path: &Path) -> Vec<Issue> {
    let welfare = WelfareExtractor::new(welfare_claims_path);
    let extractors: [&dyn IssueExtractor; 3] = [&AttendanceExtractor, &LedgerExtractor, &welfare];
    let issues = run_extractors(records, &extractors);
    info!("Extracted {} issues", issues.len());
    issues
}

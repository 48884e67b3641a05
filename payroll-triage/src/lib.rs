//! payroll-triage library - payroll-exception triage engine
//!
//! Turns raw HR, attendance, ledger and welfare records into a prioritized
//! worklist of review issues, groups it for display, detects risk patterns
//! and applies reviewer dispositions.

pub mod expand;
pub mod extract;
pub mod grouping;
pub mod insights;
pub mod session;
pub mod source;
pub mod summary;
pub mod worklist;

pub use expand::{expand_population, expand_population_with, ExpansionOptions};
pub use extract::{extract_all_issues, IssueExtractor};
pub use grouping::{group_issues, BulkAction, IssueGroup, PivotMode};
pub use insights::detect_insights;
pub use session::TriageSession;
pub use summary::WorklistSummary;
pub use worklist::{Disposition, Worklist};

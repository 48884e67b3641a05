//! # Payroll Triage Common Library
//!
//! Shared code for the payroll triage engine and its hosts:
//! - Issue and insight data model
//! - Source record row types (HR master, attendance, ledger, welfare)
//! - Threshold configuration loading and saving
//! - Error types
//! - Time helpers

pub mod config;
pub mod error;
pub mod insight;
pub mod issue;
pub mod records;
pub mod time;

pub use error::{Error, Result};
pub use insight::{Insight, InsightColor, InsightKind};
pub use issue::{CalculationKind, Issue, IssueDetail, IssueStatus, IssueType, SpecialStatus};

//! Insight data model
//!
//! Insights are derived from the active worklist on every read and are never
//! persisted. Any worklist change invalidates the previous set.

use serde::{Deserialize, Serialize};

/// Risk pattern an insight reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightKind {
    /// Allowance still paid after a role change
    #[serde(rename = "Role-Pay Mismatch")]
    RolePayMismatch,
    /// Overtime recorded without a work plan
    #[serde(rename = "Unplanned OT")]
    UnplannedOvertime,
    /// Manager holding too many open attendance approvals
    #[serde(rename = "Bottleneck Manager")]
    BottleneckManager,
}

impl InsightKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            InsightKind::RolePayMismatch => "Role-Pay Mismatch",
            InsightKind::UnplannedOvertime => "Unplanned OT",
            InsightKind::BottleneckManager => "Bottleneck Manager",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Severity color hint for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightColor {
    Red,
    Orange,
}

/// Actionable risk signal referencing the issues that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    /// Label of the suggested action
    pub action: String,
    pub color: InsightColor,
    /// Contributing active issue IDs, in worklist order
    pub issue_ids: Vec<String>,
}

impl Insight {
    pub fn references(&self, issue_id: &str) -> bool {
        self.issue_ids.iter().any(|id| id == issue_id)
    }
}

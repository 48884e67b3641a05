//! Issue data model
//!
//! An [`Issue`] is one worklist entry awaiting human review. The type-specific
//! fields live in [`IssueDetail`], so the issue type is derived from the
//! variant and can never disagree with the fields it carries. In particular a
//! Chaser issue structurally has no monetary value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Issue type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    /// Attendance-closure reminder
    Chaser,
    /// Payroll-delta review
    Auditor,
    /// Medical/benefit claim review
    Welfare,
}

impl IssueType {
    /// One-letter prefix used in generated issue IDs (e.g. `C-20240001`)
    pub fn prefix(&self) -> &'static str {
        match self {
            IssueType::Chaser => "C",
            IssueType::Auditor => "A",
            IssueType::Welfare => "W",
        }
    }

    /// Label of the default single-issue action
    pub fn action_label(&self) -> &'static str {
        match self {
            IssueType::Chaser => "발송 승인",
            IssueType::Auditor => "다빈치 적용",
            IssueType::Welfare => "승인 및 이관",
        }
    }

    /// Get all issue types in display order
    pub fn all_variants() -> &'static [IssueType] {
        &[IssueType::Chaser, IssueType::Auditor, IssueType::Welfare]
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IssueType::Chaser => "Chaser",
            IssueType::Auditor => "Auditor",
            IssueType::Welfare => "Welfare",
        };
        write!(f, "{}", name)
    }
}

/// Issue lifecycle status
///
/// Issues are created `Pending`; every other value is assigned when the
/// issue is disposed of and moved to completed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    Pending,
    Approved,
    Applied,
    Ignored,
    Rejected,
    Resolved,
    Reminded,
    Investigating,
}

impl IssueStatus {
    /// True for every status assigned at disposition
    pub fn is_terminal(&self) -> bool {
        !matches!(self, IssueStatus::Pending)
    }
}

/// Employee lifecycle state driving the narrative fields of an issue
///
/// Mutually exclusive. Serialized as the Korean display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialStatus {
    #[serde(rename = "중도입사자")]
    NewHire,
    #[serde(rename = "중도퇴사자")]
    Resigned,
    #[serde(rename = "휴직자")]
    OnLeave,
    #[serde(rename = "복직자")]
    Reinstated,
    #[serde(rename = "근무형태 변경자")]
    ShiftChange,
    #[default]
    #[serde(rename = "일반 (특이사항 없음)")]
    General,
}

impl SpecialStatus {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            SpecialStatus::NewHire => "중도입사자",
            SpecialStatus::Resigned => "중도퇴사자",
            SpecialStatus::OnLeave => "휴직자",
            SpecialStatus::Reinstated => "복직자",
            SpecialStatus::ShiftChange => "근무형태 변경자",
            SpecialStatus::General => "일반 (특이사항 없음)",
        }
    }

    /// Icon shown in front of the label when pivoting by status
    pub fn icon(&self) -> &'static str {
        match self {
            SpecialStatus::NewHire => "🆕",
            SpecialStatus::Resigned => "👋",
            SpecialStatus::OnLeave => "🛌",
            SpecialStatus::Reinstated => "🔙",
            SpecialStatus::ShiftChange => "🔄",
            SpecialStatus::General => "👤",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, SpecialStatus::General)
    }

    /// Get all special statuses
    pub fn all_variants() -> &'static [SpecialStatus] {
        &[
            SpecialStatus::NewHire,
            SpecialStatus::Resigned,
            SpecialStatus::OnLeave,
            SpecialStatus::Reinstated,
            SpecialStatus::ShiftChange,
            SpecialStatus::General,
        ]
    }
}

impl std::fmt::Display for SpecialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How an Auditor delta was calculated
///
/// Classified once when the issue is built; downstream code (event labeling,
/// calculation-detail rendering) switches on this tag instead of re-reading
/// the title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalculationKind {
    /// Retroactive pay difference (소급)
    Retroactive,
    /// Prorated pay (일할)
    Prorated,
    /// Allowance change (수당)
    Allowance,
    #[default]
    Other,
}

impl CalculationKind {
    /// Classify a ledger category text
    pub fn classify(category: &str) -> Self {
        if category.contains("소급") {
            CalculationKind::Retroactive
        } else if category.contains("일할") {
            CalculationKind::Prorated
        } else if category.contains("수당") {
            CalculationKind::Allowance
        } else {
            CalculationKind::Other
        }
    }
}

/// Type-specific issue fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IssueDetail {
    Chaser {
        /// Missing-day summary, e.g. "11월 28일, 11월 29일 (2건) 미마감"
        description: String,
    },
    Auditor {
        /// Signed payroll delta in won
        diff: i64,
        logic_text: String,
        #[serde(default)]
        calculation: CalculationKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Welfare {
        /// Claimed amount in won
        amount: u64,
        receipt_items: String,
        ai_verdict: String,
        ai_reason: String,
        policy_ref: String,
    },
}

impl IssueDetail {
    pub fn issue_type(&self) -> IssueType {
        match self {
            IssueDetail::Chaser { .. } => IssueType::Chaser,
            IssueDetail::Auditor { .. } => IssueType::Auditor,
            IssueDetail::Welfare { .. } => IssueType::Welfare,
        }
    }
}

/// Worklist entry awaiting review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within a worklist (type prefix + numeric suffix)
    pub issue_id: String,
    pub employee_id: String,
    pub name: String,
    /// Human-readable category or reason
    pub title: String,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workplace: Option<String>,
    /// Approving manager, used for bottleneck detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub special_status: SpecialStatus,
    /// Originating HR event (causal-chain label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Set only on Role-Pay-Mismatch candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_change_date: Option<NaiveDate>,
    /// Free-text record of the disposition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
    #[serde(flatten)]
    pub detail: IssueDetail,
}

impl Issue {
    /// Create a pending issue with no workplace, event or special status
    pub fn new(
        issue_id: impl Into<String>,
        employee_id: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        detail: IssueDetail,
    ) -> Self {
        Self {
            issue_id: issue_id.into(),
            employee_id: employee_id.into(),
            name: name.into(),
            title: title.into(),
            status: IssueStatus::Pending,
            workplace: None,
            manager_id: None,
            special_status: SpecialStatus::General,
            event_id: None,
            job_change_date: None,
            action_taken: None,
            detail,
        }
    }

    pub fn issue_type(&self) -> IssueType {
        self.detail.issue_type()
    }

    /// Signed payroll delta (Auditor issues only)
    pub fn diff(&self) -> Option<i64> {
        match &self.detail {
            IssueDetail::Auditor { diff, .. } => Some(*diff),
            _ => None,
        }
    }

    /// Payroll delta or claimed amount, whichever the issue carries
    pub fn monetary_value(&self) -> Option<i64> {
        match &self.detail {
            IssueDetail::Auditor { diff, .. } => Some(*diff),
            IssueDetail::Welfare { amount, .. } => Some(i64::try_from(*amount).unwrap_or(i64::MAX)),
            IssueDetail::Chaser { .. } => None,
        }
    }

    /// Impact used for ordering within a group: `abs(diff)`, 0 when absent
    pub fn impact(&self) -> u64 {
        self.diff().map(i64::unsigned_abs).unwrap_or(0)
    }

    pub fn description(&self) -> Option<&str> {
        match &self.detail {
            IssueDetail::Chaser { description } => Some(description),
            IssueDetail::Auditor { description, .. } => description.as_deref(),
            IssueDetail::Welfare { .. } => None,
        }
    }

    pub fn calculation(&self) -> Option<CalculationKind> {
        match &self.detail {
            IssueDetail::Auditor { calculation, .. } => Some(*calculation),
            _ => None,
        }
    }

    /// Eligible for the Role-Pay-Mismatch insight
    pub fn is_role_mismatch_candidate(&self) -> bool {
        self.job_change_date.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.status == IssueStatus::Pending
    }
}

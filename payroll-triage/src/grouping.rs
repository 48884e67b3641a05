//! Grouping / pivot engine
//!
//! Partitions a worklist into labeled buckets under one pivot dimension and
//! computes per-bucket aggregates. Buckets come back in a stable order:
//! fixed order for the issue-type pivot, first-seen order otherwise. Within a
//! bucket issues are ordered by impact (`abs(diff)`, descending, stable).

use payroll_common::{Issue, IssueType};
use serde::{Deserialize, Serialize};

/// Grouping dimension of the worklist view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotMode {
    #[default]
    IssueType,
    SpecialStatus,
    Workplace,
    Cause,
}

impl PivotMode {
    /// Parse a pivot name (`type`, `status`, `workplace`, `cause`)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "type" | "issue_type" | "issue-type" => Some(PivotMode::IssueType),
            "status" | "special_status" | "special-status" => Some(PivotMode::SpecialStatus),
            "workplace" => Some(PivotMode::Workplace),
            "cause" | "event" => Some(PivotMode::Cause),
            _ => None,
        }
    }

    /// Korean display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PivotMode::IssueType => "이슈별 (Issue Type)",
            PivotMode::SpecialStatus => "특이사항별 (Special Status)",
            PivotMode::Workplace => "사업장별 (Workplace)",
            PivotMode::Cause => "원인별 (Cause)",
        }
    }

    pub fn all_variants() -> &'static [PivotMode] {
        &[
            PivotMode::IssueType,
            PivotMode::SpecialStatus,
            PivotMode::Workplace,
            PivotMode::Cause,
        ]
    }
}

/// Bucket label of an issue type under the issue-type pivot
pub fn issue_type_label(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::Chaser => "🚨 [Action Required] 근태 소명",
        IssueType::Auditor => "💰 [Approval Pending] 급여 변동 심사",
        IssueType::Welfare => "🧾 [Claims] 의료비/복리후생",
    }
}

/// Bulk disposition offered for a whole group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkAction {
    /// All Chaser: approve every reminder
    SendReminders,
    /// All Auditor: apply every delta
    ApplyPayroll,
    /// All Welfare: approve every claim and transfer to payroll
    ApproveAndTransfer,
    /// Mixed types: each issue gets its own type's default action
    ProcessAll,
}

impl BulkAction {
    /// Action for a set of issues; `None` when there are no issues
    pub fn for_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Option<Self> {
        let mut types = issues.into_iter().map(Issue::issue_type);
        let first = types.next()?;
        if types.any(|t| t != first) {
            return Some(BulkAction::ProcessAll);
        }
        Some(match first {
            IssueType::Chaser => BulkAction::SendReminders,
            IssueType::Auditor => BulkAction::ApplyPayroll,
            IssueType::Welfare => BulkAction::ApproveAndTransfer,
        })
    }

    pub fn verb(&self) -> &'static str {
        match self {
            BulkAction::SendReminders => "독촉 발송",
            BulkAction::ApplyPayroll => "급여 반영",
            BulkAction::ApproveAndTransfer => "승인 및 이관",
            BulkAction::ProcessAll => "일괄 처리",
        }
    }

    /// Button label, e.g. "선택 항목 3건 독촉 발송"
    pub fn label(&self, count: usize) -> String {
        format!("선택 항목 {}건 {}", count, self.verb())
    }
}

/// One pivot bucket with its aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueGroup {
    pub label: String,
    /// Members ordered by impact, descending
    pub items: Vec<Issue>,
    pub count: usize,
    /// Signed sum of Auditor deltas (other types count as 0)
    pub total_diff: i64,
}

impl IssueGroup {
    fn new(label: String) -> Self {
        Self {
            label,
            items: Vec::new(),
            count: 0,
            total_diff: 0,
        }
    }

    fn finalize(mut self) -> Self {
        // sort_by is stable: equal impact keeps worklist order
        self.items.sort_by(|a, b| b.impact().cmp(&a.impact()));
        self.count = self.items.len();
        self.total_diff = self.items.iter().filter_map(Issue::diff).sum();
        self
    }

    pub fn bulk_action(&self) -> Option<BulkAction> {
        BulkAction::for_issues(&self.items)
    }

    pub fn issue_ids(&self) -> Vec<String> {
        self.items.iter().map(|i| i.issue_id.clone()).collect()
    }

    /// Header text, e.g. "🏭 대전 (12건 / 합계 +1,250,000원)"
    pub fn summary_label(&self) -> String {
        if self.total_diff == 0 {
            format!("{} ({}건)", self.label, self.count)
        } else {
            format!(
                "{} ({}건 / 합계 {}원)",
                self.label,
                self.count,
                format_signed_won(self.total_diff)
            )
        }
    }
}

/// Group `issues` under `mode`; empty buckets are dropped
pub fn group_issues(issues: &[Issue], mode: PivotMode) -> Vec<IssueGroup> {
    let mut groups: Vec<IssueGroup> = match mode {
        PivotMode::IssueType => IssueType::all_variants()
            .iter()
            .map(|t| IssueGroup::new(issue_type_label(*t).to_string()))
            .collect(),
        _ => Vec::new(),
    };

    for issue in issues {
        let label = group_label(issue, mode);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.items.push(issue.clone()),
            None => {
                let mut group = IssueGroup::new(label);
                group.items.push(issue.clone());
                groups.push(group);
            }
        }
    }

    groups
        .into_iter()
        .filter(|g| !g.items.is_empty())
        .map(IssueGroup::finalize)
        .collect()
}

/// Bucket label of one issue under `mode`
pub fn group_label(issue: &Issue, mode: PivotMode) -> String {
    match mode {
        PivotMode::IssueType => issue_type_label(issue.issue_type()).to_string(),
        PivotMode::SpecialStatus => {
            format!("{} {}", issue.special_status.icon(), issue.special_status.label())
        }
        PivotMode::Workplace => {
            format!("🏭 {}", issue.workplace.as_deref().unwrap_or("Unknown"))
        }
        PivotMode::Cause => {
            format!("🔗 {}", issue.event_id.as_deref().unwrap_or("Unknown Event"))
        }
    }
}

/// "+1,234,000" / "-50,000" / "0"
pub fn format_signed_won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match amount.signum() {
        1 => format!("+{}", grouped),
        -1 => format!("-{}", grouped),
        _ => grouped,
    }
}

//! Disposition handler
//!
//! [`Worklist`] is the explicit application state: the active issues awaiting
//! review and the completed history (newest first). Every disposition takes
//! one active issue, stamps its status and `action_taken`, and moves it to
//! history. Completed issues never return to the active list.
//!
//! Approving a Welfare claim additionally appends a derived Auditor issue
//! (`PAY-<claim id>`) so the claim amount flows into payroll review.

use payroll_common::{
    CalculationKind, Error, Insight, InsightKind, Issue, IssueDetail, IssueStatus, IssueType,
    Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Prefix of the Auditor issue spawned by an approved Welfare claim
pub const PAYROLL_ISSUE_PREFIX: &str = "PAY-";

/// Title of the spawned payroll issue
pub const MEDICAL_EXPENSE_TITLE: &str = "의료비";

/// Single-issue disposition verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Send the attendance reminder (Chaser)
    Approve,
    /// Apply the payroll delta (Auditor)
    Apply,
    /// Dismiss (any type)
    Ignore,
    /// Approve the claim and transfer it to payroll (Welfare)
    ApproveWelfare,
    /// Reject the claim (Welfare)
    RejectWelfare,
}

impl Disposition {
    /// Default verb for an issue type, used by bulk processing
    pub fn default_for(issue_type: IssueType) -> Self {
        match issue_type {
            IssueType::Chaser => Disposition::Approve,
            IssueType::Auditor => Disposition::Apply,
            IssueType::Welfare => Disposition::ApproveWelfare,
        }
    }

    pub fn status(&self) -> IssueStatus {
        match self {
            Disposition::Approve | Disposition::ApproveWelfare => IssueStatus::Approved,
            Disposition::Apply => IssueStatus::Applied,
            Disposition::Ignore => IssueStatus::Ignored,
            Disposition::RejectWelfare => IssueStatus::Rejected,
        }
    }

    pub fn action_taken(&self) -> &'static str {
        match self {
            Disposition::Approve => "메시지 발송",
            Disposition::Apply => "DB 반영",
            Disposition::Ignore => "무시하기",
            Disposition::ApproveWelfare => "급여 반영",
            Disposition::RejectWelfare => "반려",
        }
    }

    /// Issue type this verb is restricted to; `None` accepts any type
    pub fn required_type(&self) -> Option<IssueType> {
        match self {
            Disposition::Approve => Some(IssueType::Chaser),
            Disposition::Apply => Some(IssueType::Auditor),
            Disposition::Ignore => None,
            Disposition::ApproveWelfare | Disposition::RejectWelfare => Some(IssueType::Welfare),
        }
    }
}

/// Status and action stamped on issues moved by an insight action
fn insight_resolution(kind: InsightKind) -> (IssueStatus, &'static str) {
    match kind {
        InsightKind::RolePayMismatch => (IssueStatus::Resolved, "환수 제안"),
        InsightKind::BottleneckManager => (IssueStatus::Reminded, "리포트 발송"),
        InsightKind::UnplannedOvertime => (IssueStatus::Investigating, "부서장 확인"),
    }
}

/// Active worklist plus completed history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Worklist {
    active: Vec<Issue>,
    /// Newest first
    completed: Vec<Issue>,
}

impl Worklist {
    pub fn new(active: Vec<Issue>) -> Self {
        Self {
            active,
            completed: Vec::new(),
        }
    }

    pub fn active(&self) -> &[Issue] {
        &self.active
    }

    pub fn completed(&self) -> &[Issue] {
        &self.completed
    }

    pub fn get(&self, issue_id: &str) -> Option<&Issue> {
        self.active.iter().find(|i| i.issue_id == issue_id)
    }

    pub fn approve(&mut self, issue_id: &str) -> Result<()> {
        self.dispose(issue_id, Disposition::Approve)
    }

    pub fn apply(&mut self, issue_id: &str) -> Result<()> {
        self.dispose(issue_id, Disposition::Apply)
    }

    pub fn ignore(&mut self, issue_id: &str) -> Result<()> {
        self.dispose(issue_id, Disposition::Ignore)
    }

    pub fn approve_welfare(&mut self, issue_id: &str) -> Result<()> {
        self.dispose(issue_id, Disposition::ApproveWelfare)
    }

    pub fn reject_welfare(&mut self, issue_id: &str) -> Result<()> {
        self.dispose(issue_id, Disposition::RejectWelfare)
    }

    /// Apply one disposition to the active issue `issue_id`
    ///
    /// # Errors
    /// - [`Error::NotFound`] when no active issue has this ID
    /// - [`Error::InvalidInput`] when the verb does not accept the issue's type
    pub fn dispose(&mut self, issue_id: &str, disposition: Disposition) -> Result<()> {
        let position = self
            .active
            .iter()
            .position(|i| i.issue_id == issue_id)
            .ok_or_else(|| Error::NotFound(format!("Active issue not found: {}", issue_id)))?;

        let issue_type = self.active[position].issue_type();
        if let Some(required) = disposition.required_type() {
            if issue_type != required {
                return Err(Error::InvalidInput(format!(
                    "{:?} applies to {} issues, but {} is {}",
                    disposition, required, issue_id, issue_type
                )));
            }
        }

        let mut issue = self.active.remove(position);
        let spawned = match disposition {
            Disposition::ApproveWelfare => payroll_issue_for_claim(&issue),
            _ => None,
        };

        issue.status = disposition.status();
        issue.action_taken = Some(disposition.action_taken().to_string());
        debug!("{} → {:?} ({})", issue.issue_id, issue.status, disposition.action_taken());
        self.completed.insert(0, issue);

        if let Some(payroll) = spawned {
            info!("Claim {} transferred to payroll as {}", issue_id, payroll.issue_id);
            self.active.push(payroll);
        }

        Ok(())
    }

    /// Move every active issue referenced by `insight` to history
    ///
    /// Returns the number of issues moved. IDs that are no longer active are
    /// skipped.
    pub fn resolve_insight(&mut self, insight: &Insight) -> usize {
        let (status, action) = insight_resolution(insight.kind);

        let (moved, remaining): (Vec<Issue>, Vec<Issue>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|i| insight.references(&i.issue_id));
        self.active = remaining;

        let count = moved.len();
        for mut issue in moved {
            issue.status = status;
            issue.action_taken = Some(action.to_string());
            self.completed.insert(0, issue);
        }

        info!("Insight '{}' resolved {} issues", insight.title, count);
        count
    }

    /// Apply each issue's default verb to every listed ID
    ///
    /// Returns the number of issues processed; IDs not in the active list are
    /// skipped with a warning.
    pub fn process_bulk(&mut self, issue_ids: &[String]) -> usize {
        let mut processed = 0;
        for issue_id in issue_ids {
            let Some(issue_type) = self.get(issue_id).map(Issue::issue_type) else {
                warn!("Bulk processing skipped {}: not active", issue_id);
                continue;
            };
            // Type-matched default verb cannot be refused
            if self.dispose(issue_id, Disposition::default_for(issue_type)).is_ok() {
                processed += 1;
            }
        }
        info!("Bulk processed {} of {} issues", processed, issue_ids.len());
        processed
    }
}

/// Auditor issue carrying an approved claim's amount into payroll review
fn payroll_issue_for_claim(claim: &Issue) -> Option<Issue> {
    let IssueDetail::Welfare { ai_reason, .. } = &claim.detail else {
        return None;
    };

    let mut issue = Issue::new(
        format!("{}{}", PAYROLL_ISSUE_PREFIX, claim.issue_id),
        claim.employee_id.clone(),
        claim.name.clone(),
        MEDICAL_EXPENSE_TITLE,
        IssueDetail::Auditor {
            diff: claim.monetary_value()?,
            logic_text: format!("의료비 지원금 ({}) - {}", claim.title, ai_reason),
            calculation: CalculationKind::Other,
            description: None,
        },
    );
    issue.workplace = claim.workplace.clone();
    issue.manager_id = claim.manager_id.clone();
    issue.special_status = claim.special_status;
    issue.event_id = claim.event_id.clone();
    Some(issue)
}

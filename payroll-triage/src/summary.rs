//! Daily briefing counts over a worklist

use crate::worklist::Worklist;
use payroll_common::IssueType;
use serde::Serialize;

/// Active-issue count at which payroll readiness reaches 0%
pub const READINESS_BACKLOG_SCALE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorklistSummary {
    /// Active issues
    pub total: usize,
    pub chaser: usize,
    pub auditor: usize,
    pub welfare: usize,
    pub completed: usize,
    /// 0.0 (backlog of 20 or more) to 1.0 (nothing active)
    pub payroll_readiness: f64,
}

impl WorklistSummary {
    pub fn from_worklist(worklist: &Worklist) -> Self {
        let count = |t: IssueType| worklist.active().iter().filter(|i| i.issue_type() == t).count();
        let total = worklist.active().len();

        Self {
            total,
            chaser: count(IssueType::Chaser),
            auditor: count(IssueType::Auditor),
            welfare: count(IssueType::Welfare),
            completed: worklist.completed().len(),
            payroll_readiness: (1.0 - total as f64 / READINESS_BACKLOG_SCALE).clamp(0.0, 1.0),
        }
    }

    /// Nothing active and nothing done yet
    pub fn is_inbox_zero(&self) -> bool {
        self.total == 0 && self.completed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payroll_common::{CalculationKind, Issue, IssueDetail};

    fn auditor(id: usize) -> Issue {
        Issue::new(
            format!("A-{}", id),
            "E1",
            "김철수",
            "소급 적용",
            IssueDetail::Auditor {
                diff: 10_000,
                logic_text: String::new(),
                calculation: CalculationKind::Retroactive,
                description: None,
            },
        )
    }

    #[test]
    fn test_counts_and_readiness() {
        let mut worklist = Worklist::new((0..5).map(auditor).collect());
        worklist.apply("A-0").unwrap();

        let summary = WorklistSummary::from_worklist(&worklist);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.auditor, 4);
        assert_eq!(summary.chaser, 0);
        assert_eq!(summary.completed, 1);
        assert!((summary.payroll_readiness - 0.8).abs() < f64::EPSILON);
        assert!(!summary.is_inbox_zero());
    }

    #[test]
    fn test_readiness_clamped() {
        let worklist = Worklist::new((0..30).map(auditor).collect());
        assert_eq!(WorklistSummary::from_worklist(&worklist).payroll_readiness, 0.0);
    }

    #[test]
    fn test_inbox_zero() {
        let summary = WorklistSummary::from_worklist(&Worklist::default());
        assert!(summary.is_inbox_zero());
        assert_eq!(summary.payroll_readiness, 1.0);
    }
}

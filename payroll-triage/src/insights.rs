//! Insight engine
//!
//! Three independent detectors run over the active worklist, in this order:
//!
//! 1. **Role-Pay Mismatch**: first issue carrying a `job_change_date` only
//! 2. **Unplanned OT**: one insight covering every Unplanned-OT issue
//! 3. **Bottleneck Manager**: one insight per manager whose open Chaser
//!    count reaches `bottleneck_limit`, in first-seen manager order
//!
//! Detection is a pure function of the issues and the thresholds passed in;
//! callers re-read the threshold store before every pass.

use crate::expand::narrative::UNPLANNED_OT_TITLE;
use payroll_common::config::ThresholdConfig;
use payroll_common::{Insight, InsightColor, InsightKind, Issue, IssueType};
use tracing::debug;

/// Manager label for Chaser issues with no approver
pub const UNKNOWN_MANAGER: &str = "Unknown";

/// Run every detector over `issues`
pub fn detect_insights(issues: &[Issue], config: &ThresholdConfig) -> Vec<Insight> {
    let mut insights = Vec::new();
    insights.extend(detect_role_pay_mismatch(issues, config));
    insights.extend(detect_unplanned_overtime(issues));
    insights.extend(detect_bottleneck_managers(issues, config));

    debug!("Detected {} insights over {} issues", insights.len(), issues.len());
    insights
}

/// Capped at one insight regardless of how many candidates exist
pub fn detect_role_pay_mismatch(issues: &[Issue], config: &ThresholdConfig) -> Option<Insight> {
    let issue = issues.iter().find(|i| i.is_role_mismatch_candidate())?;

    Some(Insight {
        kind: InsightKind::RolePayMismatch,
        title: "직무 불일치 수당 발견".to_string(),
        message: format!(
            "{}님은 {}개월 전 사무직으로 발령 났으나, 규정에 어긋난 '{}'이 계속 지급되고 있습니다.",
            issue.name, config.zombie_months, issue.title
        ),
        action: "지급 중단 및 환수 제안".to_string(),
        color: InsightColor::Red,
        issue_ids: vec![issue.issue_id.clone()],
    })
}

pub fn detect_unplanned_overtime(issues: &[Issue]) -> Option<Insight> {
    let ids: Vec<String> = issues
        .iter()
        .filter(|i| i.title == UNPLANNED_OT_TITLE)
        .map(|i| i.issue_id.clone())
        .collect();

    if ids.is_empty() {
        return None;
    }

    Some(Insight {
        kind: InsightKind::UnplannedOvertime,
        title: "업무 계획 불일치 감지".to_string(),
        message: format!(
            "{}명의 직원이 사전 업무 계획 없이 초과근무를 수행했습니다. 부서장 승인 여부를 확인해야 합니다.",
            ids.len()
        ),
        action: "부서장 확인 요청".to_string(),
        color: InsightColor::Red,
        issue_ids: ids,
    })
}

pub fn detect_bottleneck_managers(issues: &[Issue], config: &ThresholdConfig) -> Vec<Insight> {
    // (manager, issue ids) in first-seen order
    let mut tally: Vec<(&str, Vec<String>)> = Vec::new();
    let mut total_chasers = 0usize;

    for issue in issues.iter().filter(|i| i.issue_type() == IssueType::Chaser) {
        total_chasers += 1;
        let manager = issue.manager_id.as_deref().unwrap_or(UNKNOWN_MANAGER);
        match tally.iter_mut().find(|(m, _)| *m == manager) {
            Some((_, ids)) => ids.push(issue.issue_id.clone()),
            None => tally.push((manager, vec![issue.issue_id.clone()])),
        }
    }

    tally
        .into_iter()
        .filter(|(_, ids)| ids.len() >= config.bottleneck_limit)
        .map(|(manager, ids)| {
            let share = ids.len() * 100 / total_chasers;
            Insight {
                kind: InsightKind::BottleneckManager,
                title: "결재 병목 감지".to_string(),
                message: format!(
                    "현재 미마감 건의 {}%가 '{}' 결재함에 멈춰 있습니다. 개별 독촉보다 리마인드가 효과적입니다.",
                    share, manager
                ),
                action: format!("{}에게 요약 리포트 발송", manager),
                color: InsightColor::Orange,
                issue_ids: ids,
            }
        })
        .collect()
}

//! Scenario narratives
//!
//! Declarative tables of the fields each scenario overwrites. A special
//! status and its narrative are always applied together from one row, so the
//! title, event, logic text and amount can never disagree with the status.

use payroll_common::{CalculationKind, IssueDetail, SpecialStatus};
use std::ops::RangeInclusive;

/// Fields written for a non-general special status
#[derive(Debug, Clone)]
pub struct StatusNarrative {
    pub status: SpecialStatus,
    pub title: &'static str,
    pub event_id: &'static str,
    pub logic_text: &'static str,
    pub calculation: CalculationKind,
    /// Delta range in units of 10,000 won (inclusive)
    pub diff_range: RangeInclusive<i64>,
}

/// Won per unit of [`StatusNarrative::diff_range`]
pub const DIFF_UNIT: i64 = 10_000;

pub static STATUS_NARRATIVES: [StatusNarrative; 5] = [
    StatusNarrative {
        status: SpecialStatus::NewHire,
        title: "신규 입사자 일할 계산",
        event_id: "신규 입사",
        logic_text: "입사일(11/15) 기준 급여 일할 계산 필요",
        calculation: CalculationKind::Prorated,
        diff_range: 120..=180,
    },
    StatusNarrative {
        status: SpecialStatus::Resigned,
        title: "중도 퇴사자 급여/연차 정산",
        event_id: "퇴직 정산",
        logic_text: "퇴사일(11/20) 기준 급여 및 잔여 연차 정산",
        calculation: CalculationKind::Prorated,
        diff_range: -80..=-30,
    },
    StatusNarrative {
        status: SpecialStatus::OnLeave,
        title: "휴직 발령에 따른 급여 중단",
        event_id: "휴직 발령",
        logic_text: "휴직 시작일(11/01)부터 급여 지급 중단 확인",
        calculation: CalculationKind::Other,
        diff_range: -350..=-250,
    },
    StatusNarrative {
        status: SpecialStatus::Reinstated,
        title: "복직자 급여 재개",
        event_id: "복직 발령",
        logic_text: "복직일(11/10) 기준 급여 일할 계산 및 지급 재개",
        calculation: CalculationKind::Prorated,
        diff_range: 200..=280,
    },
    StatusNarrative {
        status: SpecialStatus::ShiftChange,
        title: "교대조 변경 수당 차액",
        event_id: "근무조 변경",
        logic_text: "3교대 -> 주간 근무 변경에 따른 야간 수당 제외",
        calculation: CalculationKind::Allowance,
        diff_range: -20..=-10,
    },
];

/// Narrative row for a status; `None` for general
pub fn narrative_for(status: SpecialStatus) -> Option<&'static StatusNarrative> {
    STATUS_NARRATIVES.iter().find(|n| n.status == status)
}

/// Upper bounds of the special-status draw buckets (widths .05 .05 .05 .05 .10 .70)
pub static STATUS_BUCKETS: [(f64, SpecialStatus); 6] = [
    (0.05, SpecialStatus::NewHire),
    (0.10, SpecialStatus::Resigned),
    (0.15, SpecialStatus::OnLeave),
    (0.20, SpecialStatus::Reinstated),
    (0.30, SpecialStatus::ShiftChange),
    (1.00, SpecialStatus::General),
];

/// Map a uniform draw in `[0, 1)` to a special status
pub fn special_status_for(draw: f64) -> SpecialStatus {
    STATUS_BUCKETS
        .iter()
        .find(|(upper, _)| draw < *upper)
        .map(|(_, status)| *status)
        .unwrap_or(SpecialStatus::General)
}

/// Causal event of a general-status issue
pub fn general_event_for(detail: &IssueDetail) -> &'static str {
    match detail {
        IssueDetail::Auditor { calculation, .. } => match calculation {
            CalculationKind::Retroactive => "10/1 정기 승진",
            CalculationKind::Prorated => "11/1 조직 개편",
            _ => "수시 인사이동",
        },
        IssueDetail::Chaser { .. } => CLOSING_EVENT,
        IssueDetail::Welfare { .. } => "상시 복리후생",
    }
}

/// Monthly attendance closing event
pub const CLOSING_EVENT: &str = "11월 근태 마감";

// Role-Pay Mismatch: allowance still paid after a move to office work
pub const ROLE_MISMATCH_TITLE: &str = "위험수당 (Role-Pay Mismatch)";
pub const ROLE_MISMATCH_DIFF: i64 = 150_000;
pub const ROLE_MISMATCH_LOGIC: &str = "사무직 발령(3개월 전) 후에도 위험수당이 계속 지급되고 있습니다.";
pub const ROLE_MISMATCH_EVENT: &str = "11/1 조직 개편";
pub const ROLE_MISMATCH_LOOKBACK_DAYS: i64 = 90;

// Bottleneck: attendance approvals piling up on one manager
pub const BOTTLENECK_DESCRIPTION: &str = "11월 근태 확정 미완료";

// Unplanned OT: overtime recorded without a work plan
pub const UNPLANNED_OT_TITLE: &str = "계획되지 않은 초과근무 (Unplanned OT)";
pub const UNPLANNED_OT_DIFF: i64 = 85_000;
pub const UNPLANNED_OT_LOGIC: &str = "사전 업무 계획 없이 4시간의 초과근무가 기록되었습니다.";
pub const UNPLANNED_OT_EVENT: &str = "근태 불일치";
pub const UNPLANNED_OT_DESCRIPTION: &str = "업무 계획 미수립";
pub const UNPLANNED_OT_ID_SUFFIX: &str = "-WPM";

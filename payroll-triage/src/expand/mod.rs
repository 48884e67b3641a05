//! Population expander
//!
//! Grows the small set of extracted issues into a larger, internally
//! consistent worklist for demonstration and load testing.
//!
//! # Pipeline (per generated index `i`)
//! 1. Clone template `base[i % base.len()]`
//! 2. Randomize identity (name, sequential employee/issue IDs)
//! 3. Assign workplace from the name hash, manager from the workplace
//! 4. Draw a special status; non-general statuses rewrite the issue from the
//!    narrative table, general ones get an event label from their type
//! 5. Inject Role-Pay Mismatch at index 0 and every 50th general Auditor
//! 6. Force the first 6 indices into the bottleneck manager's Chaser backlog
//!
//! A post-pass then turns the first eligible general Auditor into an
//! Unplanned OT case.
//!
//! Only identity, status draw and amounts consume randomness; everything
//! else is deterministic given those draws and the index.

pub mod narrative;
pub mod roster;

use chrono::NaiveDate;
use narrative::*;
use payroll_common::time::{days_before, today};
use payroll_common::{CalculationKind, Error, Issue, IssueDetail, IssueType, Result, SpecialStatus};
use rand::Rng;
use roster::{manager_for, random_name, workplace_for_name, BOTTLENECK_MANAGER, BOTTLENECK_WORKPLACE};
use tracing::{debug, info};

/// First sequential number used for generated employee and issue IDs
pub const ID_BASE: usize = 20_240_000;

/// Every Nth index is a Role-Pay Mismatch candidate (when general Auditor)
pub const ROLE_MISMATCH_PERIOD: usize = 50;

/// Number of leading indices forced into the bottleneck backlog
pub const FORCED_BOTTLENECK_COUNT: usize = 6;

/// Deterministic inputs of an expansion run
#[derive(Debug, Clone)]
pub struct ExpansionOptions {
    /// Generation date; Role-Pay Mismatch job changes are dated 90 days before
    pub generated_on: NaiveDate,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            generated_on: today(),
        }
    }
}

/// Expand `base` to `target_count` issues using the thread RNG and today's date
pub fn expand_population(base: &[Issue], target_count: usize) -> Result<Vec<Issue>> {
    expand_population_with(base, target_count, &mut rand::thread_rng(), &ExpansionOptions::default())
}

/// Expand `base` to exactly `target_count` issues
///
/// # Errors
/// `Error::InvalidInput` when `base` is empty or `target_count` is zero.
pub fn expand_population_with<R: Rng + ?Sized>(
    base: &[Issue],
    target_count: usize,
    rng: &mut R,
    options: &ExpansionOptions,
) -> Result<Vec<Issue>> {
    if base.is_empty() {
        return Err(Error::InvalidInput(
            "population expansion needs at least one template issue".to_string(),
        ));
    }
    if target_count == 0 {
        return Err(Error::InvalidInput("target_count must be positive".to_string()));
    }

    let job_change_date = days_before(options.generated_on, ROLE_MISMATCH_LOOKBACK_DAYS);
    let mut expanded = Vec::with_capacity(target_count);

    for i in 0..target_count {
        let mut issue = base[i % base.len()].clone();

        assign_identity(&mut issue, i, rng);
        assign_workplace(&mut issue);

        let status = special_status_for(rng.gen::<f64>());
        apply_special_status(&mut issue, status, rng);

        let periodic_candidate = issue.special_status.is_general()
            && issue.issue_type() == IssueType::Auditor
            && i % ROLE_MISMATCH_PERIOD == 0;
        if i == 0 || periodic_candidate {
            inject_role_mismatch(&mut issue, job_change_date);
        } else {
            issue.job_change_date = None;
        }

        if i < FORCED_BOTTLENECK_COUNT {
            inject_bottleneck(&mut issue);
        } else if issue.special_status.is_general() && issue.issue_type() == IssueType::Chaser {
            route_to_bottleneck_manager(&mut issue);
        }

        expanded.push(issue);
    }

    if !inject_unplanned_overtime(&mut expanded) {
        debug!("No general Auditor issue available for Unplanned OT injection");
    }

    info!(
        "Expanded {} template issues into {} issues",
        base.len(),
        expanded.len()
    );
    Ok(expanded)
}

fn assign_identity<R: Rng + ?Sized>(issue: &mut Issue, index: usize, rng: &mut R) {
    let number = ID_BASE + index;
    issue.name = random_name(rng);
    issue.employee_id = format!("E{}", number);
    issue.issue_id = format!("{}-{}", issue.issue_type().prefix(), number);
}

fn assign_workplace(issue: &mut Issue) {
    let workplace = workplace_for_name(&issue.name);
    issue.workplace = Some(workplace.to_string());
    issue.manager_id = manager_for(workplace).map(String::from);
}

/// Set the status together with every field that depends on it
fn apply_special_status<R: Rng + ?Sized>(issue: &mut Issue, status: SpecialStatus, rng: &mut R) {
    issue.special_status = status;

    match narrative_for(status) {
        Some(narrative) => {
            let diff = rng.gen_range(narrative.diff_range.clone()) * DIFF_UNIT;
            issue.title = narrative.title.to_string();
            issue.event_id = Some(narrative.event_id.to_string());
            issue.detail = IssueDetail::Auditor {
                diff,
                logic_text: narrative.logic_text.to_string(),
                calculation: narrative.calculation,
                description: None,
            };
        }
        None => {
            issue.event_id = Some(general_event_for(&issue.detail).to_string());
        }
    }
}

fn inject_role_mismatch(issue: &mut Issue, job_change_date: NaiveDate) {
    issue.special_status = SpecialStatus::General;
    issue.job_change_date = Some(job_change_date);
    issue.title = ROLE_MISMATCH_TITLE.to_string();
    issue.event_id = Some(ROLE_MISMATCH_EVENT.to_string());
    issue.detail = IssueDetail::Auditor {
        diff: ROLE_MISMATCH_DIFF,
        logic_text: ROLE_MISMATCH_LOGIC.to_string(),
        calculation: CalculationKind::Allowance,
        description: None,
    };
}

fn inject_bottleneck(issue: &mut Issue) {
    issue.special_status = SpecialStatus::General;
    // Role-Pay Mismatch candidates keep their title so the insight stays traceable
    if !issue.is_role_mismatch_candidate() {
        issue.title = crate::extract::attendance::CHASER_TITLE.to_string();
    }
    issue.event_id = Some(CLOSING_EVENT.to_string());
    issue.detail = IssueDetail::Chaser {
        description: BOTTLENECK_DESCRIPTION.to_string(),
    };
    route_to_bottleneck_manager(issue);
}

fn route_to_bottleneck_manager(issue: &mut Issue) {
    issue.workplace = Some(BOTTLENECK_WORKPLACE.to_string());
    issue.manager_id = Some(BOTTLENECK_MANAGER.to_string());
}

/// Convert the first general, non-candidate Auditor; false when none exists
fn inject_unplanned_overtime(issues: &mut [Issue]) -> bool {
    let target = issues.iter_mut().find(|issue| {
        issue.special_status.is_general()
            && issue.issue_type() == IssueType::Auditor
            && !issue.is_role_mismatch_candidate()
    });

    let Some(issue) = target else {
        return false;
    };

    issue.issue_id.push_str(UNPLANNED_OT_ID_SUFFIX);
    issue.title = UNPLANNED_OT_TITLE.to_string();
    issue.event_id = Some(UNPLANNED_OT_EVENT.to_string());
    issue.detail = IssueDetail::Auditor {
        diff: UNPLANNED_OT_DIFF,
        logic_text: UNPLANNED_OT_LOGIC.to_string(),
        calculation: CalculationKind::Other,
        description: Some(UNPLANNED_OT_DESCRIPTION.to_string()),
    };
    true
}

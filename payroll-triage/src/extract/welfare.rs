//! Welfare extractor
//!
//! Reads welfare claims from their own file and emits one Welfare issue per
//! pending claim. Any load failure is logged and yields no issues, so a bad
//! claims file never blocks the attendance and ledger extractors.

use super::{IssueExtractor, PENDING_STATUS};
use payroll_common::records::{RecordSet, WelfareClaimRecord};
use payroll_common::{Issue, IssueDetail, Result};
use std::path::{Path, PathBuf};
use tracing::error;

pub struct WelfareExtractor {
    claims_path: PathBuf,
}

impl WelfareExtractor {
    pub fn new(claims_path: impl Into<PathBuf>) -> Self {
        Self {
            claims_path: claims_path.into(),
        }
    }
}

impl IssueExtractor for WelfareExtractor {
    fn name(&self) -> &'static str {
        "Welfare"
    }

    fn extract(&self, _records: &RecordSet) -> Vec<Issue> {
        match load_claims(&self.claims_path) {
            Ok(claims) => welfare_issues(&claims),
            Err(e) => {
                error!("Error loading welfare claims {}: {}", self.claims_path.display(), e);
                Vec::new()
            }
        }
    }
}

/// Read a JSON array of claim rows
pub fn load_claims(path: &Path) -> Result<Vec<WelfareClaimRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// One Welfare issue per pending claim
pub fn welfare_issues(claims: &[WelfareClaimRecord]) -> Vec<Issue> {
    claims
        .iter()
        .filter(|claim| claim.status == PENDING_STATUS)
        .map(|claim| {
            Issue::new(
                claim.claim_id.clone(),
                claim.employee_id.clone(),
                claim.name.clone(),
                claim.treatment_type.clone(),
                IssueDetail::Welfare {
                    amount: claim.amount,
                    receipt_items: unescape_newlines(&claim.receipt_items),
                    ai_verdict: claim.ai_verdict.clone(),
                    ai_reason: claim.ai_reason.clone(),
                    policy_ref: claim.policy_ref.clone(),
                },
            )
        })
        .collect()
}

fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

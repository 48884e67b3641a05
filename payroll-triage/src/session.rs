//! Triage session
//!
//! Owns the worklist and the threshold store for one review session and
//! wires the engine stages together: extract → expand on bootstrap, then
//! grouping, insight detection and dispositions over the live worklist.

use crate::expand::{expand_population_with, ExpansionOptions};
use crate::extract::extract_all_issues;
use crate::grouping::{group_issues, IssueGroup, PivotMode};
use crate::insights::detect_insights;
use crate::summary::WorklistSummary;
use crate::worklist::Worklist;
use payroll_common::config::ConfigStore;
use payroll_common::records::RecordSet;
use payroll_common::{Insight, Result};
use rand::Rng;
use std::path::Path;
use tracing::{info, warn};

pub struct TriageSession {
    pub worklist: Worklist,
    config_store: ConfigStore,
}

impl TriageSession {
    pub fn new(worklist: Worklist, config_store: ConfigStore) -> Self {
        Self {
            worklist,
            config_store,
        }
    }

    /// Build a session from source records
    ///
    /// Extracted issues seed the population expander. When nothing is
    /// extracted the session starts with an empty worklist.
    pub fn bootstrap<R: Rng + ?Sized>(
        records: &RecordSet,
        welfare_claims_path: &Path,
        target_count: usize,
        rng: &mut R,
        config_store: ConfigStore,
    ) -> Result<Self> {
        let base = extract_all_issues(records, welfare_claims_path);
        if base.is_empty() {
            warn!("No issues extracted; starting with an empty worklist");
            return Ok(Self::new(Worklist::default(), config_store));
        }

        let issues = expand_population_with(&base, target_count, rng, &ExpansionOptions::default())?;
        info!("Session bootstrapped with {} issues", issues.len());
        Ok(Self::new(Worklist::new(issues), config_store))
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config_store
    }

    /// Detect insights over the active worklist using freshly loaded thresholds
    pub fn insights(&self) -> Vec<Insight> {
        let config = self.config_store.load();
        detect_insights(self.worklist.active(), &config)
    }

    pub fn groups(&self, mode: PivotMode) -> Vec<IssueGroup> {
        group_issues(self.worklist.active(), mode)
    }

    pub fn summary(&self) -> WorklistSummary {
        WorklistSummary::from_worklist(&self.worklist)
    }
}

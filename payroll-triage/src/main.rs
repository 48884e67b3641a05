//! payroll-triage - payroll-exception triage report
//!
//! Loads the source records, builds the review worklist and prints a JSON
//! report (summary, grouped worklist, insights) to stdout.

use anyhow::{anyhow, Result};
use clap::Parser;
use payroll_common::config::ConfigStore;
use payroll_triage::source::{load_records, resolve_data_dir, welfare_claims_path};
use payroll_triage::{IssueGroup, PivotMode, TriageSession};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "payroll-triage", version, about = "Payroll-exception triage report")]
struct Args {
    /// Directory holding the source JSON documents
    #[arg(long)]
    data_dir: Option<String>,

    /// Threshold config file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Number of worklist issues to generate
    #[arg(long, default_value_t = 50)]
    target_count: usize,

    /// Grouping dimension: type, status, workplace or cause
    #[arg(long, default_value = "type")]
    pivot: String,

    /// Seed for a reproducible worklist
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct GroupReport<'a> {
    label: &'a str,
    summary: String,
    count: usize,
    total_diff: i64,
    bulk_action: Option<String>,
    issue_ids: Vec<String>,
}

impl<'a> From<&'a IssueGroup> for GroupReport<'a> {
    fn from(group: &'a IssueGroup) -> Self {
        Self {
            label: &group.label,
            summary: group.summary_label(),
            count: group.count,
            total_diff: group.total_diff,
            bulk_action: group.bulk_action().map(|a| a.label(group.count)),
            issue_ids: group.issue_ids(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting payroll-triage v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let pivot = PivotMode::from_name(&args.pivot)
        .ok_or_else(|| anyhow!("Unknown pivot '{}' (expected type, status, workplace or cause)", args.pivot))?;

    let data_dir = resolve_data_dir(args.data_dir.as_deref());
    info!("Data directory: {}", data_dir.display());

    let config_store = ConfigStore::resolve(args.config.as_deref());
    info!("Threshold config: {}", config_store.path().display());

    let records = load_records(&data_dir).await;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = TriageSession::bootstrap(
        &records,
        &welfare_claims_path(&data_dir),
        args.target_count,
        &mut rng,
        config_store,
    )?;

    let groups = session.groups(pivot);
    let report = serde_json::json!({
        "summary": session.summary(),
        "pivot": pivot.display_name(),
        "groups": groups.iter().map(GroupReport::from).collect::<Vec<_>>(),
        "insights": session.insights(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

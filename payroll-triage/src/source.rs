//! Record source
//!
//! Loads the tabular datasets from a data directory of JSON documents, one
//! array of row objects per file:
//!
//! - `hr_master.json`: employee master
//! - `tna_record.json`: time-attendance rows
//! - `shadow_ledger.json`: shadow payroll ledger
//! - `welfare_claims.json`: welfare claims (read by the welfare extractor)
//!
//! # Data directory resolution priority
//!
//! 1. Command-line argument
//! 2. `PAYROLL_TRIAGE_DATA` environment variable
//! 3. `./data`

use payroll_common::records::RecordSet;
use payroll_common::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const DATA_DIR_ENV_VAR: &str = "PAYROLL_TRIAGE_DATA";
pub const DEFAULT_DATA_DIR: &str = "./data";

pub const EMPLOYEES_FILE: &str = "hr_master.json";
pub const ATTENDANCE_FILE: &str = "tna_record.json";
pub const LEDGER_FILE: &str = "shadow_ledger.json";
pub const WELFARE_CLAIMS_FILE: &str = "welfare_claims.json";

/// Resolve the data directory (see module docs for priority)
pub fn resolve_data_dir(cli_arg: Option<&str>) -> PathBuf {
    if let Some(dir) = cli_arg {
        return PathBuf::from(dir);
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    PathBuf::from(DEFAULT_DATA_DIR)
}

pub fn welfare_claims_path(data_dir: &Path) -> PathBuf {
    data_dir.join(WELFARE_CLAIMS_FILE)
}

async fn read_rows<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>> {
    let content = tokio::fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the employee, attendance and ledger datasets concurrently
///
/// The three datasets are all-or-nothing: if any one is missing or malformed
/// the error is logged and every dataset comes back empty.
pub async fn load_records(data_dir: &Path) -> RecordSet {
    let (employees, attendance, ledger) = tokio::join!(
        read_rows(data_dir.join(EMPLOYEES_FILE)),
        read_rows(data_dir.join(ATTENDANCE_FILE)),
        read_rows(data_dir.join(LEDGER_FILE)),
    );

    match (employees, attendance, ledger) {
        (Ok(employees), Ok(attendance), Ok(ledger)) => {
            let records = RecordSet {
                employees,
                attendance,
                ledger,
            };
            info!(
                "Loaded {} employees, {} attendance rows, {} ledger rows from {}",
                records.employees.len(),
                records.attendance.len(),
                records.ledger.len(),
                data_dir.display()
            );
            records
        }
        (employees, attendance, ledger) => {
            for (file, result) in [
                (EMPLOYEES_FILE, employees.err()),
                (ATTENDANCE_FILE, attendance.err()),
                (LEDGER_FILE, ledger.err()),
            ] {
                if let Some(e) = result {
                    error!("Error loading {}: {}", data_dir.join(file).display(), e);
                }
            }
            RecordSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_argument_wins() {
        assert_eq!(resolve_data_dir(Some("/srv/payroll")), PathBuf::from("/srv/payroll"));
    }

    #[test]
    #[serial]
    fn test_env_var_then_default() {
        std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/payroll-data");
        assert_eq!(resolve_data_dir(None), PathBuf::from("/tmp/payroll-data"));

        std::env::remove_var(DATA_DIR_ENV_VAR);
        assert_eq!(resolve_data_dir(None), PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    #[serial]
    fn test_blank_env_var_ignored() {
        std::env::set_var(DATA_DIR_ENV_VAR, "   ");
        assert_eq!(resolve_data_dir(None), PathBuf::from(DEFAULT_DATA_DIR));
        std::env::remove_var(DATA_DIR_ENV_VAR);
    }

    #[test]
    fn test_welfare_claims_path() {
        assert_eq!(
            welfare_claims_path(Path::new("/data")),
            PathBuf::from("/data/welfare_claims.json")
        );
    }
}

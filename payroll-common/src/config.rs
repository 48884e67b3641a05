//! Threshold configuration loading, saving and path resolution
//!
//! The threshold document is a small TOML file holding wage/rate constants,
//! insight detection thresholds and reminder policy.
//!
//! # Graceful degradation
//!
//! - Missing file → built-in defaults
//! - Unparsable or invalid document → warning + built-in defaults
//! - Write failure → reported to the caller as `false` by [`ConfigStore::save`]
//!
//! # Path resolution priority
//!
//! 1. Command-line argument (highest priority)
//! 2. `PAYROLL_TRIAGE_CONFIG` environment variable
//! 3. Platform config directory (`<config_dir>/payroll-triage/thresholds.toml`)
//! 4. `./payroll_triage_data/thresholds.toml` (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Environment variable overriding the threshold file location
pub const CONFIG_ENV_VAR: &str = "PAYROLL_TRIAGE_CONFIG";

/// File name of the threshold document
pub const CONFIG_FILE_NAME: &str = "thresholds.toml";

/// Reminder send slot relative to the closing day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NotificationSlot {
    #[serde(rename = "D-5")]
    FiveDaysBefore,
    #[serde(rename = "D-3")]
    ThreeDaysBefore,
    #[serde(rename = "D-1")]
    DayBefore,
    #[serde(rename = "D-Day")]
    ClosingDay,
}

impl NotificationSlot {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationSlot::FiveDaysBefore => "D-5",
            NotificationSlot::ThreeDaysBefore => "D-3",
            NotificationSlot::DayBefore => "D-1",
            NotificationSlot::ClosingDay => "D-Day",
        }
    }
}

/// Runtime-tunable thresholds and payroll constants
///
/// Every field has a built-in default, so partial documents load fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Statutory minimum hourly wage (won)
    pub min_wage: u64,
    /// Overtime pay multiplier
    pub overtime_rate: f64,
    /// Tax-free meal allowance ceiling (won)
    pub meal_tax_free_limit: u64,
    /// Family allowance per dependant (won)
    pub family_allowance_per_person: u64,
    /// Months after a role change before a stale allowance is flagged (1-12)
    pub zombie_months: u32,
    /// Open Chaser issues per manager that trigger a bottleneck insight
    pub bottleneck_limit: usize,
    /// Allowed gap between shift plan and punch records (minutes)
    pub ghost_shift_tolerance: u32,
    pub notification_schedule: BTreeSet<NotificationSlot>,
    /// Roles excluded from automatic reminders
    pub vip_filter: BTreeSet<String>,
    /// Reminder message; `{name}` is replaced with the recipient's name
    pub msg_template: String,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min_wage: 9860,
            overtime_rate: 1.5,
            meal_tax_free_limit: 200_000,
            family_allowance_per_person: 100_000,
            zombie_months: 3,
            bottleneck_limit: 15,
            ghost_shift_tolerance: 60,
            notification_schedule: [
                NotificationSlot::FiveDaysBefore,
                NotificationSlot::ThreeDaysBefore,
                NotificationSlot::DayBefore,
            ]
            .into_iter()
            .collect(),
            vip_filter: ["Executive", "Team Lead"].into_iter().map(String::from).collect(),
            msg_template: "안녕하세요 {name}님, 급여 마감을 위해 확인 부탁드립니다.".to_string(),
        }
    }
}

impl ThresholdConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.zombie_months) {
            return Err(Error::Config(format!(
                "zombie_months must be within 1-12, got {}",
                self.zombie_months
            )));
        }
        if self.bottleneck_limit == 0 {
            return Err(Error::Config("bottleneck_limit must be at least 1".to_string()));
        }
        if !self.msg_template.contains("{name}") {
            return Err(Error::Config(
                "msg_template must contain a {name} placeholder".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ThresholdConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when absent or malformed
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("Threshold config not found at {}, using defaults", path.display());
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|content| Self::from_toml_str(&content));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                warn!("Error loading threshold config {}: {} (using defaults)", path.display(), e);
                Self::default()
            }
        }
    }

    /// Render the reminder message for one recipient
    pub fn render_reminder(&self, name: &str) -> String {
        self.msg_template.replace("{name}", name)
    }
}

/// Write a TOML document atomically (temp file + rename)
///
/// Creates the parent directory when needed. The rename keeps readers from
/// seeing a half-written document, but the write is not fsynced.
pub fn write_toml_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, content)?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::Io(e));
    }

    Ok(())
}

/// Resolve the threshold file location (see module docs for priority)
pub fn resolve_config_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: Platform config directory, then local fallback
    default_config_path()
}

/// Platform default threshold file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("payroll-triage").join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("./payroll_triage_data").join(CONFIG_FILE_NAME))
}

/// File-backed threshold store
///
/// Holds only the path: every [`load`](ConfigStore::load) re-reads the file,
/// so readers always observe the latest saved values.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the resolved location
    pub fn resolve(cli_arg: Option<&str>) -> Self {
        Self::new(resolve_config_path(cli_arg))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ThresholdConfig {
        ThresholdConfig::load(&self.path)
    }

    /// Overwrite the whole document; returns `false` on failure
    ///
    /// Configs that fail [`ThresholdConfig::validate`] are refused and the
    /// file is left untouched, since `load` would discard them anyway.
    pub fn save(&self, config: &ThresholdConfig) -> bool {
        if let Err(e) = config.validate() {
            error!("Refusing to save threshold config {}: {}", self.path.display(), e);
            return false;
        }

        match write_toml_config(config, &self.path) {
            Ok(()) => {
                info!("Threshold config saved to {}", self.path.display());
                true
            }
            Err(e) => {
                error!("Error saving threshold config {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Save and return the built-in defaults
    pub fn reset(&self) -> ThresholdConfig {
        let defaults = ThresholdConfig::default();
        self.save(&defaults);
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ThresholdConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zombie_months_out_of_range() {
        let config = ThresholdConfig {
            zombie_months: 13,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ThresholdConfig {
            zombie_months: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_template_requires_placeholder() {
        let config = ThresholdConfig {
            msg_template: "확인 부탁드립니다.".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_render_reminder() {
        let config = ThresholdConfig::default();
        assert_eq!(
            config.render_reminder("김철수"),
            "안녕하세요 김철수님, 급여 마감을 위해 확인 부탁드립니다."
        );
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = ThresholdConfig::from_toml_str("bottleneck_limit = 5\n").unwrap();
        assert_eq!(config.bottleneck_limit, 5);
        assert_eq!(config.zombie_months, 3);
        assert_eq!(config.min_wage, 9860);
    }

    #[test]
    fn test_notification_slots_parse() {
        let config =
            ThresholdConfig::from_toml_str("notification_schedule = [\"D-1\", \"D-Day\"]\n").unwrap();
        let slots: Vec<_> = config.notification_schedule.iter().map(|s| s.label()).collect();
        assert_eq!(slots, vec!["D-1", "D-Day"]);
    }

    #[test]
    fn test_unknown_slot_rejected() {
        assert!(ThresholdConfig::from_toml_str("notification_schedule = [\"D-7\"]\n").is_err());
    }

    #[test]
    fn test_default_vip_filter() {
        let config = ThresholdConfig::default();
        assert!(config.vip_filter.contains("Executive"));
        assert!(!config.vip_filter.contains("Manager"));
    }
}

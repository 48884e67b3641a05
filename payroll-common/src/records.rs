//! Source record models
//!
//! Row types for the four tabular datasets supplied by the record source.
//! Unknown columns are ignored so richer exports load unchanged.

use serde::{Deserialize, Serialize};

/// Employee master row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Time-attendance row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub status: String,
}

/// Shadow payroll ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub issue_id: String,
    pub employee_id: String,
    pub status: String,
    /// Signed payroll delta in won
    pub diff: i64,
    /// Category text, e.g. "소급 적용" or "일할 계산"
    pub issue_type: String,
    pub logic_text: String,
}

/// Welfare (medical expense) claim row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelfareClaimRecord {
    pub claim_id: String,
    pub employee_id: String,
    pub name: String,
    pub status: String,
    pub treatment_type: String,
    pub amount: u64,
    /// Receipt lines; may contain escaped `\n` sequences
    pub receipt_items: String,
    pub ai_verdict: String,
    pub ai_reason: String,
    pub policy_ref: String,
}

/// The HR, attendance and ledger datasets loaded together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    pub employees: Vec<EmployeeRecord>,
    pub attendance: Vec<AttendanceRecord>,
    pub ledger: Vec<LedgerRecord>,
}

impl RecordSet {
    /// Look up an employee's name, falling back to `"Unknown"`
    pub fn employee_name(&self, employee_id: &str) -> String {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string())
    }

    /// True when no dataset has any rows
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.attendance.is_empty() && self.ledger.is_empty()
    }
}

/// Sentinel name used when an employee is missing from the master data
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

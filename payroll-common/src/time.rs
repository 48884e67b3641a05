//! Date utilities

use chrono::{Duration, Local, NaiveDate};

/// Get today's date in the local timezone
///
/// Payroll calendars are local, so generation dates use local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date `days` calendar days before `from`
pub fn days_before(from: NaiveDate, days: i64) -> NaiveDate {
    from - Duration::days(days)
}

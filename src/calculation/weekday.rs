//! Weekday counting and per-day smart defaults.
//!
//! A workday is any Monday to Friday, regardless of public holidays.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, CalendarDay, ReportPeriod};

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::is_workday;
/// use chrono::NaiveDate;
///
/// // 2024-03-01 is a Friday, 2024-03-02 a Saturday
/// assert!(is_workday(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// assert!(!is_workday(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()));
/// ```
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts weekdays in the inclusive range `start..=end`.
///
/// Returns 0 when `start` is after `end`.
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::count_weekdays;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(count_weekdays(start, end), 21);
/// ```
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_workday(*day))
        .count() as u32
}

/// Counts weekdays between two `YYYY-MM-DD` strings.
///
/// An unparseable date is a caller bug and is reported as
/// [`EngineError::InvalidDate`].
pub fn count_weekdays_between(start: &str, end: &str) -> EngineResult<u32> {
    Ok(count_weekdays(parse_date(start)?, parse_date(end)?))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Resolves the effective status of a single day.
///
/// A stored record always wins, including an explicit `worked`. Without a
/// record a weekday counts as worked and a weekend day has no status.
pub fn day_status(date: NaiveDate, record: Option<&AttendanceRecord>) -> Option<AttendanceStatus> {
    match record {
        Some(record) => Some(record.status),
        None if is_workday(date) => Some(AttendanceStatus::Worked),
        None => None,
    }
}

/// Lists every date of `period` with its effective status for one employee.
///
/// Dates after `today` only show a status when one was stored; the smart
/// default never fills the future.
pub fn month_calendar(
    employee_id: &str,
    period: &ReportPeriod,
    records: &[AttendanceRecord],
    today: NaiveDate,
) -> Vec<CalendarDay> {
    period
        .start_date
        .iter_days()
        .take_while(|day| *day <= period.end_date)
        .map(|date| {
            let record = records
                .iter()
                .rev()
                .find(|r| r.employee_id == employee_id && r.date == date);
            let status = if date > today {
                record.map(|r| r.status)
            } else {
                day_status(date, record)
            };
            CalendarDay {
                date,
                status,
                recorded: record.is_some(),
            }
        })
        .collect()
}

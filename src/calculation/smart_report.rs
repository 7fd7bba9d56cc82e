//! Smart attendance report.
//!
//! Reconstructs an employee's attendance for a period from the stored sick and
//! vacation exceptions plus the weekday count. Unmarked weekdays up to today
//! count as worked; future weekdays are left out entirely.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{AttendanceRecord, AttendanceStatus, ReportPeriod, SmartAttendanceReport};

use super::weekday::count_weekdays;

/// Computes the attendance report for one employee over a month or year.
///
/// # Arguments
///
/// * `employee_id` - Records belonging to other employees are ignored
/// * `period` - The month or year to report on
/// * `exceptions` - Stored attendance records; `worked` records are ignored
/// * `today` - The reference date for clipping
///
/// # Behavior
///
/// - A period starting after `today` yields an all-zero report
/// - `workdays` counts weekdays from the period start to `min(period end, today)`
/// - `sick` and `vacation` count records dated anywhere in the unclipped period
/// - `worked` is clamped at zero when absences exceed workdays
/// - Records are unique per date; if duplicates are supplied the last one wins
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::compute_smart_report;
/// use staff_ledger::models::{AttendanceRecord, AttendanceStatus, ReportPeriod};
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod::month(2024, 3).unwrap();
/// let sick = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     status: AttendanceStatus::Sick,
///     notes: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let report = compute_smart_report("emp_001", &period, &[sick], today);
/// assert_eq!(report.workdays, 21);
/// assert_eq!(report.sick, 1);
/// assert_eq!(report.worked, 20);
/// ```
pub fn compute_smart_report(
    employee_id: &str,
    period: &ReportPeriod,
    exceptions: &[AttendanceRecord],
    today: NaiveDate,
) -> SmartAttendanceReport {
    if period.is_future(today) {
        debug!(
            employee_id,
            start = %period.start_date,
            "Period starts after today, reporting zeros"
        );
        return SmartAttendanceReport::default();
    }

    let clipped_end = period.end_date.min(today);
    let workdays = count_weekdays(period.start_date, clipped_end);

    let by_date: BTreeMap<NaiveDate, AttendanceStatus> = exceptions
        .iter()
        .filter(|r| r.employee_id == employee_id && period.contains_date(r.date))
        .map(|r| (r.date, r.status))
        .collect();

    let (sick, vacation) = by_date
        .values()
        .fold((0u32, 0u32), |(sick, vacation), status| match status {
            AttendanceStatus::Sick => (sick + 1, vacation),
            AttendanceStatus::Vacation => (sick, vacation + 1),
            AttendanceStatus::Worked => (sick, vacation),
        });

    let report = SmartAttendanceReport::from_counts(workdays, sick, vacation);

    if sick + vacation > workdays {
        debug!(
            employee_id,
            workdays,
            sick,
            vacation,
            "Absences exceed counted workdays, clamping worked to zero"
        );
    }

    report
}

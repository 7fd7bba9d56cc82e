//! Attendance records and the derived attendance report.
//!
//! Only exceptions are stored: a weekday without a record counts as worked and
//! a weekend day without a record carries no status. [`SmartAttendanceReport`]
//! is the read-side reconstruction of a period from those exceptions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The status of an employee on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked.
    Worked,
    /// The employee was off sick.
    Sick,
    /// The employee was on paid vacation.
    Vacation,
}

/// A stored attendance entry, unique per `(employee_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Returns true for sick and vacation records.
    ///
    /// Explicit `worked` records only override the smart default and never
    /// change report counts.
    pub fn is_absence(&self) -> bool {
        matches!(
            self.status,
            AttendanceStatus::Sick | AttendanceStatus::Vacation
        )
    }
}

/// Attendance summary for one employee over a month or a year.
///
/// `worked` is always `max(0, workdays - sick - vacation)`. Note that
/// `worked + sick + vacation` may exceed `workdays` when absences were recorded
/// on weekends.
///
/// # Example
///
/// ```
/// use staff_ledger::models::SmartAttendanceReport;
///
/// let report = SmartAttendanceReport::from_counts(21, 2, 1);
/// assert_eq!(report.worked, 18);
///
/// let clamped = SmartAttendanceReport::from_counts(2, 3, 1);
/// assert_eq!(clamped.worked, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartAttendanceReport {
    /// Weekdays in the period up to and including today.
    pub workdays: u32,
    /// Workdays not covered by an absence.
    pub worked: u32,
    /// Days recorded as sick.
    pub sick: u32,
    /// Days recorded as vacation.
    pub vacation: u32,
}

impl SmartAttendanceReport {
    /// Builds a report from raw counts, clamping `worked` at zero.
    pub fn from_counts(workdays: u32, sick: u32, vacation: u32) -> Self {
        Self {
            workdays,
            worked: workdays.saturating_sub(sick.saturating_add(vacation)),
            sick,
            vacation,
        }
    }

    /// Returns true if the report covers no workdays at all.
    pub fn is_empty(&self) -> bool {
        self.workdays == 0
    }
}

/// A single date in an attendance calendar with its effective status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The stored status, or the smart default when nothing is stored.
    pub status: Option<AttendanceStatus>,
    /// True if the status came from a stored record.
    pub recorded: bool,
}

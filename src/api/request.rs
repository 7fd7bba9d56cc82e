//! Request types for the staff ledger API.
//!
//! Every endpoint is stateless: requests carry all the data a report needs.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Currency, CurrencyRate, SmartAttendanceReport};
use crate::source::InMemorySource;

/// Resolves an optional reference date to today's local date.
pub(crate) fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Request body for `POST /convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// The amount to convert.
    pub amount: Decimal,
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Rate table; the configured default table when absent.
    #[serde(default)]
    pub rates: Option<Vec<CurrencyRate>>,
}

/// Response body for `POST /convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// The converted amount, or the input when no rate path exists.
    pub amount: Decimal,
}

/// Request body for `POST /attendance/report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReportRequest {
    /// The employee to report on.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The month, or absent for a whole-year report.
    #[serde(default)]
    pub month: Option<u32>,
    /// Reference date for clipping; today when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Stored attendance exceptions.
    #[serde(default)]
    pub exceptions: Vec<AttendanceRecord>,
}

/// Request body for `POST /attendance/calendar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The employee to list.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Reference date; today when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Stored attendance records.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

/// Request body for `POST /salary/deduction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionRequest {
    /// Salary already expressed in the wanted currency.
    pub base_salary: Decimal,
    /// The attendance report to deduct for.
    pub report: SmartAttendanceReport,
}

/// Request body for `POST /summary/month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummaryRequest {
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Reference date for attendance clipping; today when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Report currency; the configured display currency when absent.
    #[serde(default)]
    pub display_currency: Option<Currency>,
    /// Snapshot of the stored ledgers.
    #[serde(default)]
    pub data: InMemorySource,
}

/// Request body for `POST /summary/series`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// Number of months in the series, ending at the month of `today`.
    pub months_back: u32,
    /// Reference date; today when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Report currency; the configured display currency when absent.
    #[serde(default)]
    pub display_currency: Option<Currency>,
    /// Snapshot of the stored ledgers.
    #[serde(default)]
    pub data: InMemorySource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_convert_request_without_rates() {
        let json = r#"{"amount": 100, "from": "USD", "to": "SEK"}"#;
        let request: ConvertRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, Decimal::new(100, 0));
        assert!(request.rates.is_none());
    }

    #[test]
    fn test_deserialize_year_report_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "year": 2024,
            "exceptions": []
        }"#;
        let request: AttendanceReportRequest = serde_json::from_str(json).unwrap();
        assert!(request.month.is_none());
        assert!(request.today.is_none());
    }

    #[test]
    fn test_deserialize_month_summary_request_with_snapshot() {
        let json = r#"{
            "year": 2024,
            "month": 3,
            "today": "2024-12-31",
            "data": {
                "costs": [{
                    "id": "cost_001",
                    "name": "Office rent",
                    "amount": "12000",
                    "currency": "SEK",
                    "cost_type": "recurring",
                    "year": 2024,
                    "month": 1
                }]
            }
        }"#;
        let request: MonthSummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.data.costs.len(), 1);
        assert!(request.display_currency.is_none());
        assert_eq!(request.today, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn test_resolve_today_prefers_given_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(resolve_today(Some(date)), date);
    }
}

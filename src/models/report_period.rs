//! Report period model.
//!
//! This module contains the [`ReportPeriod`] type, a calendar month or calendar
//! year over which attendance and salary reports are computed.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month or calendar year with resolved inclusive bounds.
///
/// # Example
///
/// ```
/// use staff_ledger::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let march = ReportPeriod::month(2024, 3).unwrap();
/// assert_eq!(march.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(march.end_date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
///
/// let year = ReportPeriod::year(2024).unwrap();
/// assert!(year.contains_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
/// ```
///
/// Deserialization reads only `year` and `month` and resolves the bounds
/// through [`ReportPeriod::new`]; serialized bounds are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodKey")]
pub struct ReportPeriod {
    /// The calendar year.
    pub year: i32,
    /// The month (1-12), or `None` for a whole-year period.
    pub month: Option<u32>,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

/// The identifying part of a period as it arrives over the wire.
#[derive(Deserialize)]
struct PeriodKey {
    year: i32,
    #[serde(default)]
    month: Option<u32>,
}

impl TryFrom<PeriodKey> for ReportPeriod {
    type Error = EngineError;

    fn try_from(key: PeriodKey) -> EngineResult<Self> {
        ReportPeriod::new(key.year, key.month)
    }
}

impl ReportPeriod {
    /// Creates a period covering one calendar month.
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `month` is not in 1-12 or the
    /// year is outside the supported date range.
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriod {
            year,
            month: Some(month),
        };

        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let end_date = start_date
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month: Some(month),
            start_date,
            end_date,
        })
    }

    /// Creates a period covering one calendar year.
    pub fn year(year: i32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriod { year, month: None };

        let start_date = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let end_date = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;

        Ok(Self {
            year,
            month: None,
            start_date,
            end_date,
        })
    }

    /// Creates a month period when `month` is given, otherwise a year period.
    pub fn new(year: i32, month: Option<u32>) -> EngineResult<Self> {
        match month {
            Some(month) => Self::month(year, month),
            None => Self::year(year),
        }
    }

    /// Checks if a date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the period begins strictly after `today`.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.start_date > today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds_for_31_day_month() {
        let period = ReportPeriod::month(2024, 3).unwrap();
        assert_eq!(period.start_date, date(2024, 3, 1));
        assert_eq!(period.end_date, date(2024, 3, 31));
        assert_eq!(period.month, Some(3));
    }

    #[test]
    fn test_month_bounds_for_leap_february() {
        let period = ReportPeriod::month(2024, 2).unwrap();
        assert_eq!(period.end_date, date(2024, 2, 29));
    }

    #[test]
    fn test_month_bounds_for_december() {
        let period = ReportPeriod::month(2023, 12).unwrap();
        assert_eq!(period.end_date, date(2023, 12, 31));
    }

    #[test]
    fn test_month_zero_is_invalid() {
        let result = ReportPeriod::month(2024, 0);
        match result {
            Err(EngineError::InvalidPeriod { year, month }) => {
                assert_eq!(year, 2024);
                assert_eq!(month, Some(0));
            }
            _ => panic!("Expected InvalidPeriod error"),
        }
    }

    #[test]
    fn test_month_thirteen_is_invalid() {
        assert!(ReportPeriod::month(2024, 13).is_err());
    }

    #[test]
    fn test_year_bounds() {
        let period = ReportPeriod::year(2025).unwrap();
        assert_eq!(period.start_date, date(2025, 1, 1));
        assert_eq!(period.end_date, date(2025, 12, 31));
        assert!(period.month.is_none());
    }

    #[test]
    fn test_new_dispatches_on_month() {
        assert_eq!(
            ReportPeriod::new(2024, Some(6)).unwrap(),
            ReportPeriod::month(2024, 6).unwrap()
        );
        assert_eq!(
            ReportPeriod::new(2024, None).unwrap(),
            ReportPeriod::year(2024).unwrap()
        );
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period = ReportPeriod::month(2024, 3).unwrap();
        assert!(period.contains_date(date(2024, 3, 1)));
        assert!(period.contains_date(date(2024, 3, 31)));
        assert!(!period.contains_date(date(2024, 2, 29)));
        assert!(!period.contains_date(date(2024, 4, 1)));
    }

    #[test]
    fn test_is_future() {
        let period = ReportPeriod::month(2024, 4).unwrap();
        assert!(period.is_future(date(2024, 3, 31)));
        assert!(!period.is_future(date(2024, 4, 1)));
    }

    #[test]
    fn test_deserialize_resolves_bounds_from_year_and_month() {
        let json = r#"{
            "year": 2024,
            "month": 2,
            "start_date": "2030-01-01",
            "end_date": "2020-01-01"
        }"#;
        let period: ReportPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, ReportPeriod::month(2024, 2).unwrap());
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_deserialize_without_month_is_a_year() {
        let period: ReportPeriod = serde_json::from_str(r#"{"year": 2023}"#).unwrap();
        assert_eq!(period, ReportPeriod::year(2023).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_invalid_month() {
        let result: Result<ReportPeriod, _> = serde_json::from_str(r#"{"year": 2024, "month": 13}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid report period"));
    }
}

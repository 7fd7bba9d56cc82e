//! Core data models for the staff ledger.
//!
//! This module contains the stored entities consumed by the calculations and
//! the derived report types they produce.

mod attendance;
mod currency;
mod employee;
mod finance;
mod report_period;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus, CalendarDay, SmartAttendanceReport};
pub use currency::{Currency, CurrencyRate};
pub use employee::Employee;
pub use finance::{AdRevenueEntry, ConsultantContract, CostEntry, CostType, IapRevenueEntry};
pub use report_period::ReportPeriod;
pub use summary::{
    DeductionResult, ExpenseBreakdown, IncomeBreakdown, MonthData, MonthlySummary, Outcome,
    SalaryLine, VatSummary,
};

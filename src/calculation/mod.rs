//! Calculation logic for the staff ledger.
//!
//! This module contains the pure computation core: currency conversion with a
//! USD pivot, weekday counting and per-day smart defaults, the smart attendance
//! report, sick-leave salary deduction, VAT, and the monthly income/expense
//! rollup with its month-over-month series. None of these functions perform
//! I/O; "today" is always passed in.

mod aggregation;
mod currency;
mod salary;
mod smart_report;
mod vat;
mod weekday;

pub use aggregation::{
    MAX_SERIES_MONTHS, MonthLedger, aggregate_month, cost_applies_to_month, month_index,
    monthly_series, shift_month,
};
pub use currency::{amount_from_f64, convert, convert_f64};
pub use salary::compute_deduction;
pub use smart_report::compute_smart_report;
pub use vat::{VAT_DUE_DAY, VAT_DUE_DAY_EXTENDED, vat_amount, vat_due_date};
pub use weekday::{
    count_weekdays, count_weekdays_between, day_status, is_workday, month_calendar, parse_date,
};

//! VAT on consultancy invoices.
//!
//! VAT is reported monthly. The declaration for a month is due on the 12th of
//! the second following month, moved to the 17th when that falls in January or
//! August.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ConsultantContract;

/// Day of month VAT normally falls due.
pub const VAT_DUE_DAY: u32 = 12;

/// Day of month VAT falls due in January and August.
pub const VAT_DUE_DAY_EXTENDED: u32 = 17;

/// Returns the VAT charged on one month of a contract's fee, in the contract
/// currency.
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::vat_amount;
/// use staff_ledger::models::{ConsultantContract, Currency};
/// use rust_decimal::Decimal;
///
/// let contract = ConsultantContract {
///     id: "con_001".to_string(),
///     client_name: "Nordvik AB".to_string(),
///     monthly_fee: Decimal::new(80000, 0),
///     currency: Currency::Sek,
///     is_active: true,
///     vat_rate: Decimal::new(25, 0),
///     employee_ids: vec![],
/// };
/// assert_eq!(vat_amount(&contract).unwrap(), Decimal::new(20000, 0));
/// ```
///
/// Returns `AmountOverflow` if the fee times the rate leaves the Decimal range.
pub fn vat_amount(contract: &ConsultantContract) -> EngineResult<Decimal> {
    contract
        .monthly_fee
        .checked_mul(contract.vat_rate)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| EngineError::AmountOverflow {
            operation: format!("VAT for contract {}", contract.id),
        })
}

/// Returns the date VAT for `(year, month)` must be declared and paid.
pub fn vat_due_date(year: i32, month: u32) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidPeriod {
        year,
        month: Some(month),
    };

    let due_month = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(2)))
        .ok_or_else(invalid)?;

    let day = match due_month.month() {
        1 | 8 => VAT_DUE_DAY_EXTENDED,
        _ => VAT_DUE_DAY,
    };

    due_month.with_day(day).ok_or_else(invalid)
}

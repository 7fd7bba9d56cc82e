//! Salary deduction for sick leave.
//!
//! Only sick days reduce pay. Vacation is paid leave and appears in neither the
//! numerator nor the denominator of the pro-rata ratio.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionResult, SmartAttendanceReport};

/// Pro-rates a salary for the sick days in an attendance report.
///
/// `adjusted = base * (workdays - sick) / workdays`. A report with no workdays
/// leaves the salary untouched. Sick days beyond the number of workdays (for
/// example sick days recorded on weekends) are capped at `workdays`, so the
/// adjusted salary never goes below zero.
///
/// Returns `AmountOverflow` if the pro-rata product leaves the Decimal range.
///
/// `base_salary` must already be in the currency the result is wanted in.
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::compute_deduction;
/// use staff_ledger::models::SmartAttendanceReport;
/// use rust_decimal::Decimal;
///
/// let report = SmartAttendanceReport::from_counts(20, 5, 0);
/// let result = compute_deduction(Decimal::new(4000, 0), &report).unwrap();
/// assert_eq!(result.adjusted_salary, Decimal::new(3000, 0));
/// assert_eq!(result.deduction_amount, Decimal::new(1000, 0));
/// ```
pub fn compute_deduction(
    base_salary: Decimal,
    report: &SmartAttendanceReport,
) -> EngineResult<DeductionResult> {
    let workdays = report.workdays;
    let sick_days = report.sick;

    if workdays == 0 || sick_days == 0 {
        return Ok(DeductionResult {
            base_salary,
            adjusted_salary: base_salary,
            deduction_amount: Decimal::ZERO,
            sick_days,
            workdays,
        });
    }

    let paid_days = Decimal::from(workdays - sick_days.min(workdays));
    let overflow = || EngineError::AmountOverflow {
        operation: "salary deduction".to_string(),
    };

    let adjusted_salary = base_salary
        .checked_mul(paid_days)
        .and_then(|scaled| scaled.checked_div(Decimal::from(workdays)))
        .ok_or_else(overflow)?;
    let deduction_amount = base_salary
        .checked_sub(adjusted_salary)
        .ok_or_else(overflow)?;

    Ok(DeductionResult {
        base_salary,
        adjusted_salary,
        deduction_amount,
        sick_days,
        workdays,
    })
}

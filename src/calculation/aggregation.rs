//! Monthly income and expense rollup.
//!
//! Everything is converted into a single display currency before summing.
//! Each month is computed from its own inputs; nothing is carried between
//! months of a series.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdRevenueEntry, ConsultantContract, CostEntry, CostType, Currency, CurrencyRate, Employee,
    ExpenseBreakdown, IapRevenueEntry, IncomeBreakdown, MonthData, MonthlySummary, Outcome,
    SalaryLine, SmartAttendanceReport, VatSummary,
};

use super::currency::convert;
use super::salary::compute_deduction;
use super::vat::{vat_amount, vat_due_date};

/// Longest series `monthly_series` computes in one call: ten years.
pub const MAX_SERIES_MONTHS: u32 = 120;

/// Borrowed view of the ledgers a monthly rollup reads.
#[derive(Debug, Clone, Copy)]
pub struct MonthLedger<'a> {
    /// All employees on the payroll.
    pub employees: &'a [Employee],
    /// Consultant contracts; only active ones bill.
    pub contracts: &'a [ConsultantContract],
    /// Advertising revenue entries.
    pub ad_revenue: &'a [AdRevenueEntry],
    /// In-app-purchase revenue entries.
    pub iap_revenue: &'a [IapRevenueEntry],
    /// One-time and recurring costs.
    pub costs: &'a [CostEntry],
}

/// Returns a linear month index, so month ordering reduces to integer ordering.
pub fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}

/// Moves `(year, month)` by `delta` months.
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::shift_month;
///
/// assert_eq!(shift_month(2024, 1, -1), (2023, 12));
/// assert_eq!(shift_month(2024, 11, 3), (2025, 2));
/// ```
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let zero_based = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let shifted_year = zero_based.div_euclid(12) as i32;
    let shifted_month = zero_based.rem_euclid(12) as u32 + 1;
    (shifted_year, shifted_month)
}

/// Returns true if `cost` is charged in `(year, month)`.
///
/// One-time costs apply only to their own month. Recurring costs apply to every
/// month from their start month onward while `is_active` holds; there is no
/// end month.
pub fn cost_applies_to_month(cost: &CostEntry, year: i32, month: u32) -> bool {
    match cost.cost_type {
        CostType::OneTime => cost.year == year && cost.month == month,
        CostType::Recurring => {
            cost.is_active && month_index(cost.year, cost.month) <= month_index(year, month)
        }
    }
}

/// Rolls up income, expenses and VAT for one month.
///
/// # Arguments
///
/// * `year`, `month` - The month to aggregate
/// * `ledger` - Employees and revenue/cost ledgers
/// * `reports` - Attendance reports for the month keyed by employee id; an
///   employee without a report is charged their full salary
/// * `display_currency` - The currency of every amount in the result
/// * `rates` - Exchange rates; missing pairs leave amounts unconverted
///
/// Income is active consultant fees, the first ad-revenue entry for the month
/// and all in-app-purchase entries for the month. Expenses are each employee's
/// sick-adjusted salary plus all costs applying to the month.
pub fn aggregate_month(
    year: i32,
    month: u32,
    ledger: &MonthLedger<'_>,
    reports: &HashMap<String, SmartAttendanceReport>,
    display_currency: Currency,
    rates: &[CurrencyRate],
) -> EngineResult<MonthlySummary> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidPeriod {
            year,
            month: Some(month),
        });
    }

    let to_display = |amount: Decimal, currency: Currency| {
        convert(amount, currency, display_currency, rates)
    };

    let active_contracts = ledger.contracts.iter().filter(|c| c.is_active);

    let consulting = checked_total(
        active_contracts
            .clone()
            .map(|c| to_display(c.monthly_fee, c.currency)),
        "consulting income",
    )?;

    let ad_revenue = ledger
        .ad_revenue
        .iter()
        .find(|e| e.is_for(year, month))
        .map(|e| to_display(e.amount, e.currency))
        .unwrap_or(Decimal::ZERO);

    let iap_revenue = checked_total(
        ledger
            .iap_revenue
            .iter()
            .filter(|e| e.is_for(year, month))
            .map(|e| to_display(e.amount, e.currency)),
        "in-app-purchase income",
    )?;

    let income = IncomeBreakdown {
        consulting,
        ad_revenue,
        iap_revenue,
        total: checked_total([consulting, ad_revenue, iap_revenue], "total income")?,
    };

    let salary_lines = ledger
        .employees
        .iter()
        .map(|employee| {
            let base_salary = to_display(employee.salary, employee.currency);
            let report = reports.get(&employee.id).copied().unwrap_or_else(|| {
                debug!(
                    employee_id = %employee.id,
                    year,
                    month,
                    "No attendance report, charging full salary"
                );
                SmartAttendanceReport::default()
            });
            Ok(SalaryLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                deduction: compute_deduction(base_salary, &report)?,
            })
        })
        .collect::<EngineResult<Vec<SalaryLine>>>()?;

    let salaries = checked_total(
        salary_lines
            .iter()
            .map(|line| line.deduction.adjusted_salary),
        "salary expenses",
    )?;

    let costs = checked_total(
        ledger
            .costs
            .iter()
            .filter(|cost| cost_applies_to_month(cost, year, month))
            .map(|cost| to_display(cost.amount, cost.currency)),
        "cost expenses",
    )?;

    let expenses = ExpenseBreakdown {
        salaries,
        costs,
        total: checked_total([salaries, costs], "total expenses")?,
        salary_lines,
    };

    let vat_amounts = active_contracts
        .map(|c| Ok(to_display(vat_amount(c)?, c.currency)))
        .collect::<EngineResult<Vec<Decimal>>>()?;
    let vat = VatSummary {
        amount: checked_total(vat_amounts, "VAT")?,
        due_date: vat_due_date(year, month)?,
    };

    let net = income
        .total
        .checked_sub(expenses.total)
        .ok_or_else(|| EngineError::AmountOverflow {
            operation: "net result".to_string(),
        })?;

    debug!(
        year,
        month,
        income = %income.total,
        expenses = %expenses.total,
        net = %net,
        "Aggregated month"
    );

    Ok(MonthlySummary {
        year,
        month,
        currency: display_currency,
        income,
        expenses,
        net,
        outcome: Outcome::from_net(net),
        vat,
    })
}

/// Sums amounts, reporting `AmountOverflow` instead of panicking.
fn checked_total<I>(amounts: I, operation: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or_else(|| EngineError::AmountOverflow {
            operation: operation.to_string(),
        })
}

/// Builds a month-over-month series of `months_back` points ending at the
/// anchor month, oldest first.
///
/// `reports_for` is called once per month to supply that month's attendance
/// reports, so each point reflects only its own month. More than
/// [`MAX_SERIES_MONTHS`] points is `SeriesTooLong`.
pub fn monthly_series<F>(
    anchor_year: i32,
    anchor_month: u32,
    months_back: u32,
    ledger: &MonthLedger<'_>,
    display_currency: Currency,
    rates: &[CurrencyRate],
    mut reports_for: F,
) -> EngineResult<Vec<MonthData>>
where
    F: FnMut(i32, u32) -> EngineResult<HashMap<String, SmartAttendanceReport>>,
{
    if months_back > MAX_SERIES_MONTHS {
        return Err(EngineError::SeriesTooLong {
            requested: months_back,
            max: MAX_SERIES_MONTHS,
        });
    }
    if !(1..=12).contains(&anchor_month) {
        return Err(EngineError::InvalidPeriod {
            year: anchor_year,
            month: Some(anchor_month),
        });
    }

    let mut series = Vec::new();
    for offset in (0..months_back).rev() {
        let back = i32::try_from(offset).map_err(|_| EngineError::SeriesTooLong {
            requested: months_back,
            max: MAX_SERIES_MONTHS,
        })?;
        let (year, month) = shift_month(anchor_year, anchor_month, -back);
        let reports = reports_for(year, month)?;
        let summary = aggregate_month(year, month, ledger, &reports, display_currency, rates)?;
        series.push(MonthData::from(&summary));
    }

    Ok(series)
}

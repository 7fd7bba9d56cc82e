//! Derived report models.
//!
//! This module contains the outputs of the salary and monthly rollup
//! calculations: [`DeductionResult`], [`MonthlySummary`] and the per-month
//! [`MonthData`] points used for charting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// The result of pro-rating a salary for sick leave.
///
/// # Example
///
/// ```
/// use staff_ledger::models::DeductionResult;
/// use rust_decimal::Decimal;
///
/// let result = DeductionResult {
///     base_salary: Decimal::new(4000, 0),
///     adjusted_salary: Decimal::new(3000, 0),
///     deduction_amount: Decimal::new(1000, 0),
///     sick_days: 5,
///     workdays: 20,
/// };
/// assert!(result.has_deduction());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Salary before deduction.
    pub base_salary: Decimal,
    /// Salary after deducting sick days.
    pub adjusted_salary: Decimal,
    /// `base_salary - adjusted_salary`.
    pub deduction_amount: Decimal,
    /// Sick days the deduction was based on.
    pub sick_days: u32,
    /// Workdays the deduction was based on.
    pub workdays: u32,
}

impl DeductionResult {
    /// Returns true if any amount was deducted.
    pub fn has_deduction(&self) -> bool {
        !self.deduction_amount.is_zero()
    }
}

/// One employee's salary expense for a month, in the display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryLine {
    /// The employee this line belongs to.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// The pro-rated salary.
    pub deduction: DeductionResult,
}

/// Income for a month, in the display currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Fees from active consultant contracts.
    pub consulting: Decimal,
    /// Advertising revenue.
    pub ad_revenue: Decimal,
    /// In-app-purchase revenue across all platforms.
    pub iap_revenue: Decimal,
    /// Sum of all income sources.
    pub total: Decimal,
}

/// Expenses for a month, in the display currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Adjusted salaries of all employees.
    pub salaries: Decimal,
    /// One-time and recurring costs applying to the month.
    pub costs: Decimal,
    /// Sum of salaries and costs.
    pub total: Decimal,
    /// Per-employee salary detail.
    pub salary_lines: Vec<SalaryLine>,
}

/// Whether a month made money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Income exceeded expenses.
    Profit,
    /// Expenses exceeded income.
    Loss,
    /// Income equalled expenses.
    BreakEven,
}

impl Outcome {
    /// Classifies a net amount by its sign.
    pub fn from_net(net: Decimal) -> Self {
        if net > Decimal::ZERO {
            Outcome::Profit
        } else if net < Decimal::ZERO {
            Outcome::Loss
        } else {
            Outcome::BreakEven
        }
    }
}

/// VAT collected on consultancy invoices for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatSummary {
    /// VAT owed, in the display currency.
    pub amount: Decimal,
    /// The date the VAT declaration and payment are due.
    pub due_date: NaiveDate,
}

/// Income versus expenses for a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// The currency all amounts are expressed in.
    pub currency: Currency,
    /// Income breakdown.
    pub income: IncomeBreakdown,
    /// Expense breakdown.
    pub expenses: ExpenseBreakdown,
    /// `income.total - expenses.total`.
    pub net: Decimal,
    /// Sign of `net`.
    pub outcome: Outcome,
    /// VAT owed for the month; not part of income or net.
    pub vat: VatSummary,
}

/// A point in a month-over-month series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthData {
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Chart label in `YYYY-MM` form.
    pub label: String,
    /// Total income.
    pub income: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
    /// Income minus expenses.
    pub net: Decimal,
}

impl From<&MonthlySummary> for MonthData {
    fn from(summary: &MonthlySummary) -> Self {
        MonthData {
            year: summary.year,
            month: summary.month,
            label: format!("{:04}-{:02}", summary.year, summary.month),
            income: summary.income.total,
            expenses: summary.expenses.total,
            net: summary.net,
        }
    }
}

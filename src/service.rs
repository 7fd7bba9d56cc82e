//! Report service wiring a [`DataSource`] into the calculations.
//!
//! Each method fetches what it needs from the collaborator and hands the
//! results to the pure functions in [`crate::calculation`]. Nothing is cached
//! between calls.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::calculation::{
    MonthLedger, aggregate_month, compute_deduction, compute_smart_report, convert, month_calendar,
    monthly_series,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdRevenueEntry, CalendarDay, ConsultantContract, CostEntry, Currency, CurrencyRate,
    DeductionResult, Employee, IapRevenueEntry, MonthData, MonthlySummary, ReportPeriod,
    SmartAttendanceReport,
};
use crate::source::DataSource;

/// Computes attendance, salary and finance reports from a data source.
#[derive(Debug, Clone)]
pub struct ReportService<S> {
    source: S,
    display_currency: Currency,
    fallback_rates: Vec<CurrencyRate>,
}

/// The finance ledgers fetched once per rollup.
struct Ledgers {
    employees: Vec<Employee>,
    contracts: Vec<ConsultantContract>,
    ad_revenue: Vec<AdRevenueEntry>,
    iap_revenue: Vec<IapRevenueEntry>,
    costs: Vec<CostEntry>,
}

impl Ledgers {
    fn as_month_ledger(&self) -> MonthLedger<'_> {
        MonthLedger {
            employees: &self.employees,
            contracts: &self.contracts,
            ad_revenue: &self.ad_revenue,
            iap_revenue: &self.iap_revenue,
            costs: &self.costs,
        }
    }
}

impl<S: DataSource> ReportService<S> {
    /// Creates a service reporting in `display_currency`.
    ///
    /// `fallback_rates` is used whenever the source holds no exchange rates.
    pub fn new(source: S, display_currency: Currency, fallback_rates: Vec<CurrencyRate>) -> Self {
        Self {
            source,
            display_currency,
            fallback_rates,
        }
    }

    /// Returns the underlying data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the currency reports are expressed in.
    pub fn display_currency(&self) -> Currency {
        self.display_currency
    }

    /// Returns the rate table in effect: the source's table, or the fallback
    /// table when the source has none.
    pub fn rates(&self) -> EngineResult<Vec<CurrencyRate>> {
        let rates = self.source.list_currency_rates()?;
        if rates.is_empty() {
            debug!("Source has no exchange rates, using fallback table");
            return Ok(self.fallback_rates.clone());
        }
        Ok(rates)
    }

    /// Computes one employee's attendance report for a period.
    pub fn smart_report(
        &self,
        employee_id: &str,
        period: &ReportPeriod,
        today: NaiveDate,
    ) -> EngineResult<SmartAttendanceReport> {
        let exceptions = self.source.list_attendance_exceptions(
            employee_id,
            period.start_date,
            period.end_date,
        )?;
        Ok(compute_smart_report(employee_id, period, &exceptions, today))
    }

    /// Lists every day of a period with its effective attendance status.
    pub fn calendar(
        &self,
        employee_id: &str,
        period: &ReportPeriod,
        today: NaiveDate,
    ) -> EngineResult<Vec<CalendarDay>> {
        let exceptions = self.source.list_attendance_exceptions(
            employee_id,
            period.start_date,
            period.end_date,
        )?;
        Ok(month_calendar(employee_id, period, &exceptions, today))
    }

    /// Computes one employee's sick-adjusted salary for a month, in the
    /// display currency.
    pub fn employee_salary(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> EngineResult<DeductionResult> {
        let employee = self
            .source
            .list_employees()?
            .into_iter()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let rates = self.rates()?;
        let base_salary = convert(employee.salary, employee.currency, self.display_currency, &rates);
        let period = ReportPeriod::month(year, month)?;
        let report = self.smart_report(employee_id, &period, today)?;

        compute_deduction(base_salary, &report)
    }

    /// Rolls up income and expenses for one month.
    pub fn month_summary(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> EngineResult<MonthlySummary> {
        let ledgers = self.load_ledgers(Some(year))?;
        let rates = self.rates()?;
        let reports = self.reports_for_month(&ledgers.employees, year, month, today)?;

        let summary = aggregate_month(
            year,
            month,
            &ledgers.as_month_ledger(),
            &reports,
            self.display_currency,
            &rates,
        )?;

        info!(
            year,
            month,
            employees = ledgers.employees.len(),
            net = %summary.net,
            "Computed monthly summary"
        );
        Ok(summary)
    }

    /// Builds a series of `months_back` monthly points ending at today's month.
    pub fn series(&self, months_back: u32, today: NaiveDate) -> EngineResult<Vec<MonthData>> {
        let ledgers = self.load_ledgers(None)?;
        let rates = self.rates()?;

        monthly_series(
            today.year(),
            today.month(),
            months_back,
            &ledgers.as_month_ledger(),
            self.display_currency,
            &rates,
            |year, month| self.reports_for_month(&ledgers.employees, year, month, today),
        )
    }

    fn reports_for_month(
        &self,
        employees: &[Employee],
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> EngineResult<HashMap<String, SmartAttendanceReport>> {
        let period = ReportPeriod::month(year, month)?;
        employees
            .iter()
            .map(|e| Ok((e.id.clone(), self.smart_report(&e.id, &period, today)?)))
            .collect()
    }

    fn load_ledgers(&self, year: Option<i32>) -> EngineResult<Ledgers> {
        Ok(Ledgers {
            employees: self.source.list_employees()?,
            contracts: self.source.list_consultant_contracts()?,
            ad_revenue: self.source.list_ad_revenue(year)?,
            iap_revenue: self.source.list_iap_revenue(year)?,
            costs: self.source.list_costs()?,
        })
    }
}

//! The persistence collaborator boundary.
//!
//! The calculations never fetch data themselves. Whatever stores employees,
//! attendance and the finance ledgers implements [`DataSource`];
//! [`InMemorySource`] is the implementation backed by plain vectors, used for
//! request snapshots and tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    AdRevenueEntry, AttendanceRecord, ConsultantContract, CostEntry, CurrencyRate, Employee,
    IapRevenueEntry,
};

/// Read access to stored ledger data.
pub trait DataSource {
    /// Lists all employees.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Lists an employee's sick and vacation records dated within
    /// `start..=end`.
    fn list_attendance_exceptions(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Lists the current exchange-rate table.
    fn list_currency_rates(&self) -> EngineResult<Vec<CurrencyRate>>;

    /// Lists all consultant contracts.
    fn list_consultant_contracts(&self) -> EngineResult<Vec<ConsultantContract>>;

    /// Lists advertising revenue, optionally restricted to one year.
    fn list_ad_revenue(&self, year: Option<i32>) -> EngineResult<Vec<AdRevenueEntry>>;

    /// Lists in-app-purchase revenue, optionally restricted to one year.
    fn list_iap_revenue(&self, year: Option<i32>) -> EngineResult<Vec<IapRevenueEntry>>;

    /// Lists all costs.
    fn list_costs(&self) -> EngineResult<Vec<CostEntry>>;
}

/// A [`DataSource`] holding everything in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemorySource {
    /// Employees.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance records of all employees.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Exchange-rate table.
    #[serde(default)]
    pub rates: Vec<CurrencyRate>,
    /// Consultant contracts.
    #[serde(default)]
    pub contracts: Vec<ConsultantContract>,
    /// Advertising revenue.
    #[serde(default)]
    pub ad_revenue: Vec<AdRevenueEntry>,
    /// In-app-purchase revenue.
    #[serde(default)]
    pub iap_revenue: Vec<IapRevenueEntry>,
    /// Costs.
    #[serde(default)]
    pub costs: Vec<CostEntry>,
}

impl DataSource for InMemorySource {
    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn list_attendance_exceptions(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .attendance
            .iter()
            .filter(|r| {
                r.employee_id == employee_id && r.date >= start && r.date <= end && r.is_absence()
            })
            .cloned()
            .collect())
    }

    fn list_currency_rates(&self) -> EngineResult<Vec<CurrencyRate>> {
        Ok(self.rates.clone())
    }

    fn list_consultant_contracts(&self) -> EngineResult<Vec<ConsultantContract>> {
        Ok(self.contracts.clone())
    }

    fn list_ad_revenue(&self, year: Option<i32>) -> EngineResult<Vec<AdRevenueEntry>> {
        Ok(self
            .ad_revenue
            .iter()
            .filter(|e| year.is_none_or(|y| e.year == y))
            .cloned()
            .collect())
    }

    fn list_iap_revenue(&self, year: Option<i32>) -> EngineResult<Vec<IapRevenueEntry>> {
        Ok(self
            .iap_revenue
            .iter()
            .filter(|e| year.is_none_or(|y| e.year == y))
            .cloned()
            .collect())
    }

    fn list_costs(&self) -> EngineResult<Vec<CostEntry>> {
        Ok(self.costs.clone())
    }
}

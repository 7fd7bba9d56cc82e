//! Employee model.
//!
//! Employees are owned by the persistence collaborator; the ledger only reads
//! them to price salaries and to key attendance reports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text job title.
    #[serde(default)]
    pub position: String,
    /// Monthly base salary, expressed in `currency`.
    pub salary: Decimal,
    /// The currency the salary is paid in.
    pub currency: Currency,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
}

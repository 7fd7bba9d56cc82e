//! Revenue and cost ledgers.
//!
//! These are flat monetary records aggregated by the monthly rollup. They carry
//! no behavior beyond simple month matching.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// A consultancy agreement billed monthly to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantContract {
    /// Unique identifier for the contract.
    pub id: String,
    /// The billed client.
    pub client_name: String,
    /// Fee invoiced every month, excluding VAT.
    pub monthly_fee: Decimal,
    /// The currency the fee is invoiced in.
    pub currency: Currency,
    /// Inactive contracts contribute no income.
    pub is_active: bool,
    /// VAT percentage applied on top of the fee (e.g. 25 for 25%).
    #[serde(default)]
    pub vat_rate: Decimal,
    /// Employees staffed on this contract.
    #[serde(default)]
    pub employee_ids: Vec<String>,
}

/// Advertising revenue for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRevenueEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Revenue amount.
    pub amount: Decimal,
    /// Currency of `amount`.
    pub currency: Currency,
}

impl AdRevenueEntry {
    /// Returns true if this entry belongs to the given month.
    pub fn is_for(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

/// In-app-purchase revenue for one month on one store platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IapRevenueEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Store platform, e.g. "ios" or "android".
    pub platform: String,
    /// Revenue amount.
    pub amount: Decimal,
    /// Currency of `amount`.
    pub currency: Currency,
}

impl IapRevenueEntry {
    /// Returns true if this entry belongs to the given month.
    pub fn is_for(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

/// Whether a cost is charged once or every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    /// Charged only in its own month.
    OneTime,
    /// Charged every month from its start month while active.
    Recurring,
}

/// An operating cost.
///
/// For a one-time cost `(year, month)` is the month it is charged in; for a
/// recurring cost it is the first month it applies to. Recurring costs have no
/// end month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Unique identifier for the cost.
    pub id: String,
    /// Description of the cost.
    pub name: String,
    /// Amount charged per occurrence.
    pub amount: Decimal,
    /// Currency of `amount`.
    pub currency: Currency,
    /// One-time or recurring.
    pub cost_type: CostType,
    /// Charge year (one-time) or start year (recurring).
    pub year: i32,
    /// Charge month (one-time) or start month (recurring).
    pub month: u32,
    /// Deactivated recurring costs stop applying.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

//! Currency codes and exchange rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The currencies the ledger can hold amounts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// United States dollar.
    #[serde(rename = "USD")]
    Usd,
    /// Indonesian rupiah.
    #[serde(rename = "IDR")]
    Idr,
    /// Swedish krona.
    #[serde(rename = "SEK")]
    Sek,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Idr, Currency::Sek];

    /// Returns the ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Idr => "IDR",
            Currency::Sek => "SEK",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A directional exchange rate: one unit of `from_currency` buys `rate` units
/// of `to_currency`.
///
/// Rates are not assumed to be symmetric; `USD -> SEK` and `SEK -> USD` are
/// separate entries.
///
/// # Example
///
/// ```
/// use staff_ledger::models::{Currency, CurrencyRate};
/// use rust_decimal::Decimal;
///
/// let rate = CurrencyRate::new(Currency::Usd, Currency::Sek, Decimal::new(105, 1));
/// assert!(rate.matches(Currency::Usd, Currency::Sek));
/// assert!(!rate.matches(Currency::Sek, Currency::Usd));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Source currency.
    pub from_currency: Currency,
    /// Target currency.
    pub to_currency: Currency,
    /// Units of `to_currency` per unit of `from_currency`.
    pub rate: Decimal,
}

impl CurrencyRate {
    /// Creates a new rate entry.
    pub fn new(from_currency: Currency, to_currency: Currency, rate: Decimal) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
        }
    }

    /// Returns true if this entry converts `from` into `to`.
    pub fn matches(&self, from: Currency, to: Currency) -> bool {
        self.from_currency == from && self.to_currency == to
    }
}

//! Currency conversion over a directional rate table.
//!
//! Conversion never fails. When no rate path exists the amount is returned
//! unconverted and a warning is logged, so a sparse rate table degrades a
//! report instead of aborting it.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tracing::warn;

use crate::models::{Currency, CurrencyRate};

/// Converts `amount` from one currency to another.
///
/// Resolution order:
/// 1. `from == to` returns `amount` unchanged, even with an empty table.
/// 2. An empty rate table returns `amount` unchanged.
/// 3. A direct `from -> to` rate is multiplied in.
/// 4. Otherwise `from -> USD` followed by `USD -> to` is tried.
/// 5. Otherwise a warning is logged and `amount` is returned unconverted.
///
/// No rounding is applied.
///
/// # Example
///
/// ```
/// use staff_ledger::calculation::convert;
/// use staff_ledger::models::{Currency, CurrencyRate};
/// use rust_decimal::Decimal;
///
/// let rates = vec![
///     CurrencyRate::new(Currency::Sek, Currency::Usd, Decimal::new(95, 3)),
///     CurrencyRate::new(Currency::Usd, Currency::Idr, Decimal::new(15800, 0)),
/// ];
///
/// // No SEK -> IDR entry, so the amount pivots through USD.
/// let idr = convert(Decimal::new(100, 0), Currency::Sek, Currency::Idr, &rates);
/// assert_eq!(idr, Decimal::new(150100, 0));
/// ```
pub fn convert(amount: Decimal, from: Currency, to: Currency, rates: &[CurrencyRate]) -> Decimal {
    if from == to || rates.is_empty() {
        return amount;
    }

    if let Some(rate) = find_rate(rates, from, to) {
        if let Some(converted) = amount.checked_mul(rate) {
            return converted;
        }
    } else if let (Some(to_usd), Some(from_usd)) = (
        find_rate(rates, from, Currency::Usd),
        find_rate(rates, Currency::Usd, to),
    ) {
        if let Some(converted) = amount
            .checked_mul(to_usd)
            .and_then(|usd| usd.checked_mul(from_usd))
        {
            return converted;
        }
    }

    warn!(
        amount = %amount,
        from = %from,
        to = %to,
        "No usable exchange rate, returning amount unconverted"
    );
    amount
}

/// Converts a floating-point amount, mapping non-finite input to zero.
///
/// This is the entry point for callers holding raw `f64` values, such as
/// spreadsheet imports. NaN and infinities become `0.0` before any rate is
/// consulted.
pub fn convert_f64(amount: f64, from: Currency, to: Currency, rates: &[CurrencyRate]) -> f64 {
    if !amount.is_finite() {
        return 0.0;
    }
    let converted = convert(amount_from_f64(amount), from, to, rates);
    converted.to_f64().unwrap_or(0.0)
}

/// Converts an `f64` into a [`Decimal`], treating non-finite or unrepresentable
/// values as zero.
pub fn amount_from_f64(amount: f64) -> Decimal {
    if !amount.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(amount).unwrap_or(Decimal::ZERO)
}

fn find_rate(rates: &[CurrencyRate], from: Currency, to: Currency) -> Option<Decimal> {
    rates.iter().find(|r| r.matches(from, to)).map(|r| r.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn default_rates() -> Vec<CurrencyRate> {
        vec![
            CurrencyRate::new(Currency::Usd, Currency::Sek, dec("10.5")),
            CurrencyRate::new(Currency::Sek, Currency::Usd, dec("0.095")),
            CurrencyRate::new(Currency::Usd, Currency::Idr, dec("15800")),
            CurrencyRate::new(Currency::Idr, Currency::Usd, dec("0.0000633")),
        ]
    }

    #[test]
    fn test_same_currency_is_identity() {
        let rates = default_rates();
        for currency in Currency::ALL {
            assert_eq!(convert(dec("123.45"), currency, currency, &rates), dec("123.45"));
        }
    }

    #[test]
    fn test_same_currency_with_empty_table() {
        assert_eq!(
            convert(dec("99"), Currency::Idr, Currency::Idr, &[]),
            dec("99")
        );
    }

    #[test]
    fn test_empty_table_returns_amount() {
        assert_eq!(convert(dec("50"), Currency::Usd, Currency::Sek, &[]), dec("50"));
    }

    #[test]
    fn test_direct_rate() {
        let result = convert(dec("100"), Currency::Usd, Currency::Sek, &default_rates());
        assert_eq!(result, dec("1050"));
    }

    #[test]
    fn test_direct_rate_is_directional() {
        let result = convert(dec("100"), Currency::Sek, Currency::Usd, &default_rates());
        assert_eq!(result, dec("9.5"));
    }

    #[test]
    fn test_usd_pivot_when_direct_missing() {
        // SEK -> IDR has no direct entry
        let result = convert(dec("100"), Currency::Sek, Currency::Idr, &default_rates());
        assert_eq!(result, dec("100") * dec("0.095") * dec("15800"));
        assert_eq!(result, dec("150100"));
    }

    #[test]
    fn test_direct_rate_preferred_over_pivot() {
        let mut rates = default_rates();
        rates.push(CurrencyRate::new(Currency::Sek, Currency::Idr, dec("1500")));
        let result = convert(dec("2"), Currency::Sek, Currency::Idr, &rates);
        assert_eq!(result, dec("3000"));
    }

    #[test]
    fn test_missing_usd_leg_returns_amount_unconverted() {
        let rates = vec![CurrencyRate::new(Currency::Usd, Currency::Idr, dec("15800"))];
        let result = convert(dec("100"), Currency::Sek, Currency::Idr, &rates);
        assert_eq!(result, dec("100"));
    }

    #[test]
    fn test_overflow_returns_amount_unconverted() {
        let rates = vec![CurrencyRate::new(Currency::Usd, Currency::Idr, Decimal::MAX)];
        let result = convert(Decimal::MAX, Currency::Usd, Currency::Idr, &rates);
        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn test_convert_f64_non_finite_is_zero() {
        let rates = default_rates();
        assert_eq!(convert_f64(f64::NAN, Currency::Usd, Currency::Sek, &rates), 0.0);
        assert_eq!(
            convert_f64(f64::INFINITY, Currency::Usd, Currency::Sek, &rates),
            0.0
        );
        assert_eq!(
            convert_f64(f64::NEG_INFINITY, Currency::Usd, Currency::Usd, &rates),
            0.0
        );
    }

    #[test]
    fn test_convert_f64_direct_rate() {
        let result = convert_f64(100.0, Currency::Usd, Currency::Sek, &default_rates());
        assert!((result - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_amount_from_f64() {
        assert_eq!(amount_from_f64(2.5), dec("2.5"));
        assert_eq!(amount_from_f64(f64::NAN), Decimal::ZERO);
    }
}

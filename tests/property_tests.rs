//! Property tests for the pure calculations.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use staff_ledger::calculation::{
    compute_deduction, compute_smart_report, convert, count_weekdays, month_index, shift_month,
};
use staff_ledger::models::{
    AttendanceRecord, AttendanceStatus, Currency, CurrencyRate, ReportPeriod,
    SmartAttendanceReport,
};

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Usd), Just(Currency::Idr), Just(Currency::Sek)]
}

fn status() -> impl Strategy<Value = AttendanceStatus> {
    prop_oneof![
        Just(AttendanceStatus::Worked),
        Just(AttendanceStatus::Sick),
        Just(AttendanceStatus::Vacation),
    ]
}

fn rate_table() -> impl Strategy<Value = Vec<CurrencyRate>> {
    prop::collection::vec(
        (currency(), currency(), 1i64..1_000_000).prop_map(|(from, to, raw)| {
            CurrencyRate::new(from, to, Decimal::new(raw, 4))
        }),
        0..6,
    )
}

fn date_in(year: i32) -> impl Strategy<Value = NaiveDate> {
    (1u32..=12, 1u32..=28)
        .prop_map(move |(month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    #[test]
    fn convert_to_same_currency_is_identity(
        raw in -1_000_000_000i64..1_000_000_000,
        currency in currency(),
        rates in rate_table(),
    ) {
        let amount = Decimal::new(raw, 2);
        prop_assert_eq!(convert(amount, currency, currency, &rates), amount);
    }

    #[test]
    fn convert_pivots_through_usd(
        raw in 0i64..100_000_000,
        to_usd in 1i64..10_000,
        from_usd in 1i64..10_000_000,
    ) {
        let amount = Decimal::new(raw, 2);
        let sek_usd = Decimal::new(to_usd, 4);
        let usd_idr = Decimal::new(from_usd, 2);
        let rates = vec![
            CurrencyRate::new(Currency::Sek, Currency::Usd, sek_usd),
            CurrencyRate::new(Currency::Usd, Currency::Idr, usd_idr),
        ];

        prop_assert_eq!(
            convert(amount, Currency::Sek, Currency::Idr, &rates),
            amount * sek_usd * usd_idr
        );
    }

    #[test]
    fn any_seven_consecutive_days_hold_five_workdays(
        start in date_in(2024),
    ) {
        prop_assert_eq!(count_weekdays(start, start + Duration::days(6)), 5);
    }

    #[test]
    fn shift_month_moves_the_month_index(
        year in 1990i32..2100,
        month in 1u32..=12,
        delta in -600i32..600,
    ) {
        let (shifted_year, shifted_month) = shift_month(year, month, delta);
        prop_assert!((1..=12).contains(&shifted_month));
        prop_assert_eq!(
            month_index(shifted_year, shifted_month),
            month_index(year, month) + i64::from(delta)
        );
    }

    #[test]
    fn smart_report_counts_are_consistent(
        month in 1u32..=12,
        records in prop::collection::vec((date_in(2024), status()), 0..40),
        today in date_in(2024),
    ) {
        let period = ReportPeriod::month(2024, month).unwrap();
        let exceptions: Vec<AttendanceRecord> = records
            .into_iter()
            .map(|(date, status)| AttendanceRecord {
                employee_id: "emp_001".to_string(),
                date,
                status,
                notes: None,
            })
            .collect();

        let report = compute_smart_report("emp_001", &period, &exceptions, today);

        prop_assert!(report.worked <= report.workdays);
        if today < period.start_date {
            prop_assert_eq!(report, SmartAttendanceReport::default());
        } else {
            prop_assert_eq!(
                report.workdays,
                count_weekdays(period.start_date, period.end_date.min(today))
            );
            prop_assert_eq!(
                report.worked,
                report.workdays.saturating_sub(report.sick + report.vacation)
            );
        }
    }

    #[test]
    fn no_sick_days_means_no_deduction(
        raw in 0i64..100_000_000,
        workdays in 0u32..=23,
        vacation in 0u32..=23,
    ) {
        let base = Decimal::new(raw, 2);
        let report = SmartAttendanceReport::from_counts(workdays, 0, vacation);
        let result = compute_deduction(base, &report).unwrap();

        prop_assert_eq!(result.adjusted_salary, base);
        prop_assert_eq!(result.deduction_amount, Decimal::ZERO);
    }

    #[test]
    fn adjusted_salary_stays_between_zero_and_base(
        raw in 0i64..100_000_000,
        workdays in 1u32..=23,
        sick in 0u32..=40,
    ) {
        let base = Decimal::new(raw, 2);
        let report = SmartAttendanceReport::from_counts(workdays, sick, 0);
        let result = compute_deduction(base, &report).unwrap();

        prop_assert!(result.adjusted_salary >= Decimal::ZERO);
        prop_assert!(result.adjusted_salary <= base);
        if sick >= workdays {
            prop_assert_eq!(result.adjusted_salary, Decimal::ZERO);
        }
    }
}

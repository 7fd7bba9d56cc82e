//! Performance benchmarks for the staff ledger.
//!
//! Covers the hot paths of a dashboard refresh:
//! - Smart attendance report over a whole year
//! - Monthly rollup for a 50-person company
//! - Twelve-month series
//! - The same series through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use staff_ledger::api::{AppState, create_router};
use staff_ledger::calculation::compute_smart_report;
use staff_ledger::config::ConfigLoader;
use staff_ledger::models::{
    AttendanceRecord, AttendanceStatus, ConsultantContract, CostEntry, CostType, Currency,
    CurrencyRate, Employee, ReportPeriod,
};
use staff_ledger::service::ReportService;
use staff_ledger::source::InMemorySource;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Roughly one absence every nine days for each employee during 2024.
fn create_absences(employee_id: &str) -> Vec<AttendanceRecord> {
    (0..40)
        .map(|i| AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: date(2024, 1, 1) + Duration::days(i * 9),
            status: if i % 3 == 0 {
                AttendanceStatus::Vacation
            } else {
                AttendanceStatus::Sick
            },
            notes: None,
        })
        .collect()
}

/// Creates a company snapshot with `employee_count` employees.
fn create_source(employee_count: usize) -> InMemorySource {
    let employees: Vec<Employee> = (0..employee_count)
        .map(|i| Employee {
            id: format!("emp_{:03}", i),
            name: format!("Employee {}", i),
            position: "Developer".to_string(),
            salary: Decimal::new(3_000 + i as i64 * 10, 0),
            currency: if i % 2 == 0 { Currency::Usd } else { Currency::Idr },
            start_date: date(2023, 1, 1),
        })
        .collect();

    let attendance = employees
        .iter()
        .flat_map(|e| create_absences(&e.id))
        .collect();

    InMemorySource {
        employees,
        attendance,
        rates: vec![
            CurrencyRate::new(Currency::Usd, Currency::Sek, Decimal::new(105, 1)),
            CurrencyRate::new(Currency::Idr, Currency::Usd, Decimal::new(633, 7)),
        ],
        contracts: (0..5)
            .map(|i| ConsultantContract {
                id: format!("con_{}", i),
                client_name: format!("Client {}", i),
                monthly_fee: Decimal::new(80_000, 0),
                currency: Currency::Sek,
                is_active: i != 0,
                vat_rate: Decimal::new(25, 0),
                employee_ids: vec![],
            })
            .collect(),
        costs: (1..=12)
            .map(|month| CostEntry {
                id: format!("cost_{}", month),
                name: "Equipment".to_string(),
                amount: Decimal::new(1_500, 0),
                currency: Currency::Sek,
                cost_type: if month == 1 {
                    CostType::Recurring
                } else {
                    CostType::OneTime
                },
                year: 2024,
                month,
                is_active: true,
            })
            .collect(),
        ..InMemorySource::default()
    }
}

fn bench_smart_report_year(c: &mut Criterion) {
    let period = ReportPeriod::year(2024).unwrap();
    let exceptions = create_absences("emp_001");
    let today = date(2024, 12, 31);

    c.bench_function("smart_report_year", |b| {
        b.iter(|| {
            black_box(compute_smart_report(
                black_box("emp_001"),
                &period,
                &exceptions,
                today,
            ))
        })
    });
}

fn bench_month_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_summary");

    for employee_count in [10usize, 50] {
        let service = ReportService::new(create_source(employee_count), Currency::Sek, vec![]);
        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &service,
            |b, service| b.iter(|| black_box(service.month_summary(2024, 6, date(2024, 12, 31)))),
        );
    }

    group.finish();
}

fn bench_series_12_months(c: &mut Criterion) {
    let service = ReportService::new(create_source(50), Currency::Sek, vec![]);

    c.bench_function("series_12_months", |b| {
        b.iter(|| black_box(service.series(12, date(2024, 12, 15))))
    });
}

/// Benchmark: twelve-month series through the router, including JSON decode.
fn bench_series_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "months_back": 12,
        "today": "2024-12-15",
        "display_currency": "SEK",
        "data": create_source(20)
    })
    .to_string();

    c.bench_function("series_http_20_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/summary/series")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_smart_report_year,
    bench_month_summary,
    bench_series_12_months,
    bench_series_http
);
criterion_main!(benches);

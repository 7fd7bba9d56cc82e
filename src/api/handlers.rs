//! HTTP request handlers for the staff ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_deduction, compute_smart_report, convert, month_calendar};
use crate::error::EngineError;
use crate::models::ReportPeriod;
use crate::service::ReportService;

use super::request::{
    AttendanceReportRequest, CalendarRequest, ConvertRequest, ConvertResponse, DeductionRequest,
    MonthSummaryRequest, SeriesRequest, resolve_today,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(convert_handler))
        .route("/attendance/report", post(attendance_report_handler))
        .route("/attendance/calendar", post(calendar_handler))
        .route("/salary/deduction", post(deduction_handler))
        .route("/summary/month", post(month_summary_handler))
        .route("/summary/series", post(series_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /convert.
async fn convert_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rates = state.rates_or_default(request.rates);
    let amount = convert(request.amount, request.from, request.to, &rates);

    info!(
        correlation_id = %correlation_id,
        from = %request.from,
        to = %request.to,
        "Converted amount"
    );
    json_response(StatusCode::OK, ConvertResponse { amount })
}

/// Handler for POST /attendance/report.
///
/// Reports a month when `month` is given, otherwise the whole year.
async fn attendance_report_handler(
    payload: Result<Json<AttendanceReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let period = match ReportPeriod::new(request.year, request.month) {
        Ok(period) => period,
        Err(err) => return engine_error_response(err, correlation_id),
    };
    let today = resolve_today(request.today);
    let report = compute_smart_report(&request.employee_id, &period, &request.exceptions, today);

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        workdays = report.workdays,
        sick = report.sick,
        vacation = report.vacation,
        "Computed attendance report"
    );
    json_response(StatusCode::OK, report)
}

/// Handler for POST /attendance/calendar.
async fn calendar_handler(payload: Result<Json<CalendarRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let period = match ReportPeriod::month(request.year, request.month) {
        Ok(period) => period,
        Err(err) => return engine_error_response(err, correlation_id),
    };
    let today = resolve_today(request.today);
    let days = month_calendar(&request.employee_id, &period, &request.records, today);

    json_response(StatusCode::OK, days)
}

/// Handler for POST /salary/deduction.
async fn deduction_handler(payload: Result<Json<DeductionRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = match compute_deduction(request.base_salary, &request.report) {
        Ok(result) => result,
        Err(err) => return engine_error_response(err, correlation_id),
    };
    if result.has_deduction() {
        info!(
            correlation_id = %correlation_id,
            sick_days = result.sick_days,
            deduction = %result.deduction_amount,
            "Applied sick-day deduction"
        );
    }
    json_response(StatusCode::OK, result)
}

/// Handler for POST /summary/month.
async fn month_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let display = state.display_currency_or_default(request.display_currency);
    let service = ReportService::new(request.data, display, state.rates_or_default(None));
    let today = resolve_today(request.today);

    let start_time = Instant::now();
    match service.month_summary(request.year, request.month, today) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                duration_us = start_time.elapsed().as_micros(),
                "Monthly summary completed"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /summary/series.
async fn series_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeriesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing series request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let display = state.display_currency_or_default(request.display_currency);
    let service = ReportService::new(request.data, display, state.rates_or_default(None));
    let today = resolve_today(request.today);

    let start_time = Instant::now();
    match service.series(request.months_back, today) {
        Ok(series) => {
            info!(
                correlation_id = %correlation_id,
                points = series.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Series completed"
            );
            json_response(StatusCode::OK, series)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

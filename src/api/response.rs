//! Error bodies returned by the staff ledger API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `INVALID_PERIOD`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional hint for the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches a hint to the error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.details = Some(hint.into());
        self
    }

    /// A request body that parsed as JSON but lacks a required field.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A request body that is not valid JSON for the endpoint.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with its HTTP status.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code, hint) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                Some("Check the server's configuration directory"),
            ),
            EngineError::InvalidDate { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_DATE",
                Some("Dates use the YYYY-MM-DD format"),
            ),
            EngineError::InvalidPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_PERIOD",
                Some("Months must be between 1 and 12"),
            ),
            EngineError::SeriesTooLong { .. } => (
                StatusCode::BAD_REQUEST,
                "SERIES_TOO_LONG",
                Some("Request fewer months"),
            ),
            EngineError::AmountOverflow { .. } => (
                StatusCode::BAD_REQUEST,
                "AMOUNT_OVERFLOW",
                Some("Amounts are limited to 28 significant digits"),
            ),
            EngineError::EmployeeNotFound { .. } => {
                (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND", None)
            }
            EngineError::DataSource { .. } => (StatusCode::BAD_GATEWAY, "DATA_SOURCE_ERROR", None),
        };

        let api_error = ApiError::new(code, error.to_string());
        ApiErrorResponse {
            status,
            error: match hint {
                Some(hint) => api_error.with_hint(hint),
                None => api_error,
            },
        }
    }
}

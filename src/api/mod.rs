//! HTTP API module for the staff ledger.
//!
//! This module provides stateless REST endpoints over the attendance,
//! salary and finance calculations. Each request carries its own data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceReportRequest, CalendarRequest, ConvertRequest, ConvertResponse, DeductionRequest,
    MonthSummaryRequest, SeriesRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

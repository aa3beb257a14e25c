//! HTTP API module for the Payslip Engine.
//!
//! This module provides the REST endpoints for computing payslips, deriving
//! rates and summarizing attendance.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceSummaryRequest, PayslipRequest, RatesRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

//! HTTP request handlers for the Payslip Engine API.
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
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payslip_with_policy, derive_rates, summarize_attendance};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{DailyAttendance, PayPeriod, PayslipResult, RateInputs};

use super::request::{AttendanceSummaryRequest, PayslipRequest, RatesRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslip", post(payslip_handler))
        .route("/rates", post(rates_handler))
        .route("/attendance/summary", post(attendance_summary_handler))
        .with_state(state)
}

/// Handler for POST /payslip.
///
/// Accepts rate, attendance and deduction inputs and returns the itemized
/// payslip.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Some(period) = &request.pay_period {
        if let Err(error) = check_pay_period(period, correlation_id) {
            return ApiErrorResponse::bad_request(error).into_response();
        }
    }

    match build_payslip(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                gross_salary = %result.payslip.gross_salary(),
                net_pay = %result.payslip.net_pay(),
                warnings = result.payslip.audit_trace().warnings.len(),
                duration_us = result.duration_us,
                "Payslip computed successfully"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /rates.
///
/// Returns the daily and hourly rates derived from a monthly rate.
async fn rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RatesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rate: RateInputs = request.into();
    match derive_rates(&rate, state.config().rate_policy(), 1) {
        Ok(result) => json_ok(result.rates),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rate derivation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /attendance/summary.
///
/// Folds daily attendance records into period totals.
async fn attendance_summary_handler(
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Some(period) = &request.pay_period {
        if let Err(error) = check_records_in_period(period, &request.records, correlation_id) {
            return ApiErrorResponse::bad_request(error).into_response();
        }
    }

    match summarize_attendance(&request.records) {
        Ok(facts) => {
            info!(
                correlation_id = %correlation_id,
                records = request.records.len(),
                total_hours_worked = %facts.total_hours_worked,
                "Attendance summarized"
            );
            json_ok(facts)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Attendance summary failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Rejects a pay period whose end date is before its start date.
fn check_pay_period(period: &PayPeriod, correlation_id: Uuid) -> Result<(), ApiError> {
    if period.is_inverted() {
        warn!(
            correlation_id = %correlation_id,
            start_date = %period.start_date,
            end_date = %period.end_date,
            "Pay period ends before it starts"
        );
        return Err(ApiError::validation_error(
            "pay_period",
            "end_date must not be before start_date",
        ));
    }
    Ok(())
}

/// Rejects the first record dated outside the pay period.
fn check_records_in_period(
    period: &PayPeriod,
    records: &[DailyAttendance],
    correlation_id: Uuid,
) -> Result<(), ApiError> {
    check_pay_period(period, correlation_id)?;

    if let Some((i, record)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| !period.contains_date(record.date))
    {
        warn!(
            correlation_id = %correlation_id,
            date = %record.date,
            "Attendance record outside the pay period"
        );
        return Err(ApiError::validation_error(
            format!("records[{}].date", i),
            format!(
                "{} is outside the pay period {} to {}",
                record.date, period.start_date, period.end_date
            ),
        ));
    }
    Ok(())
}

/// Computes the payslip and wraps it in the response envelope.
fn build_payslip(request: &PayslipRequest, config: &ConfigLoader) -> EngineResult<PayslipResult> {
    let start_time = Instant::now();
    let policy = config.policy();

    let payslip = compute_payslip_with_policy(&request.inputs(), policy.rates())?;
    let lines = payslip.line_items(policy);

    Ok(PayslipResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id.clone(),
        pay_period: request.pay_period.clone(),
        currency: policy.currency().code.clone(),
        payslip,
        lines,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field path
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("invalid type: null") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn valid_request() -> &'static str {
        r#"{
            "employee_id": "emp_001",
            "rate": {"monthly_rate": "25000"},
            "attendance": {"total_hours_worked": "176"},
            "deductions": {"sss_employee_share": "500", "wisp": "50", "hdmf_employee_share": "100"}
        }"#
    }

    #[tokio::test]
    async fn test_valid_payslip_request_returns_200() {
        let (status, body) = post_json("/payslip", valid_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employee_id"], "emp_001");
        assert_eq!(body["currency"], "PHP");
        assert_eq!(body["payslip"]["basic_pay"], "21153.44");
        assert_eq!(body["payslip"]["net_pay"], "20503.44");
    }

    #[tokio::test]
    async fn test_content_type_is_json() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payslip")
                    .header("Content-Type", "application/json")
                    .body(Body::from(valid_request()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post_json("/payslip", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_rate_returns_validation_error() {
        let (status, body) =
            post_json("/payslip", r#"{"employee_id": "emp_001", "attendance": {}}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_negative_deduction_returns_validation_error() {
        let (status, body) = post_json(
            "/payslip",
            r#"{
                "employee_id": "emp_001",
                "rate": {"monthly_rate": "25000"},
                "attendance": {"total_hours_worked": "176"},
                "deductions": {"wisp": "-50"}
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"], "deductions.wisp");
    }

    #[tokio::test]
    async fn test_inverted_pay_period_returns_validation_error() {
        let (status, body) = post_json(
            "/payslip",
            r#"{
                "employee_id": "emp_001",
                "pay_period": {"start_date": "2026-03-31", "end_date": "2026-03-01"},
                "rate": {"monthly_rate": "25000"},
                "attendance": {}
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], "pay_period");
    }

    #[tokio::test]
    async fn test_rates_endpoint() {
        let (status, body) = post_json("/rates", r#"{"monthly_rate": "26000"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["daily_rate"], "1000.00");
        assert_eq!(body["hourly_rate"], "125.00");
    }

    #[tokio::test]
    async fn test_attendance_summary_endpoint() {
        let (status, body) = post_json(
            "/attendance/summary",
            r#"{"records": [
                {"date": "2026-03-02", "status": "present", "hours_worked": "8", "mins_late": 10},
                {"date": "2026-03-03", "status": "present", "hours_worked": "7.5"},
                {"date": "2026-03-04", "status": "absent"}
            ]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_hours_worked"], "15.5");
        assert_eq!(body["mins_late"], 10);
        assert_eq!(body["regular_days"], 2);
        assert_eq!(body["absent_days"], 1);
    }

    #[tokio::test]
    async fn test_attendance_summary_within_pay_period() {
        let (status, body) = post_json(
            "/attendance/summary",
            r#"{
                "pay_period": {"start_date": "2026-03-01", "end_date": "2026-03-15"},
                "records": [
                    {"date": "2026-03-01", "status": "present", "hours_worked": "8"},
                    {"date": "2026-03-15", "status": "present", "hours_worked": "8"}
                ]
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_hours_worked"], "16");
        assert_eq!(body["regular_days"], 2);
    }

    #[tokio::test]
    async fn test_attendance_record_outside_pay_period() {
        let (status, body) = post_json(
            "/attendance/summary",
            r#"{
                "pay_period": {"start_date": "2026-03-01", "end_date": "2026-03-15"},
                "records": [
                    {"date": "2026-03-02", "status": "present", "hours_worked": "8"},
                    {"date": "2026-03-16", "status": "present", "hours_worked": "8"}
                ]
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"], "records[1].date");
    }

    #[tokio::test]
    async fn test_attendance_summary_inverted_pay_period() {
        let (status, body) = post_json(
            "/attendance/summary",
            r#"{
                "pay_period": {"start_date": "2026-03-15", "end_date": "2026-03-01"},
                "records": []
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], "pay_period");
    }
}

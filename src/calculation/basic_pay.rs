//! Basic pay calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::arithmetic::{overflow, round2};
use super::validation::validate_non_negative;

/// The result of calculating basic pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BasicPayResult {
    /// Hours worked times the hourly rate, rounded to cents.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates basic pay as `round2(total_hours_worked × hourly_rate)`.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_basic_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_basic_pay(d("176"), d("120.19"), 1).unwrap();
/// assert_eq!(result.amount, d("21153.44"));
/// ```
pub fn calculate_basic_pay(
    total_hours_worked: Decimal,
    hourly_rate: Decimal,
    step_number: u32,
) -> EngineResult<BasicPayResult> {
    validate_non_negative("attendance.total_hours_worked", total_hours_worked)?;

    let amount = round2(
        total_hours_worked
            .checked_mul(hourly_rate)
            .ok_or_else(|| overflow("basic pay"))?,
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "basic_pay".to_string(),
        rule_name: "Basic Pay".to_string(),
        input: serde_json::json!({
            "total_hours_worked": total_hours_worked.normalize().to_string(),
            "hourly_rate": hourly_rate.to_string()
        }),
        output: serde_json::json!({
            "basic_pay": amount.to_string()
        }),
        reasoning: format!(
            "{} hours × {} = {}",
            total_hours_worked.normalize(),
            hourly_rate,
            amount
        ),
    };

    Ok(BasicPayResult { amount, audit_step })
}

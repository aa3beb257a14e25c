//! Input validation.
//!
//! Negative salary, hours or money inputs are rejected with a
//! [`EngineError::Validation`] naming the offending field. Absent fields have
//! already defaulted to zero by the time values reach this module.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::PayslipInputs;

/// Rejects a negative `value`, naming `field` in the error.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::validate_non_negative;
/// use rust_decimal::Decimal;
///
/// assert!(validate_non_negative("rate.monthly_rate", Decimal::ZERO).is_ok());
/// assert!(validate_non_negative("rate.monthly_rate", Decimal::NEGATIVE_ONE).is_err());
/// ```
pub fn validate_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::validation(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

/// Validates every monetary and hours field of a payslip input bundle.
///
/// Fields are checked in payslip order and the first failure is returned.
pub fn validate_inputs(inputs: &PayslipInputs) -> EngineResult<()> {
    validate_non_negative("rate.monthly_rate", inputs.rate.monthly_rate)?;
    validate_non_negative(
        "attendance.total_hours_worked",
        inputs.attendance.total_hours_worked,
    )?;

    for (name, value) in inputs.deductions.fields() {
        validate_non_negative(&format!("deductions.{}", name), value)?;
    }
    for (name, value) in inputs.earnings.fields() {
        validate_non_negative(&format!("earnings.{}", name), value)?;
    }
    if let Some(totals) = &inputs.statutory_totals {
        for (name, value) in totals.fields() {
            validate_non_negative(&format!("statutory_totals.{}", name), value)?;
        }
    }

    Ok(())
}

//! Rate derivation functionality.
//!
//! This module converts a monthly rate into daily and hourly rates using the
//! policy divisors, rounding to cents after each division.

use rust_decimal::Decimal;

use crate::config::RatePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DerivedRates, RateInputs};

use super::arithmetic::{overflow, round2};
use super::validation::validate_non_negative;

/// The result of deriving rates, including the rates and audit step.
#[derive(Debug, Clone)]
pub struct RateDerivationResult {
    /// The derived rates.
    pub rates: DerivedRates,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the daily and hourly rates from a monthly rate.
///
/// `daily_rate = round2(monthly_rate / working_days_per_month)` and
/// `hourly_rate = round2(daily_rate / hours_per_day)`. The hourly rate is
/// derived from the already-rounded daily rate, not from the monthly rate.
///
/// # Errors
///
/// - `Validation` if the monthly rate is negative
/// - `CalculationError` if a policy divisor is zero
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::derive_rates;
/// use payslip_engine::config::RatePolicy;
/// use payslip_engine::models::RateInputs;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = RateInputs::monthly(Decimal::from_str("25000").unwrap());
/// let result = derive_rates(&rate, &RatePolicy::default(), 1).unwrap();
///
/// assert_eq!(result.rates.daily_rate(), Decimal::from_str("961.54").unwrap());
/// assert_eq!(result.rates.hourly_rate(), Decimal::from_str("120.19").unwrap());
/// ```
pub fn derive_rates(
    rate: &RateInputs,
    policy: &RatePolicy,
    step_number: u32,
) -> EngineResult<RateDerivationResult> {
    validate_non_negative("rate.monthly_rate", rate.monthly_rate)?;

    let days = Decimal::from(policy.working_days_per_month);
    let hours = Decimal::from(policy.hours_per_day);
    if days.is_zero() || hours.is_zero() {
        return Err(EngineError::CalculationError {
            message: "rate policy divisors must be greater than zero".to_string(),
        });
    }

    let monthly_rate = rate.monthly_rate;
    let daily_rate = round2(
        monthly_rate
            .checked_div(days)
            .ok_or_else(|| overflow("daily rate"))?,
    );
    let hourly_rate = round2(
        daily_rate
            .checked_div(hours)
            .ok_or_else(|| overflow("hourly rate"))?,
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_derivation".to_string(),
        rule_name: "Rate Derivation".to_string(),
        input: serde_json::json!({
            "monthly_rate": monthly_rate.to_string(),
            "working_days_per_month": policy.working_days_per_month,
            "hours_per_day": policy.hours_per_day
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.to_string(),
            "hourly_rate": hourly_rate.to_string()
        }),
        reasoning: format!(
            "{} / {} days = {} per day; {} / {} hours = {} per hour",
            monthly_rate,
            policy.working_days_per_month,
            daily_rate,
            daily_rate,
            policy.hours_per_day,
            hourly_rate
        ),
    };

    Ok(RateDerivationResult {
        // Only the reported copy is rounded; the division above uses the rate as supplied
        rates: DerivedRates::new(round2(monthly_rate), daily_rate, hourly_rate),
        audit_step,
    })
}

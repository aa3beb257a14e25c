//! Late deduction calculation.
//!
//! Minutes late are converted to hours and withheld at the hourly rate.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::arithmetic::{overflow, round2};

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// The result of calculating the late deduction.
#[derive(Debug, Clone)]
pub struct LateDeductionResult {
    /// The amount withheld, rounded to cents.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the late deduction as `round2(mins_late × hourly_rate / 60)`.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_late_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_late_deduction(30, Decimal::from_str("125.00").unwrap(), 1).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("62.50").unwrap());
/// ```
pub fn calculate_late_deduction(
    mins_late: u32,
    hourly_rate: Decimal,
    step_number: u32,
) -> EngineResult<LateDeductionResult> {
    // Multiply before dividing so half-cent results stay exact
    let amount = round2(
        Decimal::from(mins_late)
            .checked_mul(hourly_rate)
            .and_then(|minute_cost| minute_cost.checked_div(Decimal::from(MINUTES_PER_HOUR)))
            .ok_or_else(|| overflow("late deduction"))?,
    );

    let reasoning = if mins_late == 0 {
        "No minutes late - no late deduction".to_string()
    } else {
        format!(
            "{} minutes / {} × {} = {}",
            mins_late, MINUTES_PER_HOUR, hourly_rate, amount
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_deduction".to_string(),
        rule_name: "Late Deduction".to_string(),
        input: serde_json::json!({
            "mins_late": mins_late,
            "hourly_rate": hourly_rate.to_string()
        }),
        output: serde_json::json!({
            "late_deduction": amount.to_string()
        }),
        reasoning,
    };

    Ok(LateDeductionResult { amount, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_hour_late() {
        let result = calculate_late_deduction(30, dec("125.00"), 1).unwrap();
        assert_eq!(result.amount, dec("62.50"));
        assert_eq!(result.audit_step.output["late_deduction"], "62.50");
    }

    #[test]
    fn test_scales_linearly_with_minutes() {
        let hourly = dec("125.00");
        let thirty = calculate_late_deduction(30, hourly, 1).unwrap().amount;
        let sixty = calculate_late_deduction(60, hourly, 1).unwrap().amount;
        let ninety = calculate_late_deduction(90, hourly, 1).unwrap().amount;

        assert_eq!(sixty, thirty * dec("2"));
        assert_eq!(ninety, thirty * dec("3"));
        assert_eq!(sixty, hourly);
    }

    #[test]
    fn test_uneven_minutes_round_to_cents() {
        // 45 / 60 × 120.19 = 90.1425 -> 90.14
        let result = calculate_late_deduction(45, dec("120.19"), 1).unwrap();
        assert_eq!(result.amount, dec("90.14"));

        // 7 / 60 × 120.19 = 14.0221.. -> 14.02
        let result = calculate_late_deduction(7, dec("120.19"), 1).unwrap();
        assert_eq!(result.amount, dec("14.02"));
    }

    #[test]
    fn test_exact_half_cent_rounds_up() {
        // 2 × 120.15 / 60 = 4.005 exactly
        let result = calculate_late_deduction(2, dec("120.15"), 1).unwrap();
        assert_eq!(result.amount, dec("4.01"));
    }

    #[test]
    fn test_no_minutes_late() {
        let result = calculate_late_deduction(0, dec("125.00"), 1).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.amount.to_string(), "0.00");
        assert!(result.audit_step.reasoning.contains("No minutes late"));
    }
}

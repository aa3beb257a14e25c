//! Gross salary calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, SupplementaryEarnings};

use super::arithmetic::{overflow, round2};

/// The result of calculating gross salary.
#[derive(Debug, Clone)]
pub struct GrossSalaryResult {
    /// Sum of the supplementary earnings, rounded to cents.
    pub supplementary_total: Decimal,
    /// Basic pay plus the supplementary total, rounded to cents.
    pub gross_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross salary as basic pay plus every supplementary earning.
///
/// With no supplementary earnings gross salary equals basic pay.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_gross_salary;
/// use payslip_engine::models::SupplementaryEarnings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let basic = Decimal::from_str("21153.44").unwrap();
/// let result = calculate_gross_salary(basic, &SupplementaryEarnings::default(), 1).unwrap();
/// assert_eq!(result.gross_salary, basic);
/// ```
pub fn calculate_gross_salary(
    basic_pay: Decimal,
    earnings: &SupplementaryEarnings,
    step_number: u32,
) -> EngineResult<GrossSalaryResult> {
    let supplementary_total = round2(
        earnings
            .sum()
            .ok_or_else(|| overflow("supplementary earnings"))?,
    );
    let gross_salary = round2(
        basic_pay
            .checked_add(supplementary_total)
            .ok_or_else(|| overflow("gross salary"))?,
    );

    let components: serde_json::Map<String, serde_json::Value> = earnings
        .fields()
        .iter()
        .filter(|(_, v)| !v.is_zero())
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();

    let reasoning = if earnings.is_empty() {
        format!("No supplementary earnings - gross salary equals basic pay {}", gross_salary)
    } else {
        format!(
            "{} basic pay + {} supplementary earnings = {}",
            basic_pay, supplementary_total, gross_salary
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        input: serde_json::json!({
            "basic_pay": basic_pay.to_string(),
            "supplementary": components
        }),
        output: serde_json::json!({
            "supplementary_total": supplementary_total.to_string(),
            "gross_salary": gross_salary.to_string()
        }),
        reasoning,
    };

    Ok(GrossSalaryResult {
        supplementary_total,
        gross_salary,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HolidayPay, OvertimePay};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_no_earnings_gross_equals_basic() {
        let result =
            calculate_gross_salary(dec("1000.00"), &SupplementaryEarnings::default(), 1).unwrap();
        assert_eq!(result.gross_salary, dec("1000.00"));
        assert_eq!(result.supplementary_total, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("equals basic pay"));
    }

    #[test]
    fn test_all_earnings_are_additive() {
        let earnings = SupplementaryEarnings {
            non_taxable_allowance: dec("1500"),
            performance_bonus: dec("2000"),
            overtime: OvertimePay {
                regular_day: dec("150.24"),
                rest_day: dec("195.31"),
                night_differential: dec("12.02"),
            },
            holiday: HolidayPay {
                regular_holiday: dec("961.54"),
                special_holiday: dec("288.46"),
            },
        };
        let result = calculate_gross_salary(dec("21153.44"), &earnings, 1).unwrap();

        assert_eq!(result.supplementary_total, dec("5107.57"));
        assert_eq!(result.gross_salary, dec("26261.01"));
        assert_eq!(result.audit_step.input["supplementary"]["performance_bonus"], "2000");
    }

    #[test]
    fn test_zero_components_left_out_of_audit_input() {
        let earnings = SupplementaryEarnings {
            performance_bonus: dec("500"),
            ..SupplementaryEarnings::default()
        };
        let result = calculate_gross_salary(dec("0.00"), &earnings, 1).unwrap();
        let supplementary = result.audit_step.input["supplementary"].as_object().unwrap();
        assert_eq!(supplementary.len(), 1);
        assert!(supplementary.contains_key("performance_bonus"));
    }
}

//! Net pay calculation.
//!
//! Net pay is not floored at zero. A negative result is kept as computed and
//! flagged with a `NEGATIVE_NET_PAY` warning.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning};

use super::arithmetic::{overflow, round2};

/// Warning code raised when deductions exceed gross salary.
pub const NEGATIVE_NET_PAY: &str = "NEGATIVE_NET_PAY";

/// The result of calculating net pay.
#[derive(Debug, Clone)]
pub struct NetPayResult {
    /// Gross salary minus total deductions, rounded to cents.
    pub net_pay: Decimal,
    /// Raised when `net_pay` is below zero.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates net pay as `round2(gross_salary − total_deductions)`.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_net_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
///
/// let result = calculate_net_pay(d("21153.44"), d("650.00"), 1).unwrap();
/// assert_eq!(result.net_pay, d("20503.44"));
///
/// let result = calculate_net_pay(d("0.00"), d("62.50"), 1).unwrap();
/// assert_eq!(result.net_pay, d("-62.50"));
/// assert!(result.warning.is_some());
/// ```
pub fn calculate_net_pay(
    gross_salary: Decimal,
    total_deductions: Decimal,
    step_number: u32,
) -> EngineResult<NetPayResult> {
    let net_pay = round2(
        gross_salary
            .checked_sub(total_deductions)
            .ok_or_else(|| overflow("net pay"))?,
    );

    let warning = (net_pay < Decimal::ZERO).then(|| AuditWarning {
        code: NEGATIVE_NET_PAY.to_string(),
        message: format!(
            "Total deductions {} exceed gross salary {}; net pay is {}",
            total_deductions, gross_salary, net_pay
        ),
        severity: "high".to_string(),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "total_deductions": total_deductions.to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!("{} - {} = {}", gross_salary, total_deductions, net_pay),
    };

    Ok(NetPayResult {
        net_pay,
        warning,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_positive_net_pay() {
        let result = calculate_net_pay(dec("21153.44"), dec("650.00"), 1).unwrap();
        assert_eq!(result.net_pay, dec("20503.44"));
        assert!(result.warning.is_none());
        assert_eq!(result.audit_step.reasoning, "21153.44 - 650.00 = 20503.44");
    }

    #[test]
    fn test_negative_net_pay_is_not_clamped() {
        let result = calculate_net_pay(dec("500.00"), dec("650.00"), 1).unwrap();
        assert_eq!(result.net_pay, dec("-150.00"));
        assert_eq!(result.warning.unwrap().code, NEGATIVE_NET_PAY);
    }

    #[test]
    fn test_exactly_zero_has_no_warning() {
        let result = calculate_net_pay(dec("650.00"), dec("650.00"), 1).unwrap();
        assert!(result.net_pay.is_zero());
        assert!(result.warning.is_none());
    }
}

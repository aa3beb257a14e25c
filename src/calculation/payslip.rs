//! Payslip computation.
//!
//! This module chains the individual calculation steps into a complete
//! [`PayslipBreakdown`]. Each step rounds to cents before the next one uses
//! its value; rounding only once at the end gives different results.

use tracing::debug;

use crate::config::RatePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceFacts, AuditTrace, DeductionInputs, PayslipBreakdown, PayslipInputs, RateInputs,
};

use super::basic_pay::calculate_basic_pay;
use super::deductions::{calculate_statutory_total, calculate_total_deductions};
use super::gross_salary::calculate_gross_salary;
use super::late_deduction::calculate_late_deduction;
use super::net_pay::calculate_net_pay;
use super::rate_derivation::derive_rates;
use super::validation::validate_inputs;

/// Computes a payslip with the default 26-day, 8-hour rate policy.
///
/// Inputs are validated first; a negative monthly rate, hours figure or
/// deduction fails with [`EngineError::Validation`] naming the field.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::compute_payslip;
/// use payslip_engine::models::{AttendanceFacts, DeductionInputs, RateInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
///
/// let payslip = compute_payslip(
///     &RateInputs::monthly(d("25000")),
///     &AttendanceFacts {
///         total_hours_worked: d("176"),
///         regular_days: 22,
///         ..AttendanceFacts::default()
///     },
///     &DeductionInputs {
///         sss_employee_share: d("500"),
///         wisp: d("50"),
///         hdmf_employee_share: d("100"),
///         ..DeductionInputs::default()
///     },
/// )
/// .unwrap();
///
/// assert_eq!(payslip.daily_rate(), d("961.54"));
/// assert_eq!(payslip.hourly_rate(), d("120.19"));
/// assert_eq!(payslip.basic_pay(), d("21153.44"));
/// assert_eq!(payslip.total_deductions(), d("650.00"));
/// assert_eq!(payslip.net_pay(), d("20503.44"));
/// ```
pub fn compute_payslip(
    rate: &RateInputs,
    attendance: &AttendanceFacts,
    deductions: &DeductionInputs,
) -> EngineResult<PayslipBreakdown> {
    let inputs = PayslipInputs {
        rate: *rate,
        attendance: *attendance,
        deductions: *deductions,
        ..PayslipInputs::default()
    };
    compute_payslip_with_policy(&inputs, &RatePolicy::default())
}

/// Computes a payslip from a full input bundle under the given rate policy.
///
/// Steps, in order: rate derivation, basic pay, late deduction, gross
/// salary, total deductions, statutory totals (when supplied), net pay.
pub fn compute_payslip_with_policy(
    inputs: &PayslipInputs,
    policy: &RatePolicy,
) -> EngineResult<PayslipBreakdown> {
    validate_inputs(inputs)?;

    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let rates = derive_rates(&inputs.rate, policy, step_number)?;
    trace.steps.push(rates.audit_step);
    step_number += 1;
    let hourly_rate = rates.rates.hourly_rate();

    let basic = calculate_basic_pay(
        inputs.attendance.total_hours_worked,
        hourly_rate,
        step_number,
    )?;
    trace.steps.push(basic.audit_step);
    step_number += 1;

    let late = calculate_late_deduction(inputs.attendance.mins_late, hourly_rate, step_number)?;
    trace.steps.push(late.audit_step);
    step_number += 1;

    let gross = calculate_gross_salary(basic.amount, &inputs.earnings, step_number)?;
    trace.steps.push(gross.audit_step);
    step_number += 1;

    let deductions = calculate_total_deductions(&inputs.deductions, late.amount, step_number)?;
    trace.steps.push(deductions.audit_step);
    step_number += 1;

    let statutory_total = match &inputs.statutory_totals {
        Some(totals) => {
            let statutory = calculate_statutory_total(totals, deductions.total, step_number)?;
            trace.steps.push(statutory.audit_step);
            trace.warnings.extend(statutory.warning);
            step_number += 1;
            Some(statutory.total)
        }
        None => None,
    };

    let net = calculate_net_pay(gross.gross_salary, deductions.total, step_number)?;
    trace.steps.push(net.audit_step);
    trace.warnings.extend(net.warning);

    debug!(
        monthly_rate = %rates.rates.monthly_rate(),
        hourly_rate = %hourly_rate,
        gross_salary = %gross.gross_salary,
        total_deductions = %deductions.total,
        net_pay = %net.net_pay,
        warnings = trace.warnings.len(),
        "Payslip computed"
    );

    Ok(PayslipBreakdown {
        rates: rates.rates,
        attendance: inputs.attendance,
        deductions: inputs.deductions,
        basic_pay: basic.amount,
        late_deduction: late.amount,
        supplementary_total: gross.supplementary_total,
        gross_salary: gross.gross_salary,
        total_deductions: deductions.total,
        net_pay: net.net_pay,
        statutory_total,
        audit_trace: trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{DEDUCTION_TOTALS_DIVERGE, NEGATIVE_NET_PAY};
    use crate::config::PayrollPolicy;
    use crate::models::{LineSection, StatutoryTotals, SupplementaryEarnings};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn attendance(hours: &str, mins_late: u32) -> AttendanceFacts {
        AttendanceFacts {
            total_hours_worked: dec(hours),
            mins_late,
            ..AttendanceFacts::default()
        }
    }

    fn scenario_deductions() -> DeductionInputs {
        DeductionInputs {
            sss_employee_share: dec("500"),
            wisp: dec("50"),
            hdmf_employee_share: dec("100"),
            taxable_income: dec("0"),
            hdmf_loan: dec("0"),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let payslip = compute_payslip(
            &RateInputs::monthly(dec("25000")),
            &attendance("176", 0),
            &scenario_deductions(),
        )
        .unwrap();

        assert_eq!(payslip.daily_rate(), dec("961.54"));
        assert_eq!(payslip.hourly_rate(), dec("120.19"));
        assert_eq!(payslip.basic_pay(), dec("21153.44"));
        assert_eq!(payslip.late_deduction(), dec("0.00"));
        assert_eq!(payslip.gross_salary(), dec("21153.44"));
        assert_eq!(payslip.total_deductions(), dec("650.00"));
        assert_eq!(payslip.net_pay(), dec("20503.44"));
        assert!(payslip.audit_trace().warnings.is_empty());
    }

    #[test]
    fn test_chained_rounding_differs_from_rounding_once() {
        let payslip = compute_payslip(
            &RateInputs::monthly(dec("25000")),
            &attendance("176", 0),
            &DeductionInputs::default(),
        )
        .unwrap();

        // Unrounded hourly rate would give 176 × 120.1923.. = 21153.85
        assert_eq!(payslip.basic_pay(), dec("21153.44"));
        assert_ne!(payslip.basic_pay(), dec("21153.85"));
    }

    #[test]
    fn test_every_monetary_field_has_scale_two() {
        let payslip = compute_payslip(
            &RateInputs::monthly(dec("26000")),
            &attendance("160", 30),
            &scenario_deductions(),
        )
        .unwrap();

        for value in [
            payslip.daily_rate(),
            payslip.hourly_rate(),
            payslip.basic_pay(),
            payslip.late_deduction(),
            payslip.gross_salary(),
            payslip.total_deductions(),
            payslip.net_pay(),
        ] {
            assert_eq!(value.scale(), 2, "{} should have scale 2", value);
        }
    }

    #[test]
    fn test_zero_hours_with_lateness_goes_negative() {
        let payslip = compute_payslip(
            &RateInputs::monthly(dec("26000")),
            &attendance("0", 30),
            &DeductionInputs::default(),
        )
        .unwrap();

        assert_eq!(payslip.basic_pay(), Decimal::ZERO);
        assert_eq!(payslip.late_deduction(), dec("62.50"));
        assert_eq!(payslip.total_deductions(), dec("62.50"));
        assert_eq!(payslip.net_pay(), dec("-62.50"));
        assert!(payslip.audit_trace().has_warning(NEGATIVE_NET_PAY));
    }

    #[test]
    fn test_zero_everything_is_zero() {
        let payslip = compute_payslip(
            &RateInputs::monthly(dec("26000")),
            &attendance("0", 0),
            &DeductionInputs::default(),
        )
        .unwrap();

        assert_eq!(payslip.basic_pay(), Decimal::ZERO);
        assert_eq!(payslip.total_deductions(), Decimal::ZERO);
        assert_eq!(payslip.net_pay(), Decimal::ZERO);
        assert!(payslip.audit_trace().warnings.is_empty());
    }

    #[test]
    fn test_identical_inputs_give_identical_breakdowns() {
        let rate = RateInputs::monthly(dec("31750.50"));
        let facts = attendance("151.25", 47);
        let deductions = scenario_deductions();

        let first = compute_payslip(&rate, &facts, &deductions).unwrap();
        let second = compute_payslip(&rate, &facts, &deductions).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_audit_steps_in_order() {
        let inputs = PayslipInputs {
            rate: RateInputs::monthly(dec("25000")),
            attendance: attendance("176", 15),
            deductions: scenario_deductions(),
            statutory_totals: Some(StatutoryTotals::default()),
            ..PayslipInputs::default()
        };
        let payslip = compute_payslip_with_policy(&inputs, &RatePolicy::default()).unwrap();

        let rule_ids: Vec<&str> = payslip
            .audit_trace()
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "rate_derivation",
                "basic_pay",
                "late_deduction",
                "gross_salary",
                "total_deductions",
                "statutory_total",
                "net_pay"
            ]
        );
        let numbers: Vec<u32> = payslip
            .audit_trace()
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_statutory_totals_reported_but_not_reconciled() {
        let inputs = PayslipInputs {
            rate: RateInputs::monthly(dec("25000")),
            attendance: attendance("176", 0),
            deductions: scenario_deductions(),
            statutory_totals: Some(StatutoryTotals {
                sss: dec("581.30"),
                philhealth: dec("312.50"),
                pagibig: dec("100"),
                ..StatutoryTotals::default()
            }),
            ..PayslipInputs::default()
        };
        let payslip = compute_payslip_with_policy(&inputs, &RatePolicy::default()).unwrap();

        assert_eq!(payslip.statutory_total(), Some(dec("993.80")));
        assert_eq!(payslip.total_deductions(), dec("650.00"));
        assert_eq!(payslip.net_pay(), dec("20503.44"));
        assert!(payslip.audit_trace().has_warning(DEDUCTION_TOTALS_DIVERGE));
    }

    #[test]
    fn test_supplementary_earnings_raise_gross_and_net() {
        let inputs = PayslipInputs {
            rate: RateInputs::monthly(dec("25000")),
            attendance: attendance("176", 0),
            deductions: scenario_deductions(),
            earnings: SupplementaryEarnings {
                non_taxable_allowance: dec("1500"),
                performance_bonus: dec("1000"),
                ..SupplementaryEarnings::default()
            },
            ..PayslipInputs::default()
        };
        let payslip = compute_payslip_with_policy(&inputs, &RatePolicy::default()).unwrap();

        assert_eq!(payslip.basic_pay(), dec("21153.44"));
        assert_eq!(payslip.supplementary_total(), dec("2500.00"));
        assert_eq!(payslip.gross_salary(), dec("23653.44"));
        assert_eq!(payslip.net_pay(), dec("23003.44"));
    }

    #[test]
    fn test_validation_runs_before_any_step() {
        let result = compute_payslip(
            &RateInputs::monthly(dec("25000")),
            &attendance("176", 0),
            &DeductionInputs {
                wisp: dec("-50"),
                ..DeductionInputs::default()
            },
        );

        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "deductions.wisp"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_line_items_follow_payslip_order() {
        let payslip = compute_payslip(
            &RateInputs::monthly(dec("25000")),
            &attendance("176", 0),
            &scenario_deductions(),
        )
        .unwrap();
        let lines = payslip.line_items(&PayrollPolicy::default());

        let keys: Vec<&str> = lines.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "daily_rate",
                "hourly_rate",
                "basic_pay",
                "sss_employee_share",
                "wisp",
                "hdmf_employee_share",
                "taxable_income",
                "hdmf_loan",
                "late_deduction",
                "gross_salary",
                "total_deductions",
                "net_pay"
            ]
        );

        let net = lines.last().unwrap();
        assert_eq!(net.section, LineSection::Total);
        assert_eq!(net.label, "Net Pay");
        assert_eq!(net.display, "PHP 20,503.44");
    }
}

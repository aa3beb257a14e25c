//! Deduction totals.
//!
//! Two totals are computed here and deliberately kept apart:
//!
//! - the flat total, `round2(Σ DeductionInputs + late_deduction)`, which is
//!   what net pay is computed from;
//! - the statutory total, the sum of the administrator-maintained
//!   [`StatutoryTotals`], which is reported but never fed into net pay.
//!
//! When both are present and differ, a `DEDUCTION_TOTALS_DIVERGE` warning is
//! raised and neither value is adjusted.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, DeductionInputs, StatutoryTotals};

use super::arithmetic::{overflow, round2};

/// Warning code raised when the statutory total differs from the flat total.
pub const DEDUCTION_TOTALS_DIVERGE: &str = "DEDUCTION_TOTALS_DIVERGE";

/// The result of summing the flat deductions.
#[derive(Debug, Clone)]
pub struct TotalDeductionsResult {
    /// Flat deductions plus the late deduction, rounded to cents.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of summing the statutory totals.
#[derive(Debug, Clone)]
pub struct StatutoryTotalResult {
    /// Sum of the statutory totals, rounded to cents.
    pub total: Decimal,
    /// Raised when `total` differs from the flat total.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates total deductions as `round2(Σ deductions + late_deduction)`.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_total_deductions;
/// use payslip_engine::models::DeductionInputs;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionInputs {
///     sss_employee_share: Decimal::new(500, 0),
///     wisp: Decimal::new(50, 0),
///     hdmf_employee_share: Decimal::new(100, 0),
///     ..DeductionInputs::default()
/// };
/// let result = calculate_total_deductions(&deductions, Decimal::ZERO, 1).unwrap();
/// assert_eq!(result.total.to_string(), "650.00");
/// ```
pub fn calculate_total_deductions(
    deductions: &DeductionInputs,
    late_deduction: Decimal,
    step_number: u32,
) -> EngineResult<TotalDeductionsResult> {
    let flat_sum = deductions
        .sum()
        .ok_or_else(|| overflow("total deductions"))?;
    let total = round2(
        flat_sum
            .checked_add(late_deduction)
            .ok_or_else(|| overflow("total deductions"))?,
    );

    let mut input = serde_json::Map::new();
    for (name, value) in deductions.fields() {
        input.insert(name.to_string(), serde_json::Value::String(value.to_string()));
    }
    input.insert(
        "late_deduction".to_string(),
        serde_json::Value::String(late_deduction.to_string()),
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_deductions".to_string(),
        rule_name: "Total Deductions".to_string(),
        input: serde_json::Value::Object(input),
        output: serde_json::json!({
            "total_deductions": total.to_string()
        }),
        reasoning: format!(
            "{} in deductions + {} late deduction = {}",
            flat_sum, late_deduction, total
        ),
    };

    Ok(TotalDeductionsResult { total, audit_step })
}

/// Sums the administrator-maintained statutory totals.
///
/// The result is compared against `flat_total` only to raise a warning.
pub fn calculate_statutory_total(
    totals: &StatutoryTotals,
    flat_total: Decimal,
    step_number: u32,
) -> EngineResult<StatutoryTotalResult> {
    let total = round2(totals.sum().ok_or_else(|| overflow("statutory total"))?);
    let diverges = total != flat_total;

    let warning = diverges.then(|| AuditWarning {
        code: DEDUCTION_TOTALS_DIVERGE.to_string(),
        message: format!(
            "Statutory totals ({}) differ from computed total deductions ({}); neither was adjusted",
            total, flat_total
        ),
        severity: "medium".to_string(),
    });

    let mut input = serde_json::Map::new();
    for (name, value) in totals.fields() {
        input.insert(name.to_string(), serde_json::Value::String(value.to_string()));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_total".to_string(),
        rule_name: "Statutory Totals".to_string(),
        input: serde_json::Value::Object(input),
        output: serde_json::json!({
            "statutory_total": total.to_string(),
            "total_deductions": flat_total.to_string(),
            "diverges": diverges
        }),
        reasoning: if diverges {
            format!(
                "Statutory totals sum to {} but computed deductions are {}; reported separately",
                total, flat_total
            )
        } else {
            format!("Statutory totals sum to {} and match computed deductions", total)
        },
    };

    Ok(StatutoryTotalResult {
        total,
        warning,
        audit_step,
    })
}

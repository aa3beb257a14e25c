//! Calculation result models for the Payslip Engine.
//!
//! This module contains the audit types recorded while a payslip is computed,
//! the [`PayslipLine`] line items rendered from a breakdown, and the
//! [`PayslipResult`] envelope returned by the calculation service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayPeriod, PayslipBreakdown};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payslip_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(!trace.has_warning("NEGATIVE_NET_PAY"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with `code` was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// Which section of the payslip a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSection {
    /// Daily and hourly rates.
    Rate,
    /// Basic pay and supplementary earnings.
    Earning,
    /// Individual deductions.
    Deduction,
    /// Gross, total deductions and net pay.
    Total,
}

/// A currency-labelled payslip line item.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{LineSection, PayslipLine};
/// use rust_decimal::Decimal;
///
/// let line = PayslipLine {
///     key: "net_pay".to_string(),
///     label: "Net Pay".to_string(),
///     section: LineSection::Total,
///     amount: Decimal::new(20503_44, 2),
///     display: "PHP 20,503.44".to_string(),
/// };
/// assert_eq!(line.section, LineSection::Total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// Stable key of the line (e.g., "basic_pay").
    pub key: String,
    /// Display label from the policy.
    pub label: String,
    /// The payslip section.
    pub section: LineSection,
    /// The amount, rounded to cents.
    pub amount: Decimal,
    /// The amount formatted with the policy currency.
    pub display: String,
}

/// The envelope returned by the calculation service for one payslip.
#[derive(Debug, Clone, Serialize)]
pub struct PayslipResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the payslip is for.
    pub employee_id: String,
    /// The pay period covered, when supplied.
    pub pay_period: Option<PayPeriod>,
    /// The currency code used for the line items.
    pub currency: String,
    /// The full breakdown.
    pub payslip: PayslipBreakdown,
    /// Line items rendered from the breakdown.
    pub lines: Vec<PayslipLine>,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

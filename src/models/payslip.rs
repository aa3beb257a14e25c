//! Payslip input bundle and computed breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollPolicy;

use super::money::format_currency;
use super::{
    AttendanceFacts, AuditTrace, DeductionInputs, DerivedRates, LineSection, PayslipLine,
    RateInputs, StatutoryTotals, SupplementaryEarnings,
};

/// Everything a payslip is computed from.
///
/// Callers build a fresh value on every change and recompute; nothing in
/// the engine mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipInputs {
    /// The salary rate.
    pub rate: RateInputs,
    /// Attendance totals for the period.
    pub attendance: AttendanceFacts,
    /// Flat deductions.
    #[serde(default)]
    pub deductions: DeductionInputs,
    /// Earnings beyond basic pay.
    #[serde(default)]
    pub earnings: SupplementaryEarnings,
    /// Administrator-maintained totals, reported but never reconciled.
    #[serde(default)]
    pub statutory_totals: Option<StatutoryTotals>,
}

/// A fully itemized payslip.
///
/// Every monetary field is rounded to exactly two decimal places when it is
/// computed. Values are only produced by
/// [`compute_payslip`](crate::calculation::compute_payslip) and its policy
/// variant, and are replaced wholesale on recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayslipBreakdown {
    pub(crate) rates: DerivedRates,
    pub(crate) attendance: AttendanceFacts,
    pub(crate) deductions: DeductionInputs,
    pub(crate) basic_pay: Decimal,
    pub(crate) late_deduction: Decimal,
    pub(crate) supplementary_total: Decimal,
    pub(crate) gross_salary: Decimal,
    pub(crate) total_deductions: Decimal,
    pub(crate) net_pay: Decimal,
    pub(crate) statutory_total: Option<Decimal>,
    pub(crate) audit_trace: AuditTrace,
}

impl PayslipBreakdown {
    /// The derived daily and hourly rates.
    pub fn rates(&self) -> &DerivedRates {
        &self.rates
    }

    /// Shorthand for `rates().daily_rate()`.
    pub fn daily_rate(&self) -> Decimal {
        self.rates.daily_rate()
    }

    /// Shorthand for `rates().hourly_rate()`.
    pub fn hourly_rate(&self) -> Decimal {
        self.rates.hourly_rate()
    }

    /// The attendance facts the payslip was computed from.
    pub fn attendance(&self) -> &AttendanceFacts {
        &self.attendance
    }

    /// The flat deductions the payslip was computed from.
    pub fn deductions(&self) -> &DeductionInputs {
        &self.deductions
    }

    /// Hours worked times the hourly rate.
    pub fn basic_pay(&self) -> Decimal {
        self.basic_pay
    }

    /// Pay withheld for minutes late.
    pub fn late_deduction(&self) -> Decimal {
        self.late_deduction
    }

    /// Allowances, bonuses, overtime and holiday pay.
    pub fn supplementary_total(&self) -> Decimal {
        self.supplementary_total
    }

    /// Basic pay plus supplementary earnings.
    pub fn gross_salary(&self) -> Decimal {
        self.gross_salary
    }

    /// Flat deductions plus the late deduction.
    pub fn total_deductions(&self) -> Decimal {
        self.total_deductions
    }

    /// Gross salary minus total deductions. May be negative.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }

    /// Sum of the administrator-maintained totals, when they were supplied.
    pub fn statutory_total(&self) -> Option<Decimal> {
        self.statutory_total
    }

    /// The audit trace recorded while computing.
    pub fn audit_trace(&self) -> &AuditTrace {
        &self.audit_trace
    }

    /// Renders the breakdown as labelled line items in payslip order.
    ///
    /// The supplementary earnings line is omitted when it is zero.
    pub fn line_items(&self, policy: &PayrollPolicy) -> Vec<PayslipLine> {
        let currency = policy.currency().code.as_str();
        let line = |key: &str, section: LineSection, amount: Decimal| PayslipLine {
            key: key.to_string(),
            label: policy.label(key).to_string(),
            section,
            amount,
            display: format_currency(amount, currency),
        };

        let mut lines = vec![
            line("daily_rate", LineSection::Rate, self.daily_rate()),
            line("hourly_rate", LineSection::Rate, self.hourly_rate()),
            line("basic_pay", LineSection::Earning, self.basic_pay),
        ];
        if !self.supplementary_total.is_zero() {
            lines.push(line(
                "supplementary_total",
                LineSection::Earning,
                self.supplementary_total,
            ));
        }
        for (key, amount) in self.deductions.fields() {
            lines.push(line(key, LineSection::Deduction, amount));
        }
        lines.push(line(
            "late_deduction",
            LineSection::Deduction,
            self.late_deduction,
        ));
        lines.push(line("gross_salary", LineSection::Total, self.gross_salary));
        lines.push(line(
            "total_deductions",
            LineSection::Total,
            self.total_deductions,
        ));
        lines.push(line("net_pay", LineSection::Total, self.net_pay));
        lines
    }
}

//! Calculation logic for the Payslip Engine.
//!
//! This module contains the calculation functions that turn a monthly rate,
//! attendance facts and deductions into a payslip: rate derivation, basic pay,
//! late deduction, gross salary, deduction totals and net pay, plus the
//! orchestration that chains them and the attendance summary that feeds them.

mod arithmetic;
mod attendance_summary;
mod basic_pay;
mod deductions;
mod gross_salary;
mod late_deduction;
mod net_pay;
mod payslip;
mod rate_derivation;
mod validation;

pub use arithmetic::{MONEY_SCALE, round2};
pub use attendance_summary::summarize_attendance;
pub use basic_pay::{BasicPayResult, calculate_basic_pay};
pub use deductions::{
    DEDUCTION_TOTALS_DIVERGE, StatutoryTotalResult, TotalDeductionsResult,
    calculate_statutory_total, calculate_total_deductions,
};
pub use gross_salary::{GrossSalaryResult, calculate_gross_salary};
pub use late_deduction::{LateDeductionResult, MINUTES_PER_HOUR, calculate_late_deduction};
pub use net_pay::{NEGATIVE_NET_PAY, NetPayResult, calculate_net_pay};
pub use payslip::{compute_payslip, compute_payslip_with_policy};
pub use rate_derivation::{RateDerivationResult, derive_rates};
pub use validation::{validate_inputs, validate_non_negative};

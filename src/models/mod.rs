//! Core data models for the Payslip Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod deductions;
mod earnings;
mod money;
mod nullable;
mod pay_period;
mod payslip;
mod rates;

pub use attendance::{AttendanceFacts, AttendanceStatus, DailyAttendance};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, LineSection, PayslipLine, PayslipResult,
};
pub use deductions::{DeductionInputs, StatutoryTotals};
pub use earnings::{HolidayPay, OvertimePay, SupplementaryEarnings};
pub use money::format_currency;
pub(crate) use nullable::null_as_default;
pub use pay_period::PayPeriod;
pub use payslip::{PayslipBreakdown, PayslipInputs};
pub use rates::{DerivedRates, RateInputs};

//! Request types for the Payslip Engine API.
//!
//! This module defines the JSON request structures for the `/payslip`,
//! `/rates` and `/attendance/summary` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceFacts, DailyAttendance, DeductionInputs, PayPeriod, PayslipInputs, RateInputs,
    StatutoryTotals, SupplementaryEarnings, null_as_default,
};

/// Request body for the `/payslip` endpoint.
///
/// `deductions` and `earnings` may be omitted or `null`; every amount inside
/// them defaults to zero. `rate.monthly_rate` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Identifier of the employee the payslip is for.
    pub employee_id: String,
    /// The pay period covered, used only to label the result.
    #[serde(default)]
    pub pay_period: Option<PayPeriod>,
    /// The salary rate.
    pub rate: RateInputs,
    /// Attendance totals for the period.
    pub attendance: AttendanceFacts,
    /// Flat deductions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deductions: DeductionInputs,
    /// Earnings beyond basic pay.
    #[serde(default, deserialize_with = "null_as_default")]
    pub earnings: SupplementaryEarnings,
    /// Administrator-maintained deduction totals.
    #[serde(default)]
    pub statutory_totals: Option<StatutoryTotals>,
}

impl PayslipRequest {
    /// Splits the request into its calculation inputs.
    pub fn inputs(&self) -> PayslipInputs {
        PayslipInputs {
            rate: self.rate,
            attendance: self.attendance,
            deductions: self.deductions,
            earnings: self.earnings,
            statutory_totals: self.statutory_totals,
        }
    }
}

/// Request body for the `/rates` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatesRequest {
    /// The monthly salary rate.
    pub monthly_rate: Decimal,
}

impl From<RatesRequest> for RateInputs {
    fn from(req: RatesRequest) -> Self {
        RateInputs::monthly(req.monthly_rate)
    }
}

/// Request body for the `/attendance/summary` endpoint.
///
/// When `pay_period` is given, every record must fall inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRequest {
    /// The period the records belong to.
    #[serde(default)]
    pub pay_period: Option<PayPeriod>,
    /// Daily records for one employee and one period.
    #[serde(default)]
    pub records: Vec<DailyAttendance>,
}

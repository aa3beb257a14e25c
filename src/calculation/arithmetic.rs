//! Monetary rounding shared by every calculation step.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineError;

/// Number of decimal places every monetary value is stored with.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a value to cents, half away from zero, at exactly two decimal places.
///
/// The result always has scale 2, so `650` becomes `650.00` and two
/// breakdowns computed from the same inputs serialize identically.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(round2(d("961.538461")), d("961.54"));
/// assert_eq!(round2(d("120.1925")), d("120.19"));
/// assert_eq!(round2(d("2.345")), d("2.35"));
/// assert_eq!(round2(d("-2.345")), d("-2.35")); // Away from zero
/// assert_eq!(round2(d("650")).to_string(), "650.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

pub(crate) fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("decimal overflow computing {}", what),
    }
}

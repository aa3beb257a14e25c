//! Salary rate models.
//!
//! A single salary figure is expressed at three granularities: monthly as
//! supplied, and daily and hourly as derived through the policy divisors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The salary rate supplied by the caller.
///
/// # Example
///
/// ```
/// use payslip_engine::models::RateInputs;
/// use rust_decimal::Decimal;
///
/// let rate = RateInputs::monthly(Decimal::new(25000, 0));
/// assert_eq!(rate.monthly_rate, Decimal::new(25000, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateInputs {
    /// The monthly salary rate. Must not be negative.
    pub monthly_rate: Decimal,
}

impl RateInputs {
    /// Creates rate inputs from a monthly rate.
    pub fn monthly(monthly_rate: Decimal) -> Self {
        Self { monthly_rate }
    }
}

/// Daily and hourly rates derived from a monthly rate.
///
/// There is no public constructor: values only come out of
/// [`derive_rates`](crate::calculation::derive_rates), so the daily and hourly
/// figures can never drift from the monthly rate they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedRates {
    monthly_rate: Decimal,
    daily_rate: Decimal,
    hourly_rate: Decimal,
}

impl DerivedRates {
    pub(crate) fn new(monthly_rate: Decimal, daily_rate: Decimal, hourly_rate: Decimal) -> Self {
        Self {
            monthly_rate,
            daily_rate,
            hourly_rate,
        }
    }

    /// The monthly rate the other two were derived from.
    pub fn monthly_rate(&self) -> Decimal {
        self.monthly_rate
    }

    /// The monthly rate divided by the working days per month, rounded to cents.
    pub fn daily_rate(&self) -> Decimal {
        self.daily_rate
    }

    /// The daily rate divided by the hours per day, rounded to cents.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }
}

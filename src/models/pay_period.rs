//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that labels a payslip with the
//! date range it covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())); // start date
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())); // end date
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 16).unwrap())); // after
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the end date is before the start date.
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }
}

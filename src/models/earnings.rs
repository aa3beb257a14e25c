//! Earnings added on top of basic pay.
//!
//! All amounts here are pre-computed by the caller and default to zero.
//! With every field at zero, gross salary equals basic pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deductions::checked_sum;
use super::nullable::null_as_default;

/// Overtime pay by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePay {
    /// Overtime worked on a regular working day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub regular_day: Decimal,
    /// Overtime worked on a rest day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rest_day: Decimal,
    /// Night shift differential.
    #[serde(default, deserialize_with = "null_as_default")]
    pub night_differential: Decimal,
}

/// Pay for work on public holidays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPay {
    /// Premium for regular holidays.
    #[serde(default, deserialize_with = "null_as_default")]
    pub regular_holiday: Decimal,
    /// Premium for special non-working days.
    #[serde(default, deserialize_with = "null_as_default")]
    pub special_holiday: Decimal,
}

/// Allowances, bonuses and premiums that make up gross salary beyond basic pay.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{OvertimePay, SupplementaryEarnings};
/// use rust_decimal::Decimal;
///
/// let earnings = SupplementaryEarnings {
///     non_taxable_allowance: Decimal::new(1500, 0),
///     overtime: OvertimePay {
///         regular_day: Decimal::new(751_20, 2),
///         ..OvertimePay::default()
///     },
///     ..SupplementaryEarnings::default()
/// };
/// assert_eq!(earnings.sum(), Some(Decimal::new(2251_20, 2)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryEarnings {
    /// De minimis and other non-taxable allowances.
    #[serde(default, deserialize_with = "null_as_default")]
    pub non_taxable_allowance: Decimal,
    /// Performance bonus for the period.
    #[serde(default, deserialize_with = "null_as_default")]
    pub performance_bonus: Decimal,
    /// Overtime pay.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overtime: OvertimePay,
    /// Holiday pay.
    #[serde(default, deserialize_with = "null_as_default")]
    pub holiday: HolidayPay,
}

impl SupplementaryEarnings {
    /// Returns each amount with its dotted field path.
    pub fn fields(&self) -> [(&'static str, Decimal); 7] {
        [
            ("non_taxable_allowance", self.non_taxable_allowance),
            ("performance_bonus", self.performance_bonus),
            ("overtime.regular_day", self.overtime.regular_day),
            ("overtime.rest_day", self.overtime.rest_day),
            ("overtime.night_differential", self.overtime.night_differential),
            ("holiday.regular_holiday", self.holiday.regular_holiday),
            ("holiday.special_holiday", self.holiday.special_holiday),
        ]
    }

    /// Sums every amount, or `None` on decimal overflow.
    pub fn sum(&self) -> Option<Decimal> {
        checked_sum(self.fields().iter().map(|(_, v)| *v))
    }

    /// Returns true if no supplementary earnings were supplied.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_zero())
    }
}

//! Deduction models.
//!
//! Two deduction shapes exist side by side. [`DeductionInputs`] is the flat
//! record that feeds `total_deductions`; [`StatutoryTotals`] is the
//! separately-maintained totals record an administrator edits by hand. The two
//! are computed independently and never reconciled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Flat deduction amounts supplied by the caller.
///
/// Every field defaults to zero when absent.
///
/// # Example
///
/// ```
/// use payslip_engine::models::DeductionInputs;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionInputs {
///     sss_employee_share: Decimal::new(500, 0),
///     wisp: Decimal::new(50, 0),
///     hdmf_employee_share: Decimal::new(100, 0),
///     ..DeductionInputs::default()
/// };
/// assert_eq!(deductions.sum(), Some(Decimal::new(650, 0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionInputs {
    /// Social Security System employee share.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sss_employee_share: Decimal,
    /// Workers' Investment and Savings Program contribution.
    #[serde(default, deserialize_with = "null_as_default")]
    pub wisp: Decimal,
    /// Home Development Mutual Fund (Pag-IBIG) employee share.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hdmf_employee_share: Decimal,
    /// Tax withheld on taxable income.
    #[serde(default, deserialize_with = "null_as_default")]
    pub taxable_income: Decimal,
    /// Home Development Mutual Fund loan repayment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hdmf_loan: Decimal,
}

impl DeductionInputs {
    /// Returns each field with its name, in payslip order.
    pub fn fields(&self) -> [(&'static str, Decimal); 5] {
        [
            ("sss_employee_share", self.sss_employee_share),
            ("wisp", self.wisp),
            ("hdmf_employee_share", self.hdmf_employee_share),
            ("taxable_income", self.taxable_income),
            ("hdmf_loan", self.hdmf_loan),
        ]
    }

    /// Sums every field, or `None` on decimal overflow.
    pub fn sum(&self) -> Option<Decimal> {
        checked_sum(self.fields().iter().map(|(_, v)| *v))
    }
}

/// Deduction totals maintained separately by an administrator.
///
/// # Example
///
/// ```
/// use payslip_engine::models::StatutoryTotals;
/// use rust_decimal::Decimal;
///
/// let totals = StatutoryTotals {
///     sss: Decimal::new(500, 0),
///     philhealth: Decimal::new(312_50, 2),
///     ..StatutoryTotals::default()
/// };
/// assert_eq!(totals.sum(), Some(Decimal::new(812_50, 2)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryTotals {
    /// Social Security System contribution.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sss: Decimal,
    /// PhilHealth contribution.
    #[serde(default, deserialize_with = "null_as_default")]
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagibig: Decimal,
    /// Withholding tax.
    #[serde(default, deserialize_with = "null_as_default")]
    pub withholding_tax: Decimal,
    /// Any other deduction the administrator records.
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_deductions: Decimal,
}

impl StatutoryTotals {
    /// Returns each field with its name.
    pub fn fields(&self) -> [(&'static str, Decimal); 5] {
        [
            ("sss", self.sss),
            ("philhealth", self.philhealth),
            ("pagibig", self.pagibig),
            ("withholding_tax", self.withholding_tax),
            ("other_deductions", self.other_deductions),
        ]
    }

    /// Sums every field, or `None` on decimal overflow.
    pub fn sum(&self) -> Option<Decimal> {
        checked_sum(self.fields().iter().map(|(_, v)| *v))
    }
}

pub(crate) fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

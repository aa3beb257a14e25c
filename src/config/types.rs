//! Configuration types for payslip computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! defaults used when no policy directory is supplied.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of paid working days in a month used to derive the daily rate.
pub const WORKING_DAYS_PER_MONTH: u32 = 26;

/// Number of working hours in a day used to derive the hourly rate.
pub const HOURS_PER_DAY: u32 = 8;

/// Currency code used when no policy overrides it.
pub const DEFAULT_CURRENCY_CODE: &str = "PHP";

/// Metadata about the payroll policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short code identifying the policy (e.g., "PH-MONTHLY").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "PH-MONTHLY".to_string(),
            name: "Monthly-rated payroll policy".to_string(),
            version: "builtin".to_string(),
        }
    }
}

/// Divisors that turn a monthly rate into daily and hourly rates.
///
/// # Example
///
/// ```
/// use payslip_engine::config::RatePolicy;
///
/// let policy = RatePolicy::default();
/// assert_eq!(policy.working_days_per_month, 26);
/// assert_eq!(policy.hours_per_day, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePolicy {
    /// Paid working days per month.
    pub working_days_per_month: u32,
    /// Working hours per day.
    pub hours_per_day: u32,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            working_days_per_month: WORKING_DAYS_PER_MONTH,
            hours_per_day: HOURS_PER_DAY,
        }
    }
}

/// Currency used when rendering line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 currency code (e.g., "PHP").
    pub code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

/// Policy file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Rate derivation divisors.
    pub rates: RatePolicy,
    /// Currency settings.
    #[serde(default)]
    pub currency: CurrencyConfig,
}

/// Line-item label file structure (`labels.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct LabelsFile {
    /// Map of line-item key to display label.
    pub labels: HashMap<String, String>,
}

fn default_labels() -> HashMap<String, String> {
    [
        ("daily_rate", "Daily Rate"),
        ("hourly_rate", "Hourly Rate"),
        ("basic_pay", "Basic Pay"),
        ("supplementary_total", "Allowances & Other Earnings"),
        ("gross_salary", "Gross Salary"),
        ("sss_employee_share", "SSS Employee Share"),
        ("wisp", "WISP"),
        ("hdmf_employee_share", "HDMF Employee Share"),
        ("taxable_income", "Withholding on Taxable Income"),
        ("hdmf_loan", "HDMF Loan"),
        ("late_deduction", "Late Deduction"),
        ("total_deductions", "Total Deductions"),
        ("net_pay", "Net Pay"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// The complete payroll policy.
///
/// Aggregates the rate divisors, currency and line-item labels. The
/// [`Default`] policy uses 26 working days, 8 hours per day and PHP.
#[derive(Debug, Clone)]
pub struct PayrollPolicy {
    metadata: PolicyMetadata,
    rates: RatePolicy,
    currency: CurrencyConfig,
    labels: HashMap<String, String>,
}

impl PayrollPolicy {
    /// Creates a new policy from its component parts.
    ///
    /// Labels missing from `labels` fall back to the built-in label set.
    pub fn new(
        metadata: PolicyMetadata,
        rates: RatePolicy,
        currency: CurrencyConfig,
        labels: HashMap<String, String>,
    ) -> Self {
        let mut merged = default_labels();
        merged.extend(labels);
        Self {
            metadata,
            rates,
            currency,
            labels: merged,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the rate derivation divisors.
    pub fn rates(&self) -> &RatePolicy {
        &self.rates
    }

    /// Returns the currency settings.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    /// Returns the display label for a line-item key, or the key itself.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self::new(
            PolicyMetadata::default(),
            RatePolicy::default(),
            CurrencyConfig::default(),
            HashMap::new(),
        )
    }
}

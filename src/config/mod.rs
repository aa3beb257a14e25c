//! Configuration loading and management for the Payslip Engine.
//!
//! This module provides functionality to load payroll policies from YAML files,
//! including the working-days and hours-per-day divisors, the currency, and
//! the labels used for payslip line items.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.policy().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CurrencyConfig, DEFAULT_CURRENCY_CODE, HOURS_PER_DAY, PayrollPolicy, PolicyMetadata,
    RatePolicy, WORKING_DAYS_PER_MONTH,
};

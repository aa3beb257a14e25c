//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policies from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LabelsFile, PayrollPolicy, PolicyFile, RatePolicy};

/// Loads and provides access to the payroll policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml   # Metadata, rate divisors, currency
/// └── labels.yaml   # Optional line-item labels
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Loaded policy: {}", loader.policy().metadata().name);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, if any file contains
    /// invalid YAML, or if a rate divisor is zero. `labels.yaml` is optional.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;
        Self::validate_rates(&policy_path, &policy_file.rates)?;

        let labels_path = path.join("labels.yaml");
        let labels = if labels_path.exists() {
            Self::load_yaml::<LabelsFile>(&labels_path)?.labels
        } else {
            HashMap::new()
        };

        let policy = PayrollPolicy::new(
            policy_file.metadata,
            policy_file.rates,
            policy_file.currency,
            labels,
        );

        Ok(Self { policy })
    }

    /// Wraps an already-built policy, e.g. [`PayrollPolicy::default`].
    pub fn from_policy(policy: PayrollPolicy) -> Self {
        Self { policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rates(path: &Path, rates: &RatePolicy) -> EngineResult<()> {
        let invalid = |field: &str| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: format!("{} must be greater than zero", field),
        };

        if rates.working_days_per_month == 0 {
            return Err(invalid("rates.working_days_per_month"));
        }
        if rates.hours_per_day == 0 {
            return Err(invalid("rates.hours_per_day"));
        }
        Ok(())
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns the rate derivation divisors.
    pub fn rate_policy(&self) -> &RatePolicy {
        self.policy.rates()
    }
}

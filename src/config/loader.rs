//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the allowance
//! configuration from a YAML file and validating it at the boundary.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{ChildProfile, CurrencySpec, entity_id};

use super::types::{AllowanceConfig, ConfigFile};

/// Loads and provides access to the allowance configuration.
///
/// # File Format
///
/// ```text
/// currency: SEK              # optional, defaults to EUR
/// children:
///   - name: Alice
///     birthday: 2015-06-15   # YYYY-MM-DD
///     percentage: 30         # optional, defaults to 30
/// ```
///
/// Validation rejects malformed or future birthdays, percentages outside
/// 0..=100, blank names and names that map to the same entity id
/// (`Mary Ann` and `mary-ann` collide). Unknown currency codes are
/// accepted and fall back to EUR when formatting.
///
/// # Example
///
/// ```no_run
/// use allowance_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let loader = ConfigLoader::load("./config/allowance.yaml", today).unwrap();
/// for child in loader.config().children() {
///     println!("{} ({}%)", child.name, child.percentage);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AllowanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `today` - The date birthdays are validated against
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or misses required fields
    /// - Any child fails validation
    pub fn load<P: AsRef<Path>>(path: P, today: NaiveDate) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str, today)?;
        info!(
            path = %path_str,
            children = loader.config.children().len(),
            currency = %loader.config.currency(),
            "Loaded allowance configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    pub fn from_yaml_str(content: &str, today: NaiveDate) -> EngineResult<Self> {
        Self::parse(content, "<inline>", today)
    }

    fn parse(content: &str, path: &str, today: NaiveDate) -> EngineResult<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let config = Self::validate(file, today)?;
        Ok(Self { config })
    }

    /// Validates the raw file contents into an [`AllowanceConfig`].
    fn validate(file: ConfigFile, today: NaiveDate) -> EngineResult<AllowanceConfig> {
        let currency = file.currency.trim().to_uppercase();
        if !CurrencySpec::is_supported(&currency) {
            warn!(
                currency = %currency,
                fallback = %CurrencySpec::default_currency().code,
                "Unknown currency, amounts will be formatted with the default currency"
            );
        }

        if file.children.is_empty() {
            warn!("Configuration contains no children");
        }

        let mut children: Vec<ChildProfile> = Vec::with_capacity(file.children.len());
        let mut ids: Vec<String> = Vec::with_capacity(file.children.len());
        for entry in file.children {
            let child = ChildProfile::parse(entry.name, &entry.birthday, entry.percentage, today)?;

            let id = entity_id(&child.name);
            if ids.contains(&id) {
                return Err(EngineError::DuplicateChild { name: child.name });
            }
            ids.push(id);
            children.push(child);
        }

        Ok(AllowanceConfig::new(children, currency))
    }

    /// Returns the underlying allowance configuration.
    pub fn config(&self) -> &AllowanceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AllowanceConfig {
        self.config
    }
}

//! Configuration types for the allowance calculator.
//!
//! This module contains the raw structures deserialized from the YAML
//! configuration file and the validated [`AllowanceConfig`] built from them.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ChildProfile, DEFAULT_CURRENCY};

/// A child entry as written in the configuration file.
///
/// The birthday stays a string here so that malformed dates surface as
/// [`EngineError::InvalidDate`](crate::error::EngineError::InvalidDate)
/// rather than a generic parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildEntry {
    /// The child's name.
    pub name: String,
    /// Birthday in `YYYY-MM-DD` form.
    pub birthday: String,
    /// Allowance percentage; defaults to 30 when omitted.
    #[serde(default)]
    pub percentage: Option<Decimal>,
}

/// The configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// The children to calculate allowances for.
    pub children: Vec<ChildEntry>,
    /// Currency code used for formatting.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// The validated allowance configuration.
///
/// Holds an owned, immutable list of children and the global currency code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowanceConfig {
    /// Validated children, in file order.
    children: Vec<ChildProfile>,
    /// Currency code used for formatting.
    currency: String,
}

impl AllowanceConfig {
    /// Creates a new AllowanceConfig from its component parts.
    pub fn new(children: Vec<ChildProfile>, currency: impl Into<String>) -> Self {
        Self {
            children,
            currency: currency.into(),
        }
    }

    /// Returns all children.
    pub fn children(&self) -> &[ChildProfile] {
        &self.children
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Gets a child by name, ignoring case.
    pub fn child(&self, name: &str) -> Option<&ChildProfile> {
        self.children
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

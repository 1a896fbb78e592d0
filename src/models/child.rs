//! Child profile model.
//!
//! This module defines the [`ChildProfile`] struct, the validated record the
//! engine evaluates allowances for.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date format birthdays are written in.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Returns the percentage used when a child has none configured (30%).
pub fn default_percentage() -> Decimal {
    Decimal::new(30, 0)
}

/// A child whose allowance is calculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    /// Display name, unique within a configuration.
    pub name: String,
    /// The child's date of birth.
    pub birthday: NaiveDate,
    /// Percentage of the child's age paid as weekly allowance.
    #[serde(default = "default_percentage")]
    pub percentage: Decimal,
}

impl ChildProfile {
    /// Creates a validated profile.
    ///
    /// # Arguments
    ///
    /// * `name` - The child's name (must not be blank)
    /// * `birthday` - The date of birth (must not be after `today`)
    /// * `percentage` - Allowance percentage (must be within 0..=100)
    /// * `today` - The date the profile is validated against
    ///
    /// # Example
    ///
    /// ```
    /// use allowance_engine::models::ChildProfile;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let birthday = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
    /// let child = ChildProfile::new("Alice", birthday, Decimal::new(30, 0), today).unwrap();
    /// assert_eq!(child.name, "Alice");
    /// ```
    pub fn new(
        name: impl Into<String>,
        birthday: NaiveDate,
        percentage: Decimal,
        today: NaiveDate,
    ) -> EngineResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(EngineError::InvalidChild {
                message: "name must not be empty".to_string(),
            });
        }

        if birthday > today {
            return Err(EngineError::InvalidDate {
                value: birthday.format(BIRTHDAY_FORMAT).to_string(),
                message: format!("birthday for '{}' is in the future", name),
            });
        }

        if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidPercentage {
                child: name,
                value: percentage.normalize().to_string(),
            });
        }

        Ok(Self {
            name,
            birthday,
            percentage,
        })
    }

    /// Creates a validated profile from a `YYYY-MM-DD` birthday string.
    ///
    /// A missing percentage defaults to 30.
    pub fn parse(
        name: impl Into<String>,
        birthday: &str,
        percentage: Option<Decimal>,
        today: NaiveDate,
    ) -> EngineResult<Self> {
        let birthday = parse_birthday(birthday)?;
        Self::new(
            name,
            birthday,
            percentage.unwrap_or_else(default_percentage),
            today,
        )
    }
}

/// Builds the entity id `sensor.<slug>_allowance` for a child's name.
///
/// The slug is the lowercased name with every run of non-alphanumeric
/// characters replaced by a single underscore.
pub fn entity_id(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');

    if slug.is_empty() {
        "sensor.child_allowance".to_string()
    } else {
        format!("sensor.{}_allowance", slug)
    }
}

/// Parses a `YYYY-MM-DD` birthday string.
pub fn parse_birthday(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT).map_err(|e| {
        EngineError::InvalidDate {
            value: value.to_string(),
            message: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}

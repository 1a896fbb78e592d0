//! Named states and birthday notifications rendered from allowance results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceResult, BIRTHDAY_FORMAT, ChildProfile, entity_id};

/// One named value per child, as handed to a [`StateSink`](super::StateSink).
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::evaluate_child;
/// use allowance_engine::models::ChildProfile;
/// use allowance_engine::refresh::AllowanceState;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let child = ChildProfile {
///     name: "Alice".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2015, 6, 15).unwrap(),
///     percentage: Decimal::new(30, 0),
/// };
/// let result = evaluate_child(&child, "SEK", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap();
/// let state = AllowanceState::new(&child, "SEK", &result);
///
/// assert_eq!(state.entity_id, "sensor.alice_allowance");
/// assert_eq!(state.attributes["formatted_value"], "2.40 kr");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceState {
    /// Stable identifier derived from the child's name.
    pub entity_id: String,
    /// Human-readable name.
    pub friendly_name: String,
    /// The current weekly allowance.
    pub value: Decimal,
    /// Currency code of `value`.
    pub unit: String,
    /// Supporting details: age, formatted value, birthday proximity.
    pub attributes: serde_json::Value,
}

impl AllowanceState {
    /// Renders a child's evaluation as a named state.
    pub fn new(child: &ChildProfile, currency: &str, result: &AllowanceResult) -> Self {
        Self {
            entity_id: entity_id(&child.name),
            friendly_name: format!("{}'s Allowance", child.name),
            value: result.allowance,
            unit: currency.to_string(),
            attributes: serde_json::json!({
                "age": result.age,
                "next_age": result.next_age,
                "formatted_value": result.formatted_value,
                "percentage": child.percentage.normalize().to_string(),
                "currency": currency,
                "birthday": child.birthday.format(BIRTHDAY_FORMAT).to_string(),
                "days_until_birthday": result.days_until_birthday,
                "next_allowance": result.next_allowance.to_string(),
                "is_birthday_today": result.is_birthday_today,
            }),
        }
    }
}

/// A birthday message for one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayNotification {
    /// The child whose birthday it is.
    pub child: String,
    /// Short title.
    pub title: String,
    /// Full message including the new formatted allowance.
    pub message: String,
}

impl BirthdayNotification {
    /// Builds the notification for a child evaluated on their birthday.
    ///
    /// The amount is the allowance at the age reached that day.
    pub fn new(child: &ChildProfile, result: &AllowanceResult) -> Self {
        Self {
            child: child.name.clone(),
            title: format!("Allowance Update for {}", child.name),
            message: format!(
                "It's {}'s birthday! New weekly allowance: {}",
                child.name, result.formatted_value
            ),
        }
    }
}

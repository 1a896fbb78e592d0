//! Per-child evaluation.
//!
//! This module composes the age, allowance, birthday and formatting
//! functions into a single [`AllowanceResult`] for a child on an as-of date,
//! and evaluates batches of children with per-child failure isolation.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{AllowanceResult, ChildProfile};

use super::{
    calculate_age, calculate_allowance, days_until_birthday, format_allowance, is_birthday_today,
};

/// Evaluates one child's allowance on `as_of`.
///
/// # Errors
///
/// Fails only when [`calculate_age`] fails, i.e. the birthday is after
/// `as_of`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::evaluate_child;
/// use allowance_engine::models::ChildProfile;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let child = ChildProfile {
///     name: "Alice".to_string(),
///     birthday: NaiveDate::from_ymd_opt(2015, 6, 15).unwrap(),
///     percentage: Decimal::new(30, 0),
/// };
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let result = evaluate_child(&child, "USD", as_of).unwrap();
/// assert_eq!(result.age, 9);
/// assert_eq!(result.allowance, Decimal::from_str("2.70").unwrap());
/// assert!(result.is_birthday_today);
/// assert_eq!(result.formatted_value, "$2.70");
/// ```
pub fn evaluate_child(
    profile: &ChildProfile,
    currency_code: &str,
    as_of: NaiveDate,
) -> EngineResult<AllowanceResult> {
    let age = calculate_age(profile.birthday, as_of)?;
    let allowance = calculate_allowance(age, profile.percentage);
    let next_age = age + 1;

    Ok(AllowanceResult {
        age,
        allowance,
        is_birthday_today: is_birthday_today(profile.birthday, as_of),
        next_age,
        next_allowance: calculate_allowance(next_age, profile.percentage),
        days_until_birthday: days_until_birthday(profile.birthday, as_of),
        formatted_value: format_allowance(allowance, currency_code),
    })
}

/// The outcome of evaluating one child in a batch.
#[derive(Debug)]
pub struct ChildEvaluation<'a> {
    /// The child that was evaluated.
    pub child: &'a ChildProfile,
    /// The result, or the error that prevented it.
    pub outcome: EngineResult<AllowanceResult>,
}

/// Evaluates every child independently.
///
/// A failure for one child is recorded in its own [`ChildEvaluation`] and
/// logged; the remaining children are still evaluated. Results are returned
/// in input order.
pub fn evaluate_children<'a>(
    profiles: &'a [ChildProfile],
    currency_code: &str,
    as_of: NaiveDate,
) -> Vec<ChildEvaluation<'a>> {
    profiles
        .iter()
        .map(|child| {
            let outcome = evaluate_child(child, currency_code, as_of);
            match &outcome {
                Ok(result) => debug!(
                    child = %child.name,
                    age = result.age,
                    allowance = %result.allowance,
                    "Evaluated allowance"
                ),
                Err(err) => warn!(
                    child = %child.name,
                    error = %err,
                    "Allowance evaluation failed"
                ),
            }
            ChildEvaluation { child, outcome }
        })
        .collect()
}

//! Age calculation.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Calculates a child's age in whole years on `reference_date`.
///
/// The age is the difference in calendar years, minus one when the
/// reference date's (month, day) sorts before the birthday's (month, day),
/// i.e. the birthday has not happened yet that year. The result is never
/// negative.
///
/// For a Feb 29 birthday this means the age increments on Mar 1 in
/// non-leap years.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `birthday` is after
/// `reference_date`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_age;
/// use chrono::NaiveDate;
///
/// let birthday = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// let birthday_2024 = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// assert_eq!(calculate_age(birthday, day_before).unwrap(), 8);
/// assert_eq!(calculate_age(birthday, birthday_2024).unwrap(), 9);
/// ```
pub fn calculate_age(birthday: NaiveDate, reference_date: NaiveDate) -> EngineResult<u32> {
    if birthday > reference_date {
        return Err(EngineError::InvalidInput {
            message: format!(
                "birthday {} is after reference date {}",
                birthday, reference_date
            ),
        });
    }

    let mut age = reference_date.year() - birthday.year();
    if (reference_date.month(), reference_date.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }

    Ok(age.max(0) as u32)
}

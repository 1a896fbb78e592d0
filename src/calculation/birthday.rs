//! Birthday detection and next-birthday distance.
//!
//! A birthday is *observed* on its month and day in a given year. Feb 29
//! birthdays are observed on Mar 1 in non-leap years, which is also the day
//! [`calculate_age`](super::calculate_age) increments the age.

use chrono::{Datelike, NaiveDate};

/// Returns the date a birthday is observed on in `year`.
///
/// Only `None` at the edges of chrono's representable years.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::observed_birthday;
/// use chrono::NaiveDate;
///
/// let leap_day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// assert_eq!(observed_birthday(leap_day, 2023), NaiveDate::from_ymd_opt(2023, 3, 1));
/// assert_eq!(observed_birthday(leap_day, 2024), NaiveDate::from_ymd_opt(2024, 2, 29));
/// ```
pub fn observed_birthday(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Returns true if `check_date` is the child's observed birthday.
///
/// Month and day must match; the year is ignored.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::is_birthday_today;
/// use chrono::NaiveDate;
///
/// let birthday = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
/// assert!(is_birthday_today(birthday, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// assert!(!is_birthday_today(birthday, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
/// ```
pub fn is_birthday_today(birthday: NaiveDate, check_date: NaiveDate) -> bool {
    observed_birthday(birthday, check_date.year()) == Some(check_date)
}

/// Returns the number of days from `today` until the next observed birthday.
///
/// Returns 0 exactly when `today` is the birthday. If this year's birthday
/// has already passed, next year's is used.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::days_until_birthday;
/// use chrono::NaiveDate;
///
/// let birthday = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
/// assert_eq!(days_until_birthday(birthday, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()), 5);
/// assert_eq!(days_until_birthday(birthday, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 0);
/// assert_eq!(days_until_birthday(birthday, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()), 364);
/// ```
pub fn days_until_birthday(birthday: NaiveDate, today: NaiveDate) -> u32 {
    let next = match observed_birthday(birthday, today.year()) {
        Some(this_year) if this_year >= today => Some(this_year),
        _ => observed_birthday(birthday, today.year() + 1),
    };

    next.and_then(|date| u32::try_from((date - today).num_days()).ok())
        .unwrap_or(0)
}

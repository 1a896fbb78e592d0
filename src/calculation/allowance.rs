//! Percentage-based allowance calculation.
//!
//! A child's weekly allowance is a percentage of their age, paid from
//! [`MINIMUM_ALLOWANCE_AGE`] onwards. Amounts are rounded to 2 decimal
//! places, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Children younger than this receive no allowance.
pub const MINIMUM_ALLOWANCE_AGE: u32 = 6;

/// Number of fractional digits allowance amounts carry.
pub const AMOUNT_SCALE: u32 = 2;

/// Clamps a percentage to 0..=100.
pub fn clamp_percentage(percentage: Decimal) -> Decimal {
    percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Rounds a monetary amount to [`AMOUNT_SCALE`] places, half away from zero,
/// and pads it to exactly that scale.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_SCALE);
    rounded
}

/// Calculates the weekly allowance for a child of the given age.
///
/// The percentage is clamped to 0..=100 first. Ages below
/// [`MINIMUM_ALLOWANCE_AGE`] yield zero; otherwise the result is
/// `age * percentage / 100` rounded to 2 places, half away from zero.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_allowance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let thirty = Decimal::new(30, 0);
/// assert_eq!(calculate_allowance(9, thirty), Decimal::from_str("2.70").unwrap());
/// assert_eq!(calculate_allowance(5, thirty), Decimal::ZERO);
/// ```
pub fn calculate_allowance(age: u32, percentage: Decimal) -> Decimal {
    let percentage = clamp_percentage(percentage);

    if age < MINIMUM_ALLOWANCE_AGE {
        return round_amount(Decimal::ZERO);
    }

    round_amount(Decimal::from(age) * percentage / Decimal::ONE_HUNDRED)
}

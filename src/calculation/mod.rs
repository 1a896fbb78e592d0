//! Calculation logic for the Allowance Engine.
//!
//! This module contains the pure functions the engine is built from: age
//! from birthday, percentage-based allowance, birthday detection,
//! next-birthday distance, currency formatting, and per-child evaluation.
//! Every date-dependent function takes its reference date explicitly.

mod age;
mod allowance;
mod birthday;
mod evaluate;
mod formatting;

pub use age::calculate_age;
pub use allowance::{
    AMOUNT_SCALE, MINIMUM_ALLOWANCE_AGE, calculate_allowance, clamp_percentage, round_amount,
};
pub use birthday::{days_until_birthday, is_birthday_today, observed_birthday};
pub use evaluate::{ChildEvaluation, evaluate_child, evaluate_children};
pub use formatting::format_allowance;

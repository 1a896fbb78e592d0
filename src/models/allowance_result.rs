//! The result of evaluating one child's allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A freshly computed allowance for one child on one as-of date.
///
/// Created on every evaluation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceResult {
    /// Age in whole years on the as-of date.
    pub age: u32,
    /// Weekly allowance at `age`, rounded to 2 decimal places.
    pub allowance: Decimal,
    /// Whether the as-of date is the child's (observed) birthday.
    pub is_birthday_today: bool,
    /// The age the child turns on their next birthday.
    pub next_age: u32,
    /// Weekly allowance at `next_age`.
    pub next_allowance: Decimal,
    /// Days until the next observed birthday, 0 on the birthday itself.
    pub days_until_birthday: u32,
    /// `allowance` rendered in the configured currency.
    pub formatted_value: String,
}

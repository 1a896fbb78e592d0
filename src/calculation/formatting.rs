//! Currency-aware formatting of allowance amounts.

use rust_decimal::Decimal;

use crate::models::{CurrencyPosition, CurrencySpec};

use super::allowance::round_amount;

/// Formats an amount with exactly two decimals and the currency symbol.
///
/// Prefix currencies render as `symbol + amount` with no space; suffix
/// currencies render as `amount + " " + symbol`. Unknown currency codes fall
/// back to EUR.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::format_allowance;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(25, 1); // 2.5
/// assert_eq!(format_allowance(amount, "USD"), "$2.50");
/// assert_eq!(format_allowance(amount, "SEK"), "2.50 kr");
/// assert_eq!(format_allowance(amount, "XYZ"), "€2.50");
/// ```
pub fn format_allowance(amount: Decimal, currency_code: &str) -> String {
    let currency = CurrencySpec::lookup(currency_code);
    let amount = round_amount(amount);

    match currency.position {
        CurrencyPosition::Prefix => format!("{}{:.2}", currency.symbol, amount),
        CurrencyPosition::Suffix => format!("{:.2} {}", amount, currency.symbol),
    }
}

//! Core data models for the Allowance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allowance_result;
mod child;
mod currency;

pub use allowance_result::AllowanceResult;
pub use child::{BIRTHDAY_FORMAT, ChildProfile, default_percentage, entity_id, parse_birthday};
pub use currency::{CurrencyPosition, CurrencySpec, DEFAULT_CURRENCY, SUPPORTED_CURRENCIES};

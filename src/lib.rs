//! Weekly Allowance Engine
//!
//! This crate calculates children's weekly allowances from their age and a
//! per-child percentage, formats them in a configured currency, and refreshes
//! the results daily with birthday notifications.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod refresh;

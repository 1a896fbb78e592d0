//! Configuration loading and management for the Allowance Engine.
//!
//! This module loads the list of children and the currency from a YAML file
//! and validates them once, producing strongly-typed
//! [`ChildProfile`](crate::models::ChildProfile)s.
//!
//! # Example
//!
//! ```no_run
//! use allowance_engine::config::ConfigLoader;
//! use chrono::Local;
//!
//! let today = Local::now().date_naive();
//! let config = ConfigLoader::load("./config/allowance.yaml", today).unwrap();
//! println!("Currency: {}", config.config().currency());
//! ```

mod loader;
mod source;
mod types;

pub use loader::ConfigLoader;
pub use source::{ConfigSource, FileConfigSource};
pub use types::{AllowanceConfig, ChildEntry, ConfigFile};

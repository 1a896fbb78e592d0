//! Sources the daily refresh reloads its configuration from.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::EngineResult;

use super::loader::ConfigLoader;
use super::types::AllowanceConfig;

/// Provides a freshly validated configuration on demand.
pub trait ConfigSource {
    /// Loads and validates the configuration against `today`.
    fn load(&self, today: NaiveDate) -> EngineResult<AllowanceConfig>;
}

/// Reads the configuration from a YAML file on every load.
///
/// # Example
///
/// ```no_run
/// use allowance_engine::config::{ConfigSource, FileConfigSource};
/// use chrono::NaiveDate;
///
/// let source = FileConfigSource::new("./config/allowance.yaml");
/// let config = source.load(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap();
/// assert_eq!(config.currency(), "SEK");
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self, today: NaiveDate) -> EngineResult<AllowanceConfig> {
        ConfigLoader::load(&self.path, today).map(ConfigLoader::into_config)
    }
}

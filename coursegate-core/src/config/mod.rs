//! Configuration system for Coursegate
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Code** - fields set on the loaded struct
//! 2. **Environment Variables** - `CG_*`
//! 3. **Config File** (`coursegate.toml`)
//! 4. **Defaults**
//!
//! # Example
//!
//! ```no_run
//! use coursegate_core::config::CoursegateConfig;
//!
//! // Load with full supersedence
//! let config = CoursegateConfig::load()?;
//!
//! // Or load from a specific file
//! let config = CoursegateConfig::load_from("/etc/coursegate/coursegate.toml")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod access;
pub mod logging;

pub use access::AccessConfig;
pub use logging::LoggingSettings;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "coursegate.toml";

/// Complete Coursegate configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursegateConfig {
    pub access: AccessConfig,
    pub logging: LoggingSettings,
}

impl CoursegateConfig {
    /// Load `coursegate.toml` from the working directory with full supersedence
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_env(path, |key| env::var(key).ok())
    }

    fn load_with_env(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_from(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.access.merge(other.access);
        self.logging.merge(other.logging);
    }

    /// Apply `CG_*` environment variables
    pub fn apply_env_vars(&mut self) {
        self.apply_env_from(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.access.apply_env_from(&lookup);
        self.logging.apply_env_from(&lookup);
    }

    pub fn validate(&self) -> Result<()> {
        self.access.validate().context("Invalid [access] section")?;
        self.logging.validate().context("Invalid [logging] section")?;
        Ok(())
    }
}

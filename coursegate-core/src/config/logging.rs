//! Logging configuration section

use crate::logging::{LogFormat, LogLevel, LoggingConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// error, warn, info, debug or trace
    /// Env: CG_LOG_LEVEL
    /// Default: "warn"
    pub level: String,

    /// json, human, logfmt, or `custom:<template>`
    /// Env: CG_LOG_FORMAT
    /// Default: "human"
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: "human".to_string() }
    }
}

impl LoggingSettings {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_from(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("CG_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = lookup("CG_LOG_FORMAT") {
            self.format = format;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.to_logging_config().map(|_| ())
    }

    /// Build the logger configuration these settings describe
    pub fn to_logging_config(&self) -> Result<LoggingConfig> {
        let level: LogLevel =
            self.level.parse().with_context(|| format!("Unknown log level `{}`", self.level))?;
        let format: LogFormat =
            self.format.parse().with_context(|| format!("Unknown log format `{}`", self.format))?;
        Ok(LoggingConfig::default().with_level(level).with_format(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_logging_config() {
        let settings = LoggingSettings { level: "debug".to_string(), format: "logfmt".to_string() };
        let config = settings.to_logging_config().unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Logfmt);
    }

    #[test]
    fn test_rejects_unknown_values() {
        let settings = LoggingSettings { level: "loud".to_string(), ..Default::default() };
        assert!(settings.validate().is_err());

        let settings = LoggingSettings { format: "xml".to_string(), ..Default::default() };
        assert!(settings.validate().is_err());
    }
}

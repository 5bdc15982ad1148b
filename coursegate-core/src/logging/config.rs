//! Logger configuration

use crate::logging::{LogFormat, LogOutput};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Declarative description of the logger
#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level to emit
    pub level: LogLevel,
    /// Where entries are written
    pub outputs: Vec<LogOutput>,
    /// Default format (outputs may override it)
    pub format: LogFormat,
    /// Fields attached to every entry
    pub context_fields: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::cli()
    }
}

/// Severity levels, most severe first
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    #[error("unknown log level `{0}` (expected error, warn, info, debug or trace)")]
    UnknownLevel(String),
    #[error("unknown log format `{0}` (expected json, human, logfmt or custom:<template>)")]
    UnknownFormat(String),
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    pub fn to_level_filter(&self) -> log::LevelFilter {
        log::Level::from(self.clone()).to_level_filter()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::UnknownLevel(s.to_string())),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

impl LoggingConfig {
    /// Human-readable warnings on stderr, keeping stdout free for command output
    pub fn cli() -> Self {
        Self {
            level: LogLevel::Warn,
            outputs: vec![LogOutput::Stderr { format: None }],
            format: LogFormat::Human,
            context_fields: BTreeMap::new(),
        }
    }

    /// Structured JSON on stdout for services embedding the library
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            outputs: vec![LogOutput::Stdout { format: None }],
            format: LogFormat::Json,
            context_fields: BTreeMap::new(),
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Add a context field that appears in every log entry
    pub fn with_context_field(mut self, key: &str, value: &str) -> Self {
        self.context_fields.insert(key.to_string(), value.to_string());
        self
    }

    /// Add stdout output with a specific format
    pub fn with_stdout(mut self, format: LogFormat) -> Self {
        self.outputs.push(LogOutput::Stdout { format: Some(format) });
        self
    }

    /// Add stderr output with a specific format
    pub fn with_stderr(mut self, format: LogFormat) -> Self {
        self.outputs.push(LogOutput::Stderr { format: Some(format) });
        self
    }
}

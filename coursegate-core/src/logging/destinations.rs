//! Log outputs and the structured entry written to them

use crate::logging::{LogFormat, LogLevel, LoggingConfig};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

/// Where logs should be sent
#[derive(Clone, Debug, PartialEq)]
pub enum LogOutput {
    Stdout {
        /// Override the default format for this output
        format: Option<LogFormat>,
    },
    Stderr {
        /// Override the default format for this output
        format: Option<LogFormat>,
    },
}

/// A structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    /// Usually the module path
    pub target: String,
    /// Context fields plus anything added with [`LogEntry::with_field`]
    pub fields: BTreeMap<String, Value>,
    /// Source `file:line`, when the record carries it
    pub location: Option<(String, u32)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            target: target.into(),
            fields: BTreeMap::new(),
            location: None,
        }
    }

    /// Build an entry from a `log::Record`, attaching the configured context fields
    pub fn from_log_record(record: &log::Record, config: &LoggingConfig) -> Self {
        let mut entry =
            Self::new(record.level().into(), record.args().to_string(), record.target());

        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            entry.location = Some((file.to_string(), line));
        }
        for (key, value) in &config.context_fields {
            entry.fields.insert(key.clone(), Value::String(value.clone()));
        }
        entry
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_record() {
        let config = LoggingConfig::cli().with_context_field("service", "coursegate");
        let entry = LogEntry::from_log_record(
            &log::Record::builder()
                .args(format_args!("Dropping global right: {}", "content"))
                .level(log::Level::Warn)
                .target("coursegate_core::rbac")
                .file(Some("src/rbac/principal.rs"))
                .line(Some(39))
                .build(),
            &config,
        );

        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.message, "Dropping global right: content");
        assert_eq!(entry.target, "coursegate_core::rbac");
        assert_eq!(entry.location, Some(("src/rbac/principal.rs".to_string(), 39)));
        assert_eq!(entry.fields.get("service"), Some(&Value::from("coursegate")));
    }

    #[test]
    fn test_with_field() {
        let entry = LogEntry::new(LogLevel::Debug, "Flag cache miss", "cache")
            .with_field("entries", 3)
            .with_field("department", "dept-1");

        assert_eq!(entry.fields.len(), 2);
        assert_eq!(entry.fields["entries"], Value::from(3));
    }
}

//! Log formatting styles

use crate::logging::destinations::LogEntry;
use crate::logging::LoggingError;
use serde_json::{Map, Value};
use std::str::FromStr;

/// How entries are rendered
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// `{"timestamp":"...","level":"WARN","target":"...","message":"..."}`
    Json,

    /// `2026-01-15 10:30:00.000 WARN  [coursegate_core::rbac] Dropping global right`
    Human,

    /// `timestamp=... level=WARN target=coursegate_core::rbac message="..."`
    Logfmt,

    /// Template with `{timestamp}`, `{level}`, `{target}`, `{message}`, `{file}`,
    /// `{line}` and `{<field>}` placeholders
    Custom(String),
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    /// `json`, `human`, `logfmt` or `custom:<template>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(template) = s.strip_prefix("custom:") {
            return Ok(LogFormat::Custom(template.to_string()));
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "human" | "text" => Ok(LogFormat::Human),
            "logfmt" => Ok(LogFormat::Logfmt),
            _ => Err(LoggingError::UnknownFormat(s.to_string())),
        }
    }
}

impl LogFormat {
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        match self {
            LogFormat::Json => format_json(entry),
            LogFormat::Human => format_human(entry),
            LogFormat::Logfmt => format_logfmt(entry),
            LogFormat::Custom(template) => format_custom(entry, template),
        }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

fn format_json(entry: &LogEntry) -> String {
    let mut json = Map::new();
    json.insert("timestamp".into(), Value::String(entry.timestamp.to_rfc3339()));
    json.insert("level".into(), Value::String(entry.level.to_string()));
    json.insert("target".into(), Value::String(entry.target.clone()));
    json.insert("message".into(), Value::String(entry.message.clone()));

    if let Some((file, line)) = &entry.location {
        json.insert("file".into(), Value::String(file.clone()));
        json.insert("line".into(), Value::from(*line));
    }
    for (key, value) in &entry.fields {
        json.insert(key.clone(), value.clone());
    }

    Value::Object(json).to_string()
}

fn format_human(entry: &LogEntry) -> String {
    let mut line = format!(
        "{} {:<5} [{}] {}",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        entry.level,
        entry.target,
        entry.message
    );
    for (key, value) in &entry.fields {
        line.push_str(&format!(" {}={}", key, plain(value)));
    }
    line
}

fn format_logfmt(entry: &LogEntry) -> String {
    let mut parts = vec![
        format!("timestamp={}", entry.timestamp.to_rfc3339()),
        format!("level={}", entry.level),
        format!("target={}", entry.target),
        format!("message={}", quoted(&entry.message)),
    ];

    if let Some((file, line)) = &entry.location {
        parts.push(format!("file={}", quoted(file)));
        parts.push(format!("line={}", line));
    }
    for (key, value) in &entry.fields {
        let rendered = match value {
            Value::Number(_) | Value::Bool(_) => value.to_string(),
            other => quoted(&plain(other)),
        };
        parts.push(format!("{}={}", key, rendered));
    }

    parts.join(" ")
}

fn format_custom(entry: &LogEntry, template: &str) -> String {
    let (file, line) = match &entry.location {
        Some((file, line)) => (file.clone(), line.to_string()),
        None => (String::new(), String::new()),
    };

    let mut result = template
        .replace("{timestamp}", &entry.timestamp.to_rfc3339())
        .replace("{level}", entry.level.as_str())
        .replace("{target}", &entry.target)
        .replace("{message}", &entry.message)
        .replace("{file}", &file)
        .replace("{line}", &line);

    for (key, value) in &entry.fields {
        result = result.replace(&format!("{{{}}}", key), &plain(value));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    fn entry() -> LogEntry {
        LogEntry::new(LogLevel::Warn, "Dropping global right", "coursegate_core::rbac")
            .with_field("department", "dept-1")
    }

    #[test]
    fn test_json_format() {
        let formatted = LogFormat::Json.format_entry(&entry());
        let parsed: Value = serde_json::from_str(&formatted).unwrap();

        assert_eq!(parsed["message"], "Dropping global right");
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["department"], "dept-1");
    }

    #[test]
    fn test_human_format() {
        let formatted = LogFormat::Human.format_entry(&entry());
        assert!(formatted.contains("WARN  [coursegate_core::rbac] Dropping global right"));
        assert!(formatted.ends_with(" department=dept-1"));
    }

    #[test]
    fn test_logfmt_format() {
        let formatted = LogFormat::Logfmt.format_entry(&entry());
        assert!(formatted.contains("level=WARN"));
        assert!(formatted.contains("message=\"Dropping global right\""));
        assert!(formatted.contains("department=\"dept-1\""));
    }

    #[test]
    fn test_custom_format() {
        let format: LogFormat = "custom:[{level}] {department}: {message}".parse().unwrap();
        assert_eq!(format.format_entry(&entry()), "[WARN] dept-1: Dropping global right");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("logfmt".parse::<LogFormat>(), Ok(LogFormat::Logfmt));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}

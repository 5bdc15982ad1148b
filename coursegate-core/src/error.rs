//! Error types for the boundaries of the access model
//!
//! Resolution itself never fails: a malformed capability is a non-match and an
//! absent principal holds no rights. Errors only surface where outside data
//! enters the crate (parsing capability strings, converting rights snapshots,
//! looking up flags by name).

use thiserror::Error;

/// Result alias used across `coursegate-core`
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors raised at the edges of the access model
#[derive(Debug, Error)]
pub enum AccessError {
    /// A capability string does not follow the `domain:resource:action` grammar
    #[error("invalid capability `{capability}`: {reason}")]
    InvalidCapability { capability: String, reason: String },

    /// A user type outside `learner`, `staff`, `global-admin`
    #[error("unknown user type `{0}`")]
    UnknownUserType(String),

    /// A feature flag name that is not in the rule table
    #[error("unknown feature flag `{0}`")]
    UnknownFlag(String),

    /// The rights snapshot could not be decoded
    #[error("malformed rights snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl AccessError {
    pub(crate) fn invalid_capability(capability: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCapability { capability: capability.to_string(), reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AccessError::invalid_capability("content::read", "empty segment");
        assert_eq!(err.to_string(), "invalid capability `content::read`: empty segment");

        let err = AccessError::UnknownUserType("teacher".to_string());
        assert_eq!(err.to_string(), "unknown user type `teacher`");
    }

    #[test]
    fn test_snapshot_error_from_serde() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: AccessError = parse.unwrap_err().into();
        assert!(matches!(err, AccessError::Snapshot(_)));
    }
}

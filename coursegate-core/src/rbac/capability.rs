//! Capability grammar
//!
//! A capability names one grantable right. Four shapes are accepted:
//!
//! | Form | Kind |
//! |------|------|
//! | `domain:resource:action` | concrete |
//! | `domain:action` | concrete, domain-level (`system:admin`) |
//! | `domain:*` | domain wildcard |
//! | `domain:resource:*` | resource wildcard |
//!
//! Segments are any non-empty text without `:`. The wildcard `*` may only
//! appear as the last segment.

use crate::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The capability that grants everything, checked before any parsing.
pub const SUPER_ADMIN: &str = "system:*";

const WILDCARD: &str = "*";

/// Shape of a parsed capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// `domain:resource:action` or `domain:action`
    Concrete,
    /// `domain:*`
    DomainWildcard,
    /// `domain:resource:*`
    ResourceWildcard,
}

impl CapabilityKind {
    pub fn is_wildcard(self) -> bool {
        !matches!(self, Self::Concrete)
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete => write!(f, "concrete"),
            Self::DomainWildcard => write!(f, "domain wildcard"),
            Self::ResourceWildcard => write!(f, "resource wildcard"),
        }
    }
}

/// A validated capability string
///
/// Equality, ordering and hashing only look at the text, so a set of
/// capabilities can be queried with a plain `&str`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Capability {
    text: String,
    kind: CapabilityKind,
}

impl Capability {
    /// Parse and validate a capability string
    pub fn parse(text: &str) -> Result<Self> {
        let segments: Vec<&str> = text.split(':').collect();

        if segments.len() < 2 {
            return Err(AccessError::invalid_capability(
                text,
                "expected at least two colon-delimited segments",
            ));
        }
        if segments.len() > 3 {
            return Err(AccessError::invalid_capability(text, "expected at most three segments"));
        }

        let last = segments.len() - 1;
        for (index, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(AccessError::invalid_capability(text, "empty segment"));
            }
            if *segment == WILDCARD {
                if index != last {
                    return Err(AccessError::invalid_capability(
                        text,
                        "`*` is only allowed as the last segment",
                    ));
                }
            }
        }

        let kind = match (segments.len(), segments[last] == WILDCARD) {
            (2, true) => CapabilityKind::DomainWildcard,
            (3, true) => CapabilityKind::ResourceWildcard,
            _ => CapabilityKind::Concrete,
        };

        Ok(Self { text: text.to_string(), kind })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    pub fn is_wildcard(&self) -> bool {
        self.kind.is_wildcard()
    }

    /// Whether this is the `system:*` super-admin grant
    pub fn is_super_admin(&self) -> bool {
        self.text == SUPER_ADMIN
    }

    /// First segment (`content` in `content:courses:create`)
    pub fn domain(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Middle segment of a three-segment capability
    pub fn resource(&self) -> Option<&str> {
        let mut segments = self.segments();
        let _domain = segments.next();
        let middle = segments.next();
        segments.next().and(middle)
    }

    /// Last segment, unless it is the wildcard
    pub fn action(&self) -> Option<&str> {
        match self.segments().last() {
            Some(WILDCARD) | None => None,
            Some(action) => Some(action),
        }
    }

    /// Grant strings that would satisfy a request for this capability.
    ///
    /// Always the capability itself and its domain wildcard; a
    /// three-segment capability is also covered by its resource wildcard.
    pub fn covering_grants(&self) -> Vec<String> {
        let mut grants = vec![self.text.clone()];
        let domain_wildcard = format!("{}:{}", self.domain(), WILDCARD);
        if domain_wildcard != self.text {
            grants.push(domain_wildcard);
        }
        if let Some(resource) = self.resource() {
            let resource_wildcard = format!("{}:{}:{}", self.domain(), resource, WILDCARD);
            if resource_wildcard != self.text {
                grants.push(resource_wildcard);
            }
        }
        grants
    }

    /// Whether holding `self` satisfies a request for `requested`
    pub fn covers(&self, requested: &Capability) -> bool {
        if self.text == requested.text {
            return true;
        }
        match self.kind {
            CapabilityKind::Concrete => false,
            CapabilityKind::DomainWildcard => self.domain() == requested.domain(),
            CapabilityKind::ResourceWildcard => {
                self.domain() == requested.domain()
                    && self.resource().is_some()
                    && self.resource() == requested.resource()
            }
        }
    }

    fn segments(&self) -> std::str::Split<'_, char> {
        self.text.split(':')
    }
}

impl PartialEq for Capability {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Capability {}

impl Hash for Capability {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Capability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Capability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Borrow<str> for Capability {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Capability {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Capability {
    type Error = AccessError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Capability> for String {
    fn from(capability: Capability) -> Self {
        capability.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn cap(text: &str) -> Capability {
        Capability::parse(text).unwrap()
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!(cap("content:courses:create").kind(), CapabilityKind::Concrete);
        assert_eq!(cap("system:admin").kind(), CapabilityKind::Concrete);
        assert_eq!(cap("content:*").kind(), CapabilityKind::DomainWildcard);
        assert_eq!(cap("content:courses:*").kind(), CapabilityKind::ResourceWildcard);
        assert!(cap(SUPER_ADMIN).is_super_admin());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "",
            "*",
            "content",
            "content::create",
            ":courses:create",
            "content:courses:",
            "*:courses:create",
            "content:*:create",
            "content:courses:create:extra",
        ] {
            assert!(Capability::parse(text).is_err(), "`{}` should be rejected", text);
        }
    }

    #[test]
    fn test_parse_accepts_free_form_segments() {
        let dotted = cap("reports:sales.q1:read");
        assert_eq!(dotted.kind(), CapabilityKind::Concrete);
        assert_eq!(dotted.resource(), Some("sales.q1"));
        assert!(cap("reports:*").covers(&dotted));
        assert!(cap("reports:sales.q1:*").covers(&dotted));

        let upper = cap("Content:Courses:Read");
        assert_eq!(upper.domain(), "Content");
        assert!(cap("Content:*").covers(&upper));
        assert!(!cap("content:*").covers(&upper));
    }

    #[test]
    fn test_segments() {
        let full = cap("content:courses:create");
        assert_eq!(full.domain(), "content");
        assert_eq!(full.resource(), Some("courses"));
        assert_eq!(full.action(), Some("create"));

        let short = cap("reports:export");
        assert_eq!(short.domain(), "reports");
        assert_eq!(short.resource(), None);
        assert_eq!(short.action(), Some("export"));

        let wildcard = cap("content:courses:*");
        assert_eq!(wildcard.resource(), Some("courses"));
        assert_eq!(wildcard.action(), None);
    }

    #[test]
    fn test_covering_grants() {
        assert_eq!(
            cap("content:courses:create").covering_grants(),
            vec!["content:courses:create", "content:*", "content:courses:*"]
        );
        assert_eq!(cap("system:admin").covering_grants(), vec!["system:admin", "system:*"]);
        assert_eq!(cap("content:*").covering_grants(), vec!["content:*"]);
        assert_eq!(
            cap("content:courses:*").covering_grants(),
            vec!["content:courses:*", "content:*"]
        );
    }

    #[test]
    fn test_covers_matches_covering_grants() {
        let granted = ["content:*", "content:courses:*", "content:courses:read", "billing:*"];
        let requested = [
            "content:courses:read",
            "content:courses:manage",
            "content:lessons:manage",
            "content:publish",
            "billing:invoices:read",
            "reports:export",
        ];

        for g in granted {
            for r in requested {
                let via_covers = cap(g).covers(&cap(r));
                let via_grants = cap(r).covering_grants().iter().any(|k| k == g);
                assert_eq!(via_covers, via_grants, "{} covering {}", g, r);
            }
        }
    }

    #[test]
    fn test_set_lookup_by_str() {
        let set: BTreeSet<Capability> = [cap("content:*"), cap("billing:invoices:read")].into();
        assert!(set.contains("content:*"));
        assert!(set.contains("billing:invoices:read"));
        assert!(!set.contains("billing:*"));
    }

    #[test]
    fn test_serde_validates() {
        let parsed: Capability = serde_json::from_str("\"learner:pii:read\"").unwrap();
        assert_eq!(parsed.as_str(), "learner:pii:read");
        assert!(serde_json::from_str::<Capability>("\"learner\"").is_err());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"learner:pii:read\"");
    }
}

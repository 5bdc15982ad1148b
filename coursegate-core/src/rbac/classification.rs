//! Coarse user-type classification

use super::Principal;
use crate::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse classification of a principal; a principal may hold several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    Learner,
    Staff,
    GlobalAdmin,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Learner, UserType::Staff, UserType::GlobalAdmin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Learner => "learner",
            Self::Staff => "staff",
            Self::GlobalAdmin => "global-admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|user_type| user_type.as_str() == s)
            .ok_or_else(|| AccessError::UnknownUserType(s.to_string()))
    }
}

impl Principal {
    pub fn is_learner(&self) -> bool {
        self.has_user_type(UserType::Learner)
    }

    pub fn is_staff(&self) -> bool {
        self.has_user_type(UserType::Staff)
    }

    pub fn is_global_admin(&self) -> bool {
        self.has_user_type(UserType::GlobalAdmin)
    }

    /// Learner with no staff or admin classification
    pub fn is_learner_only(&self) -> bool {
        self.is_learner() && !self.is_staff_or_admin()
    }

    pub fn is_staff_or_admin(&self) -> bool {
        self.is_staff() || self.is_global_admin()
    }

    /// Highest-ranking user type held: global-admin, then staff, then learner
    pub fn primary_user_type(&self) -> Option<UserType> {
        self.user_types().iter().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_types() {
        assert_eq!("learner".parse::<UserType>().unwrap(), UserType::Learner);
        assert_eq!("staff".parse::<UserType>().unwrap(), UserType::Staff);
        assert_eq!("global-admin".parse::<UserType>().unwrap(), UserType::GlobalAdmin);
        assert!(matches!(
            "global_admin".parse::<UserType>(),
            Err(AccessError::UnknownUserType(name)) if name == "global_admin"
        ));
    }

    #[test]
    fn test_serde_names_match_display() {
        for user_type in UserType::ALL {
            let json = serde_json::to_string(&user_type).unwrap();
            assert_eq!(json, format!("\"{}\"", user_type));
        }
    }

    #[test]
    fn test_classification_helpers() {
        let learner = Principal::new().with_user_type(UserType::Learner);
        assert!(learner.is_learner_only());
        assert_eq!(learner.primary_user_type(), Some(UserType::Learner));

        let teaching_assistant =
            Principal::new().with_user_type(UserType::Learner).with_user_type(UserType::Staff);
        assert!(!teaching_assistant.is_learner_only());
        assert!(teaching_assistant.is_staff_or_admin());
        assert_eq!(teaching_assistant.primary_user_type(), Some(UserType::Staff));

        let admin = Principal::new().with_user_type(UserType::GlobalAdmin);
        assert!(admin.is_global_admin());
        assert!(!admin.is_staff());
        assert_eq!(admin.primary_user_type(), Some(UserType::GlobalAdmin));

        assert_eq!(Principal::new().primary_user_type(), None);
    }
}

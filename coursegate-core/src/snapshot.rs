//! Rights snapshot supplied by the authentication provider
//!
//! The provider hands over a JSON document with camelCase keys:
//!
//! ```json
//! {
//!   "globalRights": ["content:courses:read"],
//!   "departmentRights": { "dept-1": ["content:*"] },
//!   "userTypes": ["staff"],
//!   "activeDepartmentId": "dept-1",
//!   "isAdminSessionActive": false,
//!   "departmentRoles": { "dept-1": ["instructor"] },
//!   "roles": ["employee"]
//! }
//! ```
//!
//! [`RightsSnapshot::into_principal`] turns it into a [`Principal`].

use crate::error::Result;
use crate::rbac::{Capability, DepartmentId, Principal, RoleDirectory, UserType};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire shape of a principal's rights
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RightsSnapshot {
    pub global_rights: Vec<String>,
    pub department_rights: BTreeMap<DepartmentId, Vec<String>>,
    pub user_types: Vec<String>,
    pub active_department_id: Option<DepartmentId>,
    pub is_admin_session_active: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub department_roles: BTreeMap<DepartmentId, Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl RightsSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build the principal described by this snapshot
    ///
    /// Malformed rights are dropped with a warning, or rejected when `strict`
    /// is set. Unknown user types are always rejected.
    pub fn into_principal(self, strict: bool) -> Result<Principal> {
        let mut principal = Principal::new()
            .with_active_department(self.active_department_id)
            .with_admin_session(self.is_admin_session_active);

        for right in &self.global_rights {
            if let Some(capability) = parse_right(right, None, strict)? {
                principal = principal.with_global_capability(capability);
            }
        }

        for (department_id, rights) in self.department_rights {
            principal = principal.with_department(department_id.as_str());
            for right in &rights {
                if let Some(capability) = parse_right(right, Some(&department_id), strict)? {
                    principal = principal.with_department_capability(department_id.as_str(), capability);
                }
            }
        }

        for user_type in &self.user_types {
            principal = principal.with_user_type(user_type.parse::<UserType>()?);
        }

        let mut roles = RoleDirectory::new();
        for role in self.roles {
            roles = roles.with_role(role);
        }
        for (department_id, names) in self.department_roles {
            for role in names {
                roles = roles.with_department_role(department_id.as_str(), role);
            }
        }

        debug!(
            "Built principal with {} global rights across {} departments",
            principal.global_rights().len(),
            principal.departments().count()
        );
        Ok(principal.with_roles(roles))
    }
}

impl From<&Principal> for RightsSnapshot {
    fn from(principal: &Principal) -> Self {
        let strings = |rights: &std::collections::BTreeSet<Capability>| {
            rights.iter().map(|capability| capability.to_string()).collect::<Vec<_>>()
        };

        Self {
            global_rights: strings(principal.global_rights()),
            department_rights: principal
                .all_department_rights()
                .iter()
                .map(|(department_id, rights)| (department_id.clone(), strings(rights)))
                .collect(),
            user_types: principal.user_types().iter().map(|t| t.to_string()).collect(),
            active_department_id: principal.active_department().map(str::to_string),
            is_admin_session_active: principal.admin_session_active(),
            department_roles: principal
                .roles()
                .departments
                .iter()
                .map(|(department_id, roles)| (department_id.clone(), roles.iter().cloned().collect()))
                .collect(),
            roles: principal.roles().unscoped.iter().cloned().collect(),
        }
    }
}

fn parse_right(right: &str, department_id: Option<&str>, strict: bool) -> Result<Option<Capability>> {
    match Capability::parse(right) {
        Ok(capability) => Ok(Some(capability)),
        Err(err) if strict => Err(err),
        Err(err) => {
            match department_id {
                Some(department_id) => warn!("Dropping right for department {}: {}", department_id, err),
                None => warn!("Dropping global right: {}", err),
            }
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessError;
    use crate::rbac::PermissionResolver;

    const SNAPSHOT: &str = r#"{
        "globalRights": ["content:courses:read", "content:courses:read"],
        "departmentRights": { "dept-1": ["content:*"], "dept-2": [] },
        "userTypes": ["staff"],
        "activeDepartmentId": "dept-1",
        "isAdminSessionActive": false,
        "departmentRoles": { "dept-1": ["instructor"] },
        "roles": ["employee"]
    }"#;

    #[test]
    fn test_snapshot_into_principal() {
        let principal = RightsSnapshot::from_json(SNAPSHOT).unwrap().into_principal(true).unwrap();

        assert_eq!(principal.global_rights().len(), 1);
        assert_eq!(principal.departments().collect::<Vec<_>>(), vec!["dept-1", "dept-2"]);
        assert_eq!(principal.active_department(), Some("dept-1"));
        assert!(principal.has_user_type(UserType::Staff));
        assert!(!principal.admin_session_active());
        assert!(PermissionResolver::has_role(Some(&principal), "instructor", None));
        assert!(!PermissionResolver::has_role(Some(&principal), "employee", Some("dept-9")));
        assert!(principal.roles().has_role("employee", None));
        assert!(PermissionResolver::has_permission(
            Some(&principal),
            "content:lessons:manage",
            Some("dept-1")
        ));
    }

    #[test]
    fn test_missing_fields_default() {
        let principal = RightsSnapshot::from_json("{}").unwrap().into_principal(true).unwrap();
        assert_eq!(principal, Principal::new());
    }

    #[test]
    fn test_malformed_rights_lenient_and_strict() {
        let json = r#"{ "globalRights": ["content", "billing:*"], "departmentRights": { "d": ["::"] } }"#;

        let principal = RightsSnapshot::from_json(json).unwrap().into_principal(false).unwrap();
        assert_eq!(principal.global_rights().len(), 1);
        assert_eq!(principal.department_rights("d").map(|r| r.len()), Some(0));

        let err = RightsSnapshot::from_json(json).unwrap().into_principal(true).unwrap_err();
        assert!(matches!(err, AccessError::InvalidCapability { ref capability, .. } if capability == "content"));
    }

    #[test]
    fn test_unknown_user_type_rejected() {
        let json = r#"{ "userTypes": ["teacher"] }"#;
        let err = RightsSnapshot::from_json(json).unwrap().into_principal(false).unwrap_err();
        assert!(matches!(err, AccessError::UnknownUserType(ref name) if name == "teacher"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(RightsSnapshot::from_json("[1, 2"), Err(AccessError::Snapshot(_))));
    }

    #[test]
    fn test_principal_back_to_snapshot() {
        let original = RightsSnapshot::from_json(SNAPSHOT).unwrap();
        let principal = original.clone().into_principal(true).unwrap();
        let snapshot = RightsSnapshot::from(&principal);

        assert_eq!(snapshot.global_rights, vec!["content:courses:read"]);
        assert_eq!(snapshot.department_rights, original.department_rights);
        assert_eq!(snapshot.user_types, vec!["staff"]);
        assert_eq!(snapshot.department_roles, original.department_roles);
        assert_eq!(snapshot.roles, original.roles);
    }
}

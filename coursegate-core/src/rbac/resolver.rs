//! Capability resolution against a principal's rights

use super::{Capability, PermissionChecker, Principal, SUPER_ADMIN};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Stateless evaluator for capability and role checks
///
/// Every check takes the principal as an explicit argument; an absent
/// principal holds no rights. Global rights are consulted first and
/// independently of department rights, so a department can only add access,
/// never take away a global grant. Nothing here panics or errors: a malformed
/// capability is simply not granted.
pub struct PermissionResolver;

impl PermissionResolver {
    /// Check a single capability
    ///
    /// `department_id` widens the check to that department's rights. When it
    /// is `None` only global rights apply; the principal's active department
    /// is not used implicitly.
    pub fn has_permission(
        principal: Option<&Principal>,
        capability: &str,
        department_id: Option<&str>,
    ) -> bool {
        let Some(principal) = principal else {
            return false;
        };

        if principal.global_rights().contains(SUPER_ADMIN) {
            return true;
        }

        let requested = match Capability::parse(capability) {
            Ok(requested) => requested,
            Err(err) => {
                debug!("Capability check denied: {}", err);
                return false;
            }
        };

        if Self::rights_cover(principal.global_rights(), &requested) {
            return true;
        }

        let Some(department_id) = department_id else {
            return false;
        };

        let granted = principal
            .department_rights(department_id)
            .is_some_and(|rights| Self::rights_cover(rights, &requested));
        if granted {
            trace!("{} granted through department {}", requested, department_id);
        }
        granted
    }

    /// True when at least one capability is granted; an empty list is never granted
    pub fn has_any_permission<S: AsRef<str>>(
        principal: Option<&Principal>,
        capabilities: &[S],
        department_id: Option<&str>,
    ) -> bool {
        capabilities
            .iter()
            .any(|capability| Self::has_permission(principal, capability.as_ref(), department_id))
    }

    /// True when every capability is granted; an empty list is granted to any
    /// present principal
    pub fn has_all_permissions<S: AsRef<str>>(
        principal: Option<&Principal>,
        capabilities: &[S],
        department_id: Option<&str>,
    ) -> bool {
        if principal.is_none() {
            return false;
        }
        capabilities
            .iter()
            .all(|capability| Self::has_permission(principal, capability.as_ref(), department_id))
    }

    /// Literal role membership
    ///
    /// Falls back to the active department when `department_id` is `None`,
    /// and to the unscoped role list when neither is set.
    pub fn has_role(principal: Option<&Principal>, role: &str, department_id: Option<&str>) -> bool {
        let Some(principal) = principal else {
            return false;
        };
        let scope = department_id.or(principal.active_department());
        principal.roles().has_role(role, scope)
    }

    fn rights_cover(rights: &BTreeSet<Capability>, requested: &Capability) -> bool {
        requested.covering_grants().iter().any(|grant| rights.contains(grant.as_str()))
    }
}

impl PermissionChecker for Principal {
    fn has_permission(&self, capability: &str, department_id: Option<&str>) -> bool {
        PermissionResolver::has_permission(Some(self), capability, department_id)
    }

    fn has_role(&self, role: &str, department_id: Option<&str>) -> bool {
        PermissionResolver::has_role(Some(self), role, department_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::RoleDirectory;

    fn global(rights: &[&str]) -> Principal {
        rights.iter().fold(Principal::new(), |p, right| p.with_global_right(right))
    }

    #[test]
    fn test_super_admin_grants_any_shape() {
        let admin = global(&["system:*"]);
        for capability in ["content:courses:create", "billing:*", "reports:export", "nonsense", ""] {
            assert!(
                PermissionResolver::has_permission(Some(&admin), capability, None),
                "system:* should grant `{}`",
                capability
            );
        }
    }

    #[test]
    fn test_exact_global_match() {
        let principal = global(&["content:courses:read"]);
        assert!(PermissionResolver::has_permission(Some(&principal), "content:courses:read", None));
        assert!(!PermissionResolver::has_permission(
            Some(&principal),
            "content:courses:manage",
            None
        ));
    }

    #[test]
    fn test_domain_wildcard() {
        let principal = global(&["content:*"]);
        assert!(PermissionResolver::has_permission(Some(&principal), "content:lessons:manage", None));
        assert!(PermissionResolver::has_permission(Some(&principal), "content:publish", None));
        assert!(!PermissionResolver::has_permission(Some(&principal), "billing:invoices:read", None));

        let other_domain = global(&["billing:*"]);
        assert!(!PermissionResolver::has_permission(
            Some(&other_domain),
            "content:lessons:manage",
            None
        ));
    }

    #[test]
    fn test_resource_wildcard() {
        let principal = global(&["grading:submissions:*"]);
        assert!(PermissionResolver::has_permission(
            Some(&principal),
            "grading:submissions:grade",
            None
        ));
        assert!(!PermissionResolver::has_permission(
            Some(&principal),
            "grading:grades:override",
            None
        ));
    }

    #[test]
    fn test_dotted_and_uppercase_segments() {
        for capability in ["reports:sales.q1:read", "Content:Courses:Read"] {
            let exact = global(&[capability]);
            assert_eq!(exact.global_rights().len(), 1);
            assert!(PermissionResolver::has_permission(Some(&exact), capability, None));

            let domain = capability.split(':').next().unwrap_or_default();
            let domain_wildcard = format!("{}:*", domain);
            let wildcard = global(&[domain_wildcard.as_str()]);
            assert!(
                PermissionResolver::has_permission(Some(&wildcard), capability, None),
                "{}:* should grant `{}`",
                domain,
                capability
            );
        }
    }

    #[test]
    fn test_malformed_capability_is_denied() {
        let principal = global(&["content:*"]);
        assert!(!PermissionResolver::has_permission(Some(&principal), "content", None));
        assert!(!PermissionResolver::has_permission(Some(&principal), "content::read", None));
        assert!(!PermissionResolver::has_permission(Some(&principal), "content:a:b:c", None));
    }

    #[test]
    fn test_department_rights_do_not_leak() {
        let principal = Principal::new().with_department_right("A", "x:y:z");
        assert!(PermissionResolver::has_permission(Some(&principal), "x:y:z", Some("A")));
        assert!(!PermissionResolver::has_permission(Some(&principal), "x:y:z", Some("B")));
        assert!(!PermissionResolver::has_permission(Some(&principal), "x:y:z", None));
    }

    #[test]
    fn test_active_department_is_not_implicit() {
        let principal = Principal::new()
            .with_department_right("dept-1", "content:*")
            .with_active_department(Some("dept-1".to_string()));
        assert!(!PermissionResolver::has_permission(
            Some(&principal),
            "content:lessons:manage",
            None
        ));
        assert!(PermissionResolver::has_permission(
            Some(&principal),
            "content:lessons:manage",
            Some("dept-1")
        ));
    }

    #[test]
    fn test_global_rights_are_department_independent() {
        let principal = global(&["x:y:z"]).with_department("A");
        for department in [None, Some("A"), Some("B")] {
            assert!(PermissionResolver::has_permission(Some(&principal), "x:y:z", department));
        }
    }

    #[test]
    fn test_department_wildcard() {
        let principal = Principal::new().with_department_right("dept-1", "content:*");
        assert!(PermissionResolver::has_permission(
            Some(&principal),
            "content:lessons:manage",
            Some("dept-1")
        ));
        assert!(!PermissionResolver::has_permission(
            Some(&principal),
            "content:lessons:manage",
            Some("dept-2")
        ));
    }

    #[test]
    fn test_any_and_all_vacuous_cases() {
        let principal = global(&["a:b:c"]);
        let empty: [&str; 0] = [];

        assert!(!PermissionResolver::has_any_permission(Some(&principal), &empty, None));
        assert!(PermissionResolver::has_all_permissions(Some(&principal), &empty, None));

        let nobody = Principal::new();
        assert!(!PermissionResolver::has_any_permission(Some(&nobody), &empty, None));
        assert!(PermissionResolver::has_all_permissions(Some(&nobody), &empty, None));
    }

    #[test]
    fn test_any_and_all() {
        let principal = global(&["a:b:c"]);
        assert!(PermissionResolver::has_any_permission(
            Some(&principal),
            &["a:b:c", "d:e:f"],
            None
        ));
        assert!(!PermissionResolver::has_all_permissions(
            Some(&principal),
            &["a:b:c", "d:e:f"],
            None
        ));
        assert!(PermissionResolver::has_all_permissions(Some(&principal), &["a:b:c"], None));
    }

    #[test]
    fn test_absent_principal_has_nothing() {
        let empty: [&str; 0] = [];
        assert!(!PermissionResolver::has_permission(None, "system:*", None));
        assert!(!PermissionResolver::has_any_permission(None, &["a:b:c"], None));
        assert!(!PermissionResolver::has_all_permissions(None, &empty, None));
        assert!(!PermissionResolver::has_role(None, "instructor", Some("dept-1")));
    }

    #[test]
    fn test_has_role_scoping() {
        let principal = Principal::new()
            .with_roles(RoleDirectory::new().with_department_role("dept-1", "instructor"))
            .with_active_department(Some("dept-1".to_string()));

        assert!(PermissionResolver::has_role(Some(&principal), "instructor", None));
        assert!(PermissionResolver::has_role(Some(&principal), "instructor", Some("dept-1")));
        assert!(!PermissionResolver::has_role(Some(&principal), "instructor", Some("dept-2")));

        let unscoped = Principal::new()
            .with_roles(RoleDirectory::new().with_department_role("dept-1", "instructor"));
        assert!(!PermissionResolver::has_role(Some(&unscoped), "instructor", None));
    }

    #[test]
    fn test_has_role_ignores_rights() {
        let principal = global(&["system:*"]);
        assert!(!PermissionResolver::has_role(Some(&principal), "admin", None));
    }

    #[test]
    fn test_checker_trait() {
        let principal = global(&["billing:*"]).with_department_right("dept-1", "class:*");
        let checker: &dyn PermissionChecker = &principal;

        assert!(checker.has_permission("billing:invoices:write", None));
        assert!(checker.has_any_permission(&["reports:export", "class:sessions:read"], Some("dept-1")));
        assert!(!checker.has_all_permissions(&["billing:invoices:write", "class:sessions:read"], None));
        assert!(checker.has_all_permissions(&[], None));
    }
}

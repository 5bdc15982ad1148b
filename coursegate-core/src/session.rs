//! Client-side access session
//!
//! [`AccessSession`] holds the current [`Principal`] snapshot and a
//! [`FlagCache`]. Every state change (login, department switch, escalation,
//! refreshed rights) swaps in a new principal; the cache key changes with it,
//! so stale flags are never served.

use crate::cache::FlagCache;
use crate::config::AccessConfig;
use crate::flags::FeatureFlags;
use crate::rbac::{DepartmentId, PermissionResolver, Principal};
use log::debug;

/// Current principal plus memoized flags
///
/// Not thread-safe on its own; callers sharing a session wrap it themselves.
#[derive(Debug, Default)]
pub struct AccessSession {
    principal: Option<Principal>,
    cache: FlagCache,
    default_department: Option<DepartmentId>,
}

impl AccessSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AccessConfig) -> Self {
        Self {
            principal: None,
            cache: FlagCache::from_config(config),
            default_department: config.default_department.clone(),
        }
    }

    /// Login or token refresh
    ///
    /// A principal without an active department is placed in the configured
    /// default department, if any.
    pub fn establish(&mut self, principal: Principal) {
        let principal = match (principal.active_department(), &self.default_department) {
            (None, Some(default)) => {
                let default = default.clone();
                principal.with_active_department(Some(default))
            }
            _ => principal,
        };
        debug!(
            "Session established (department: {})",
            principal.active_department().unwrap_or("none")
        );
        self.principal = Some(principal);
    }

    pub fn logout(&mut self) {
        debug!("Session cleared");
        self.principal = None;
    }

    /// Change the active department; `false` when nobody is logged in
    pub fn switch_department(&mut self, department_id: Option<DepartmentId>) -> bool {
        self.update(|principal| principal.with_active_department(department_id))
    }

    /// Enter or leave an escalated admin session; `false` when nobody is logged in
    pub fn set_admin_session(&mut self, active: bool) -> bool {
        self.update(|principal| principal.with_admin_session(active))
    }

    /// Swap in refreshed rights, keeping the session's department and
    /// escalation state
    pub fn replace_rights(&mut self, principal: Principal) -> bool {
        self.update(|current| {
            let department = current.active_department().map(str::to_string);
            principal
                .with_active_department(department)
                .with_admin_session(current.admin_session_active())
        })
    }

    fn update(&mut self, change: impl FnOnce(Principal) -> Principal) -> bool {
        match self.principal.take() {
            Some(current) => {
                self.principal = Some(change(current));
                true
            }
            None => false,
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn active_department(&self) -> Option<&str> {
        self.principal.as_ref().and_then(Principal::active_department)
    }

    /// Flags for the current principal in its active department
    pub fn flags(&mut self) -> FeatureFlags {
        let active_department = self.active_department().map(str::to_string);
        self.cache.flags(self.principal.as_ref(), active_department.as_deref())
    }

    /// Capability check against the active department
    pub fn can(&self, capability: &str) -> bool {
        PermissionResolver::has_permission(self.principal(), capability, self.active_department())
    }

    pub fn can_any<S: AsRef<str>>(&self, capabilities: &[S]) -> bool {
        PermissionResolver::has_any_permission(self.principal(), capabilities, self.active_department())
    }

    pub fn can_all<S: AsRef<str>>(&self, capabilities: &[S]) -> bool {
        PermissionResolver::has_all_permissions(self.principal(), capabilities, self.active_department())
    }

    /// Role membership in the active department
    pub fn has_role(&self, role: &str) -> bool {
        PermissionResolver::has_role(self.principal(), role, None)
    }

    pub fn cache(&self) -> &FlagCache {
        &self.cache
    }
}

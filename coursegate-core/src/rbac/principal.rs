//! The authenticated actor whose rights are evaluated

use super::{Capability, DepartmentId, RoleDirectory, UserType};
use log::warn;
use std::collections::{BTreeMap, BTreeSet};

/// Immutable snapshot of an actor's rights
///
/// Builders consume `self` and hand back a new value; a rights change
/// (login, department switch, grant) produces a new `Principal` rather than
/// mutating one that may already be in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    global_rights: BTreeSet<Capability>,
    department_rights: BTreeMap<DepartmentId, BTreeSet<Capability>>,
    user_types: BTreeSet<UserType>,
    active_department: Option<DepartmentId>,
    admin_session_active: bool,
    roles: RoleDirectory,
}

impl Principal {
    /// An authenticated principal with no rights
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a capability institution-wide
    pub fn with_global_capability(mut self, capability: Capability) -> Self {
        self.global_rights.insert(capability);
        self
    }

    /// Grant a capability string institution-wide, skipping it if malformed
    pub fn with_global_right(self, right: &str) -> Self {
        match Capability::parse(right) {
            Ok(capability) => self.with_global_capability(capability),
            Err(err) => {
                warn!("Dropping global right: {}", err);
                self
            }
        }
    }

    /// Grant a capability inside one department
    pub fn with_department_capability(
        mut self,
        department_id: impl Into<DepartmentId>,
        capability: Capability,
    ) -> Self {
        self.department_rights.entry(department_id.into()).or_default().insert(capability);
        self
    }

    /// Grant a capability string inside one department, skipping it if malformed
    pub fn with_department_right(self, department_id: impl Into<DepartmentId>, right: &str) -> Self {
        let department_id = department_id.into();
        match Capability::parse(right) {
            Ok(capability) => self.with_department_capability(department_id, capability),
            Err(err) => {
                warn!("Dropping right for department {}: {}", department_id, err);
                self
            }
        }
    }

    /// Register a department with an empty rights set
    pub fn with_department(mut self, department_id: impl Into<DepartmentId>) -> Self {
        self.department_rights.entry(department_id.into()).or_default();
        self
    }

    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_types.insert(user_type);
        self
    }

    pub fn with_active_department(mut self, department_id: Option<DepartmentId>) -> Self {
        self.active_department = department_id;
        self
    }

    pub fn with_admin_session(mut self, active: bool) -> Self {
        self.admin_session_active = active;
        self
    }

    pub fn with_roles(mut self, roles: RoleDirectory) -> Self {
        self.roles = roles;
        self
    }

    pub fn global_rights(&self) -> &BTreeSet<Capability> {
        &self.global_rights
    }

    /// Rights granted inside `department_id`, if the department is known
    pub fn department_rights(&self, department_id: &str) -> Option<&BTreeSet<Capability>> {
        self.department_rights.get(department_id)
    }

    pub fn all_department_rights(&self) -> &BTreeMap<DepartmentId, BTreeSet<Capability>> {
        &self.department_rights
    }

    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.department_rights.keys().map(String::as_str)
    }

    pub fn user_types(&self) -> &BTreeSet<UserType> {
        &self.user_types
    }

    pub fn has_user_type(&self, user_type: UserType) -> bool {
        self.user_types.contains(&user_type)
    }

    pub fn active_department(&self) -> Option<&str> {
        self.active_department.as_deref()
    }

    /// Session escalation state (`isAdminActive`)
    pub fn admin_session_active(&self) -> bool {
        self.admin_session_active
    }

    pub fn roles(&self) -> &RoleDirectory {
        &self.roles
    }
}

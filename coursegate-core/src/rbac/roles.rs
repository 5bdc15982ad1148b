//! Role-name lists supplied alongside the rights snapshot
//!
//! Roles are plain names (`instructor`, `registrar`) cached per department.
//! They are looked up literally and never derived from capability strings.

use super::DepartmentId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Role names per department, plus an optional unscoped list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleDirectory {
    /// Roles that apply when no department is in scope
    #[serde(default)]
    pub unscoped: BTreeSet<String>,

    /// Roles held inside each department
    #[serde(default)]
    pub departments: BTreeMap<DepartmentId, BTreeSet<String>>,
}

impl RoleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role to the unscoped list
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.unscoped.insert(role.into());
        self
    }

    /// Add a role inside a department
    pub fn with_department_role(
        mut self,
        department_id: impl Into<DepartmentId>,
        role: impl Into<String>,
    ) -> Self {
        self.departments.entry(department_id.into()).or_default().insert(role.into());
        self
    }

    /// Literal membership check; `None` consults the unscoped list
    pub fn has_role(&self, role: &str, department_id: Option<&str>) -> bool {
        match department_id {
            Some(department_id) => {
                self.departments.get(department_id).is_some_and(|roles| roles.contains(role))
            }
            None => self.unscoped.contains(role),
        }
    }

    /// Roles held in a department (empty when the department is unknown)
    pub fn roles_in(&self, department_id: &str) -> impl Iterator<Item = &str> {
        self.departments.get(department_id).into_iter().flatten().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.unscoped.is_empty() && self.departments.values().all(BTreeSet::is_empty)
    }
}

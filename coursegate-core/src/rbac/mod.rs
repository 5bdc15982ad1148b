//! Coursegate RBAC (department-scoped capability resolution)
//!
//! Rights are capability strings of the form `domain:resource:action`,
//! granted either institution-wide or inside one department. Wildcards
//! (`content:*`, `content:courses:*`) grant everything sharing their prefix and
//! `system:*` grants everything.
//!
//! # Example
//! ```rust,ignore
//! use coursegate_core::rbac::{PermissionResolver, Principal};
//!
//! let principal = Principal::new()
//!     .with_global_right("content:courses:read")
//!     .with_department_right("dept-1", "content:*");
//!
//! assert!(PermissionResolver::has_permission(Some(&principal), "content:courses:read", None));
//! assert!(PermissionResolver::has_permission(Some(&principal), "content:lessons:manage", Some("dept-1")));
//! assert!(!PermissionResolver::has_permission(Some(&principal), "content:lessons:manage", Some("dept-2")));
//! ```

mod capability;
mod classification;
mod principal;
mod resolver;
mod roles;

// Public exports
pub use capability::{Capability, CapabilityKind, SUPER_ADMIN};
pub use classification::UserType;
pub use principal::Principal;
pub use resolver::PermissionResolver;
pub use roles::RoleDirectory;

/// Department identifier type
pub type DepartmentId = String;

/// Trait for anything that can answer capability and role checks
///
/// Implemented by [`Principal`]; the list checks default to folding over
/// [`PermissionChecker::has_permission`].
pub trait PermissionChecker: Send + Sync {
    /// Check if the capability is granted
    ///
    /// # Arguments
    /// * `capability` - The capability (e.g., "content:courses:create")
    /// * `department_id` - Department whose rights are also consulted
    fn has_permission(&self, capability: &str, department_id: Option<&str>) -> bool;

    /// Check literal role membership
    fn has_role(&self, role: &str, department_id: Option<&str>) -> bool;

    /// At least one capability is granted (empty list: `false`)
    fn has_any_permission(&self, capabilities: &[&str], department_id: Option<&str>) -> bool {
        capabilities.iter().any(|capability| self.has_permission(capability, department_id))
    }

    /// Every capability is granted (empty list: `true`)
    fn has_all_permissions(&self, capabilities: &[&str], department_id: Option<&str>) -> bool {
        capabilities.iter().all(|capability| self.has_permission(capability, department_id))
    }
}

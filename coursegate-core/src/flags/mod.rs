//! Feature flags derived from raw rights
//!
//! The presentation layer never inspects capability strings directly. It asks
//! for a [`FeatureFlags`] snapshot (`canManageCourses`, `canViewPII`, ...)
//! computed from a [`Principal`] and the active department by the static
//! [`RULES`] table.
//!
//! # Example
//! ```rust,ignore
//! use coursegate_core::flags::derive_feature_flags;
//! use coursegate_core::rbac::Principal;
//!
//! let principal = Principal::new().with_global_right("learner:*");
//! let flags = derive_feature_flags(Some(&principal), None);
//! assert!(flags.can_view_pii && flags.can_view_transcripts && flags.can_manage_learners);
//! ```

pub mod catalog;
mod rules;
mod snapshot;

pub use rules::{rule_for, FlagRule, RULES};
pub use snapshot::{FeatureFlags, Flag};

use crate::rbac::{PermissionResolver, Principal};
use log::trace;

impl FeatureFlags {
    /// Evaluate every rule for `principal` inside `active_department`
    ///
    /// An absent principal yields [`FeatureFlags::none`].
    pub fn derive(principal: Option<&Principal>, active_department: Option<&str>) -> Self {
        let Some(principal) = principal else {
            return Self::none();
        };

        let mut flags = Self::none();
        for rule in RULES {
            let value = evaluate(rule, principal, active_department, &flags);
            flags.set(rule.flag, value);
        }

        trace!(
            "Derived {} of {} flags (department: {})",
            flags.granted().count(),
            Flag::count(),
            active_department.unwrap_or("none")
        );
        flags
    }
}

/// Free-function form of [`FeatureFlags::derive`]
pub fn derive_feature_flags(
    principal: Option<&Principal>,
    active_department: Option<&str>,
) -> FeatureFlags {
    FeatureFlags::derive(principal, active_department)
}

fn evaluate(
    rule: &FlagRule,
    principal: &Principal,
    active_department: Option<&str>,
    derived_so_far: &FeatureFlags,
) -> bool {
    if rule.requires_admin_session && !principal.admin_session_active() {
        return false;
    }

    PermissionResolver::has_any_permission(Some(principal), rule.grants, active_department)
        || rule.implied_by.iter().any(|flag| derived_so_far.get(*flag))
        || rule.user_types.iter().any(|user_type| principal.has_user_type(*user_type))
}

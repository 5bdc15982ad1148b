//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use coursegate_core::prelude::*;
//! ```

// === Access model ===
pub use crate::rbac::{
    Capability, CapabilityKind, DepartmentId, PermissionChecker, PermissionResolver, Principal,
    RoleDirectory, UserType, SUPER_ADMIN,
};

// === Feature flags ===
pub use crate::cache::FlagCache;
pub use crate::flags::{derive_feature_flags, FeatureFlags, Flag};

// === Session and rights source ===
pub use crate::session::AccessSession;
pub use crate::snapshot::RightsSnapshot;

// === Configuration ===
pub use crate::config::{AccessConfig, CoursegateConfig};
pub use crate::logging::LoggingConfig;

// === Errors ===
pub use crate::error::{AccessError, Result};

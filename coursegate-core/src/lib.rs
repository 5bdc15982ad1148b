//! Coursegate - Core
//!
//! Department-scoped permission resolution and feature flags for a learning
//! management system.
//!
//! # Overview
//!
//! A [`Principal`] carries capability strings (`content:courses:read`,
//! `billing:*`, `system:*`) granted institution-wide or inside a department.
//! The [`PermissionResolver`] answers "may this principal do X here?", and
//! [`derive_feature_flags`] folds the same rights into a fixed set of named
//! booleans (`canManageCourses`, `canViewPII`, ...) for the presentation
//! layer.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use coursegate_core::prelude::*;
//!
//! let principal = RightsSnapshot::from_json(json)?.into_principal(false)?;
//!
//! let mut session = AccessSession::new();
//! session.establish(principal);
//!
//! if session.flags().can_manage_courses {
//!     // show the course editor
//! }
//! assert!(session.can("content:courses:read"));
//! ```
//!
//! # Architecture
//!
//! - [`rbac`] - Capability grammar, principals, the resolver and role lookup
//! - [`flags`] - The flag rule table and derivation
//! - [`cache`] - LRU memo of derived flags
//! - [`session`] - Client-side session holding the current principal
//! - [`snapshot`] - Rights snapshot as supplied by the auth provider
//! - [`config`] - TOML + environment configuration
//! - [`logging`] - Structured logger on the `log` facade

pub mod cache;
pub mod config; // Configuration system with TOML support
pub mod error;
pub mod flags;
pub mod logging; // Declarative logging system with standard log crate integration
pub mod rbac;
pub mod session;
pub mod snapshot;

// Prelude module for convenient imports
pub mod prelude;

// Re-exports of main types and traits
pub use error::{AccessError, Result};
pub use flags::{derive_feature_flags, FeatureFlags, Flag};
pub use rbac::{Capability, PermissionChecker, PermissionResolver, Principal, UserType};
pub use session::AccessSession;
pub use snapshot::RightsSnapshot;

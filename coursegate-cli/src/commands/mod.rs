//! Subcommand implementations
//!
//! Each command writes its report to the given writer and returns the process
//! exit code, so tests can run them without spawning the binary.

pub mod check;
pub mod explain;
pub mod flags;
pub mod validate;

use anyhow::{Context as _, Result};
use coursegate_core::config::CoursegateConfig;
use coursegate_core::{Principal, RightsSnapshot};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const EXIT_OK: u8 = 0;
pub const EXIT_INVALID: u8 = 1;
pub const EXIT_DENIED: u8 = 2;

/// Shared state for commands that read a rights snapshot
pub struct Context {
    pub config: CoursegateConfig,
}

impl Context {
    pub fn new(config: CoursegateConfig) -> Self {
        Self { config }
    }

    /// Read a rights snapshot file into a principal
    pub fn load_principal(&self, path: &Path) -> Result<Principal> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open rights snapshot {}", path.display()))?;
        let snapshot = RightsSnapshot::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse rights snapshot {}", path.display()))?;
        let principal = snapshot
            .into_principal(self.config.access.strict_rights)
            .with_context(|| format!("Rejected rights snapshot {}", path.display()))?;
        Ok(principal)
    }

    /// Department a command operates in: the explicit argument, then the
    /// snapshot's active department, then the configured default
    pub fn department<'a>(
        &'a self,
        principal: &'a Principal,
        explicit: Option<&'a str>,
    ) -> Option<&'a str> {
        explicit
            .or(principal.active_department())
            .or(self.config.access.default_department.as_deref())
    }
}

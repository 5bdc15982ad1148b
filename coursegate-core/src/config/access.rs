//! Access model configuration

use anyhow::{bail, Result};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Maximum number of memoized flag snapshots
    /// Env: CG_FLAG_CACHE_CAPACITY
    /// Default: 64
    pub flag_cache_capacity: usize,

    /// Reject rights snapshots containing malformed capabilities instead of
    /// dropping the bad entries
    /// Env: CG_STRICT_RIGHTS
    /// Default: false
    pub strict_rights: bool,

    /// Department activated for principals that arrive without one
    /// Env: CG_DEFAULT_DEPARTMENT
    /// Default: None
    pub default_department: Option<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self { flag_cache_capacity: 64, strict_rights: false, default_department: None }
    }
}

impl AccessConfig {
    pub fn merge(&mut self, other: Self) {
        self.flag_cache_capacity = other.flag_cache_capacity;
        self.strict_rights = other.strict_rights;
        if other.default_department.is_some() {
            self.default_department = other.default_department;
        }
    }

    pub fn apply_env_from(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(capacity) = lookup("CG_FLAG_CACHE_CAPACITY") {
            match capacity.parse() {
                Ok(c) => self.flag_cache_capacity = c,
                Err(_) => warn!("Ignoring CG_FLAG_CACHE_CAPACITY={}: not a number", capacity),
            }
        }

        if let Some(strict) = lookup("CG_STRICT_RIGHTS") {
            match strict.parse() {
                Ok(s) => self.strict_rights = s,
                Err(_) => warn!("Ignoring CG_STRICT_RIGHTS={}: expected true or false", strict),
            }
        }

        if let Some(department) = lookup("CG_DEFAULT_DEPARTMENT") {
            let department = department.trim();
            self.default_department = (!department.is_empty()).then(|| department.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.flag_cache_capacity == 0 {
            bail!("flag_cache_capacity must be at least 1");
        }
        if self.default_department.as_deref().is_some_and(|d| d.trim().is_empty()) {
            bail!("default_department must not be blank");
        }
        Ok(())
    }
}

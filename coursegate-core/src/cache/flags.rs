//! Memoization of derived feature flags

use super::{Cache, LruCache};
use crate::config::AccessConfig;
use crate::flags::FeatureFlags;
use crate::rbac::{Capability, DepartmentId, Principal, UserType};
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// Every input the flag derivation reads
///
/// The whole tuple is stored and compared, so two principals share an entry
/// only when their derived flags are guaranteed to be identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagKey {
    global_rights: BTreeSet<Capability>,
    department_rights: BTreeMap<DepartmentId, BTreeSet<Capability>>,
    active_department: Option<DepartmentId>,
    user_types: BTreeSet<UserType>,
    admin_session_active: bool,
}

impl FlagKey {
    pub fn new(principal: &Principal, active_department: Option<&str>) -> Self {
        Self {
            global_rights: principal.global_rights().clone(),
            department_rights: principal.all_department_rights().clone(),
            active_department: active_department.map(str::to_string),
            user_types: principal.user_types().clone(),
            admin_session_active: principal.admin_session_active(),
        }
    }
}

/// Bounded LRU memo of [`FeatureFlags`] snapshots
#[derive(Debug)]
pub struct FlagCache {
    entries: LruCache<FlagKey, FeatureFlags>,
    hits: u64,
    misses: u64,
}

impl FlagCache {
    pub fn new(capacity: usize) -> Self {
        Self { entries: LruCache::new(capacity), hits: 0, misses: 0 }
    }

    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(config.flag_cache_capacity)
    }

    /// Flags for `principal` in `active_department`, derived at most once per
    /// distinct input
    ///
    /// An absent principal always gets [`FeatureFlags::none`] without
    /// touching the cache.
    pub fn flags(
        &mut self,
        principal: Option<&Principal>,
        active_department: Option<&str>,
    ) -> FeatureFlags {
        let Some(principal) = principal else {
            return FeatureFlags::none();
        };

        let key = FlagKey::new(principal, active_department);
        if let Some(flags) = self.entries.get(&key) {
            self.hits += 1;
            return *flags;
        }

        self.misses += 1;
        trace!("Flag cache miss ({} entries)", self.entries.len());
        let flags = FeatureFlags::derive(Some(principal), active_department);
        self.entries.insert(key, flags);
        flags
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for FlagCache {
    fn default() -> Self {
        Self::from_config(&AccessConfig::default())
    }
}

//! LRU (Least Recently Used) cache implementation
//!
//! Entries carry a logical clock value; eviction scans for the oldest one.
//! Lookups are O(1) and eviction is O(n), which suits the small capacities
//! used for memoizing flag snapshots.

use super::traits::{Cache, CacheEntry};
use std::collections::HashMap;
use std::hash::Hash;

/// LRU Cache with configurable capacity
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    capacity: usize,
    entries: HashMap<K, CacheEntry<V>>,
    clock: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache; a capacity of zero is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, entries: HashMap::with_capacity(capacity), clock: 0 }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Remove the least recently used entry
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone())?;
        self.entries.remove(&oldest).map(|entry| (oldest, entry.value))
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let tick = self.tick();
        let entry = self.entries.get_mut(key)?;
        entry.touch(tick);
        Some(&entry.value)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        let tick = self.tick();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.last_used = tick;
            return Some(std::mem::replace(&mut entry.value, value));
        }

        if self.entries.len() >= self.capacity {
            self.evict_lru();
        }
        self.entries.insert(key, CacheEntry::new(value, tick));
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Core traits for caching functionality

use std::hash::Hash;

/// A cache entry with recency bookkeeping
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,

    /// Logical clock value of the last access
    pub last_used: u64,

    /// Number of times this entry has been read back
    pub hits: u64,
}

impl<V> CacheEntry<V> {
    /// Create a new cache entry stamped with `tick`
    pub fn new(value: V, tick: u64) -> Self {
        Self { value, last_used: tick, hits: 0 }
    }

    /// Mark this entry as read at `tick`
    pub fn touch(&mut self, tick: u64) {
        self.last_used = tick;
        self.hits += 1;
    }
}

/// Core caching trait
pub trait Cache<K, V>
where
    K: Hash + Eq,
{
    /// Get a value from the cache
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Insert a value into the cache, returning the previous value for the key
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove a value from the cache
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Clear all entries from the cache
    fn clear(&mut self);

    /// Get the number of entries in the cache
    fn len(&self) -> usize;

    /// Check if the cache is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the capacity of the cache
    fn capacity(&self) -> usize;
}

//! Caching module for Coursegate
//!
//! Provides a small LRU (Least Recently Used) cache and the [`FlagCache`]
//! built on it, which memoizes derived feature-flag snapshots keyed on the
//! exact inputs of the derivation.

pub mod flags;
pub mod lru;
pub mod traits;

pub use flags::{FlagCache, FlagKey};
pub use lru::LruCache;
pub use traits::{Cache, CacheEntry};

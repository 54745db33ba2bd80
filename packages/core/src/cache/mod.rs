//! Compiled path caching
//!
//! Contexts look compiled paths up by [`CacheKey`] before compiling. A hit
//! returns the very `Arc<JsonPath>` stored on the earlier miss. Two threads
//! missing on the same key at once may both compile and both store; the later
//! store wins, which is harmless because the compiled paths are
//! interchangeable.

mod cache_key;
mod cache_stats;
mod concurrent;
mod lru;
mod noop;
mod provider;

use std::sync::Arc;

use crate::jsonpath::JsonPath;

pub use cache_key::CacheKey;
pub use cache_stats::{CacheStats, CacheStatsSnapshot};
pub use concurrent::ConcurrentPathCache;
pub use lru::{DEFAULT_LRU_CAPACITY, LruPathCache};
pub use noop::NoopPathCache;
pub use provider::PathCacheProvider;

/// Storage for compiled paths, shared between threads
pub trait PathCache: Send + Sync {
    /// Previously stored path for `key`, unless evicted
    fn get(&self, key: &CacheKey) -> Option<Arc<JsonPath>>;

    fn put(&self, key: CacheKey, path: Arc<JsonPath>);

    /// Drop every entry; statistics are kept
    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> &CacheStats;
}

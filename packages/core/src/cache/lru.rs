//! Bounded least-recently-used cache

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use hashbrown::HashMap;

use super::{CacheKey, CacheStats, PathCache};
use crate::jsonpath::JsonPath;

/// Capacity of the process-wide shared cache
pub const DEFAULT_LRU_CAPACITY: usize = 400;

struct LruEntry {
    path: Arc<JsonPath>,
    /// Logical clock value of the most recent access
    last_access: AtomicU64,
}

/// Bounded cache evicting the least recently used entry when full
///
/// Lookups take the read lock only and refresh recency with an atomic store.
pub struct LruPathCache {
    entries: RwLock<HashMap<CacheKey, LruEntry>>,
    capacity: usize,
    clock: AtomicU64,
    stats: CacheStats,
}

impl Default for LruPathCache {
    fn default() -> Self {
        Self::new(DEFAULT_LRU_CAPACITY)
    }
}

impl LruPathCache {
    /// Cache holding at most `capacity` paths (at least one)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            clock: AtomicU64::new(0),
            stats: CacheStats::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }
}

impl PathCache for LruPathCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<JsonPath>> {
        let found = match self.entries.read() {
            Ok(entries) => entries.get(key).map(|entry| {
                entry.last_access.store(self.tick(), Ordering::Relaxed);
                Arc::clone(&entry.path)
            }),
            Err(_) => {
                tracing::warn!(
                    target: "pathwise::cache",
                    "LRU cache lock poisoned, bypassing lookup"
                );
                None
            }
        };

        if found.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        found
    }

    fn put(&self, key: CacheKey, path: Arc<JsonPath>) {
        let Ok(mut entries) = self.entries.write() else {
            tracing::warn!(target: "pathwise::cache", "LRU cache lock poisoned, dropping insert");
            return;
        };

        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access.load(Ordering::Relaxed))
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                self.stats.record_eviction();
                tracing::trace!(
                    target: "pathwise::cache",
                    evicted = %oldest,
                    "evicted least recently used path"
                );
            }
        }

        entries.insert(
            key,
            LruEntry {
                path,
                last_access: AtomicU64::new(self.tick()),
            },
        );
        self.stats.record_insertion();
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

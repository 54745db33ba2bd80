//! Unbounded concurrent cache

use std::sync::Arc;

use dashmap::DashMap;

use super::{CacheKey, CacheStats, PathCache};
use crate::jsonpath::JsonPath;

/// Unbounded cache on a sharded concurrent map; entries live until cleared
#[derive(Debug, Default)]
pub struct ConcurrentPathCache {
    entries: DashMap<CacheKey, Arc<JsonPath>>,
    stats: CacheStats,
}

impl ConcurrentPathCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathCache for ConcurrentPathCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<JsonPath>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    fn put(&self, key: CacheKey, path: Arc<JsonPath>) {
        self.entries.insert(key, path);
        self.stats.record_insertion();
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

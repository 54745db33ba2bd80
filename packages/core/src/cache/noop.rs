//! Cache that never stores anything

use std::sync::Arc;

use super::{CacheKey, CacheStats, PathCache};
use crate::jsonpath::JsonPath;

/// Always misses, so every lookup recompiles
#[derive(Debug, Default)]
pub struct NoopPathCache {
    stats: CacheStats,
}

impl NoopPathCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathCache for NoopPathCache {
    fn get(&self, _key: &CacheKey) -> Option<Arc<JsonPath>> {
        self.stats.record_miss();
        None
    }

    fn put(&self, _key: CacheKey, _path: Arc<JsonPath>) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }

    fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

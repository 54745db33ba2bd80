//! Process-wide cache wiring

use std::sync::Arc;

use super::{LruPathCache, PathCache};

lazy_static::lazy_static! {
    static ref SHARED_CACHE: Arc<dyn PathCache> = Arc::new(LruPathCache::default());
}

/// Access to the cache shared by contexts that were not given one explicitly
pub struct PathCacheProvider;

impl PathCacheProvider {
    /// The process-wide LRU cache, built on first use
    #[must_use]
    pub fn shared() -> Arc<dyn PathCache> {
        Arc::clone(&SHARED_CACHE)
    }

    /// Empty the process-wide cache
    pub fn clear_shared() {
        SHARED_CACHE.clear();
        tracing::debug!(target: "pathwise::cache", "shared path cache cleared");
    }
}

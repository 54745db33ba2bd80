//! Context state, path resolution and derived contexts

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{document::Document, path_ref::PathRef};
use crate::cache::{CacheKey, PathCache, PathCacheProvider};
use crate::config::Configuration;
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::JsonPath;
use crate::listener::{EvaluationListener, LimitingEvaluationListener};
use crate::predicate::Predicate;

/// A document bound to a configuration and a path cache
#[derive(Clone)]
pub struct DocumentContext {
    pub(super) document: Document,
    pub(super) configuration: Configuration,
    pub(super) cache: Arc<dyn PathCache>,
    pub(super) last_modified: Vec<String>,
}

/// Compiled path borrowed from the caller or shared with the cache
pub(super) enum Resolved<'a> {
    Borrowed(&'a JsonPath),
    Cached(Arc<JsonPath>),
}

impl std::ops::Deref for Resolved<'_> {
    type Target = JsonPath;

    fn deref(&self) -> &JsonPath {
        match self {
            Resolved::Borrowed(path) => path,
            Resolved::Cached(path) => path.as_ref(),
        }
    }
}

impl DocumentContext {
    /// Context over `document` using the process-wide path cache
    #[must_use]
    pub fn new(document: Document, configuration: Configuration) -> Self {
        Self::with_cache(document, configuration, PathCacheProvider::shared())
    }

    #[must_use]
    pub fn with_cache(
        document: Document,
        configuration: Configuration,
        cache: Arc<dyn PathCache>,
    ) -> Self {
        Self {
            document,
            configuration,
            cache,
            last_modified: Vec::new(),
        }
    }

    /// Context over `value` with the default configuration
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self::new(Document::new(value), Configuration::default())
    }

    #[inline]
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Shared handle to the bound document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[inline]
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn PathCache> {
        &self.cache
    }

    /// Normalized paths changed by the most recent mutation through this context
    #[inline]
    #[must_use]
    pub fn last_modified(&self) -> &[String] {
        &self.last_modified
    }

    /// Copy of the document
    ///
    /// # Errors
    ///
    /// Returns an `Evaluation` error if the document lock is poisoned.
    pub fn json(&self) -> JsonPathResult<Value> {
        self.document.snapshot()
    }

    /// The document serialised by the configured provider
    ///
    /// # Errors
    ///
    /// Returns an error if the document lock is poisoned or serialisation fails.
    pub fn json_string(&self) -> JsonPathResult<String> {
        let provider = self.configuration.json_provider();
        self.document.with(|value| provider.to_json(value))?
    }

    /// Compile path text, reusing the cached compilation when there is one
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for blank text and `InvalidPath` for
    /// malformed paths. Failed compilations are never cached.
    pub fn compile(
        &self,
        path: &str,
        predicates: &[Arc<dyn Predicate>],
    ) -> JsonPathResult<Arc<JsonPath>> {
        if path.trim().is_empty() {
            return Err(JsonPathError::invalid_argument(
                "path can not be null or empty",
            ));
        }

        let key = CacheKey::new(path, predicates);
        if let Some(compiled) = self.cache.get(&key) {
            tracing::trace!(target: "pathwise::cache", key = %key, "path cache hit");
            return Ok(compiled);
        }

        let compiled = Arc::new(JsonPath::compile(key.path(), predicates)?);
        tracing::debug!(target: "pathwise::cache", key = %key, "compiled and cached path");
        self.cache.put(key, Arc::clone(&compiled));
        Ok(compiled)
    }

    pub(super) fn resolve<'a>(&self, path: PathRef<'a>) -> JsonPathResult<Resolved<'a>> {
        match path {
            PathRef::Compiled(path) => Ok(Resolved::Borrowed(path)),
            PathRef::Text { path, predicates } => {
                self.compile(path, predicates).map(Resolved::Cached)
            }
        }
    }

    /// Sibling context over the same document whose reads stop after `limit` matches
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `limit` is zero.
    pub fn limit(&self, limit: usize) -> JsonPathResult<DocumentContext> {
        let listener = LimitingEvaluationListener::new(limit)?;
        Ok(self.with_listeners([Arc::new(listener) as Arc<dyn EvaluationListener>]))
    }

    /// Sibling context over the same document with `listeners` appended
    #[must_use]
    pub fn with_listeners(
        &self,
        listeners: impl IntoIterator<Item = Arc<dyn EvaluationListener>>,
    ) -> DocumentContext {
        Self {
            document: self.document.clone(),
            configuration: self.configuration.add_evaluation_listeners(listeners),
            cache: Arc::clone(&self.cache),
            last_modified: Vec::new(),
        }
    }

    /// Sibling context over the same document with a different configuration
    #[must_use]
    pub fn with_configuration(&self, configuration: Configuration) -> DocumentContext {
        Self {
            document: self.document.clone(),
            configuration,
            cache: Arc::clone(&self.cache),
            last_modified: Vec::new(),
        }
    }
}

impl fmt::Debug for DocumentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentContext")
            .field("document", &self.document)
            .field("configuration", &self.configuration)
            .field("cached_paths", &self.cache.len())
            .finish()
    }
}

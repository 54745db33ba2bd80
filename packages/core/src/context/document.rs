//! Shared document handle

use std::fmt;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::error::{JsonPathError, JsonPathResult};

/// Handle to an in-memory document
///
/// Clones share the same tree, so a change made through one handle is seen
/// through all of them. Readers work on a snapshot of the tree and hold the
/// lock only while taking it; a writer copies the tree only when a snapshot
/// is still in use elsewhere.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<RwLock<Arc<Value>>>,
}

impl Document {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(value))),
        }
    }

    /// Current tree; later writes do not affect the returned snapshot
    ///
    /// # Errors
    ///
    /// Returns an `Evaluation` error if a writer panicked while holding the document.
    pub fn current(&self) -> JsonPathResult<Arc<Value>> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        Ok(Arc::clone(&guard))
    }

    /// Run `f` on a snapshot of the tree, without holding the lock
    ///
    /// # Errors
    ///
    /// See [`Document::current`].
    pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> JsonPathResult<R> {
        let snapshot = self.current()?;
        Ok(f(&snapshot))
    }

    /// Run `f` with exclusive access to the tree
    ///
    /// `f` must not reach the document through another handle.
    ///
    /// # Errors
    ///
    /// See [`Document::current`].
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Value) -> R) -> JsonPathResult<R> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        Ok(f(Arc::make_mut(&mut guard)))
    }

    /// Copy of the current tree
    ///
    /// # Errors
    ///
    /// See [`Document::current`].
    pub fn snapshot(&self) -> JsonPathResult<Value> {
        self.current().map(|value| Value::clone(&value))
    }

    /// Whether both handles refer to the same tree
    #[must_use]
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Ok(value) => f.debug_tuple("Document").field(&**value).finish(),
            Err(_) => f.write_str("Document(<locked>)"),
        }
    }
}

fn poisoned() -> JsonPathError {
    JsonPathError::evaluation("document lock poisoned by a panicked writer")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn clones_share_the_tree() {
        let doc = Document::new(json!({"a": 1}));
        let other = doc.clone();
        other.with_mut(|v| v["a"] = json!(2)).unwrap();
        assert_eq!(doc.snapshot().unwrap(), json!({"a": 2}));
        assert!(doc.ptr_eq(&other));
        assert!(!doc.ptr_eq(&Document::new(json!({"a": 2}))));
    }

    #[test]
    fn snapshots_are_stable_across_writes() {
        let doc = Document::new(json!([1]));
        let before = doc.current().unwrap();
        doc.with_mut(|v| v[0] = json!(2)).unwrap();
        assert_eq!(*before, json!([1]));
        assert_eq!(*doc.current().unwrap(), json!([2]));
    }

    #[test]
    fn readers_may_reenter_the_document() {
        let doc = Document::new(json!({"a": 1}));
        let nested = doc
            .with(|outer| doc.with(|inner| outer == inner).unwrap())
            .unwrap();
        assert!(nested);
    }
}

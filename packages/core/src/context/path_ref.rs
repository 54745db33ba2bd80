//! Path arguments accepted by document contexts

use std::sync::Arc;

use crate::jsonpath::JsonPath;
use crate::predicate::Predicate;

/// Either path text with its predicates, or a compiled path
///
/// Text is compiled through the context's cache; compiled paths are used as is.
#[derive(Clone, Copy)]
pub enum PathRef<'a> {
    Text {
        path: &'a str,
        predicates: &'a [Arc<dyn Predicate>],
    },
    Compiled(&'a JsonPath),
}

impl<'a> PathRef<'a> {
    /// Path text whose `[?]` placeholders consume `predicates` in order
    #[must_use]
    pub fn with_predicates(path: &'a str, predicates: &'a [Arc<dyn Predicate>]) -> Self {
        PathRef::Text { path, predicates }
    }
}

impl<'a> From<&'a str> for PathRef<'a> {
    fn from(path: &'a str) -> Self {
        PathRef::Text {
            path,
            predicates: &[],
        }
    }
}

impl<'a> From<&'a String> for PathRef<'a> {
    fn from(path: &'a String) -> Self {
        PathRef::from(path.as_str())
    }
}

impl<'a> From<&'a JsonPath> for PathRef<'a> {
    fn from(path: &'a JsonPath) -> Self {
        PathRef::Compiled(path)
    }
}

impl<'a> From<&'a Arc<JsonPath>> for PathRef<'a> {
    fn from(path: &'a Arc<JsonPath>) -> Self {
        PathRef::Compiled(path)
    }
}

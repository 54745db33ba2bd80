//! Commonly used types, for glob import

pub use crate::cache::{PathCache, PathCacheProvider};
pub use crate::config::{Configuration, EvalOption};
pub use crate::context::{Document, DocumentContext, ParseContext, PathRef};
pub use crate::error::{ErrorKind, JsonPathError, JsonPathResult};
pub use crate::jsonpath::JsonPath;
pub use crate::listener::{EvaluationContinuation, EvaluationListener, FoundResult};
pub use crate::mapper::TargetType;
pub use crate::predicate::{Filter, Predicate, PredicateContext};

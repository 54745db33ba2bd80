//! # Pathwise core
//!
//! Path-context engine for JSON documents: compiled-path caching, evaluation
//! listeners with early abort, and structural mutations that report every
//! location they change.
//!
//! ## Features
//!
//! - **Compiled path cache** keyed by path text and predicate signatures
//! - **Reads** of definite and indefinite paths, typed through serde or the mapper
//! - **Mutations** (`set`, `delete`, `add`, `put`, `rename_key`, `map`) returning
//!   normalized paths such as `$['store']['book'][0]['price']`
//! - **Evaluation listeners** observing matches and stopping enumeration
//!
//! ## Usage
//!
//! ```no_run
//! use pathwise_core::prelude::*;
//! use serde_json::json;
//!
//! let mut ctx = ParseContext::default()
//!     .parse(r#"{"store":{"book":[{"price":10},{"price":20}]}}"#)
//!     .expect("valid JSON");
//! let modified = ctx
//!     .set_paths("$.store.book[*].price", json!(0))
//!     .expect("valid path");
//! assert_eq!(modified.len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod jsonpath;
pub mod listener;
pub mod mapper;
pub mod predicate;
pub mod prelude;
pub mod provider;

pub use cache::{
    CacheKey, CacheStats, ConcurrentPathCache, LruPathCache, NoopPathCache, PathCache,
    PathCacheProvider,
};
pub use config::{Configuration, ConfigurationBuilder, EvalOption};
pub use context::{Document, DocumentContext, ParseContext, PathRef};
pub use error::{ErrorKind, JsonPathError, JsonPathResult};
pub use jsonpath::{JsonPath, JsonPathParser, NormalizedPath};
pub use listener::{
    EvaluationContinuation, EvaluationListener, FoundResult, LimitingEvaluationListener,
};
pub use mapper::{MappingProvider, SerdeMappingProvider, TargetType};
pub use predicate::{Filter, Predicate, PredicateContext};
pub use provider::{Charset, JsonProvider, SerdeJsonProvider};

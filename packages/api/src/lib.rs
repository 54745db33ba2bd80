//! Pathwise public API
//!
//! Static entry points over the `pathwise_core` engine. Parse a document,
//! read it with JSONPath expressions and mutate it, getting back the
//! normalized path of every changed node.
//!
//! ```no_run
//! use pathwise::Pathwise;
//! use serde_json::json;
//!
//! let mut ctx = Pathwise::parse(r#"{"a": {"old": 1}}"#).expect("valid JSON");
//! ctx.rename_key("$.a", "old", "new").expect("valid path");
//! assert_eq!(ctx.read("$.a.new").expect("present"), json!(1));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use pathwise_core::prelude;
pub use pathwise_core::{
    CacheKey, CacheStats, Charset, ConcurrentPathCache, Configuration, ConfigurationBuilder,
    Document, DocumentContext, ErrorKind, EvalOption, EvaluationContinuation, EvaluationListener,
    Filter, FoundResult, JsonPath, JsonPathError, JsonPathParser, JsonPathResult, JsonProvider,
    LimitingEvaluationListener, LruPathCache, MappingProvider, NoopPathCache, NormalizedPath,
    ParseContext, PathCache, PathCacheProvider, PathRef, Predicate, PredicateContext,
    SerdeJsonProvider, SerdeMappingProvider, TargetType,
};

/// Main entry point providing static constructors
pub struct Pathwise;

impl Pathwise {
    /// Parse JSON text with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for blank text and `InvalidJson` for malformed text.
    pub fn parse(json: &str) -> JsonPathResult<DocumentContext> {
        ParseContext::default().parse(json)
    }

    /// Wrap an already built document with the default configuration
    #[must_use]
    pub fn parse_value(value: Value) -> DocumentContext {
        ParseContext::default().parse_value(value)
    }

    /// Read UTF-8 JSON from a stream with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `Io` when reading fails and `InvalidJson` for malformed input.
    pub fn parse_reader(reader: impl Read) -> JsonPathResult<DocumentContext> {
        ParseContext::default().parse_reader(reader)
    }

    /// Read a UTF-8 JSON file with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file can not be read and `InvalidJson` for malformed content.
    pub fn parse_file(path: impl AsRef<Path>) -> JsonPathResult<DocumentContext> {
        ParseContext::default().parse_file(path)
    }

    /// Parse context bound to `configuration`
    #[must_use]
    pub fn using(configuration: Configuration) -> ParseContext {
        ParseContext::new(configuration)
    }

    /// Parse context bound to `configuration` and `cache`
    #[must_use]
    pub fn using_cache(configuration: Configuration, cache: Arc<dyn PathCache>) -> ParseContext {
        ParseContext::new(configuration).with_cache(cache)
    }

    /// Compile a path for explicit reuse, bypassing every cache
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for blank text and `InvalidPath` for malformed
    /// paths or a placeholder/predicate count mismatch.
    pub fn compile(path: &str, predicates: &[Arc<dyn Predicate>]) -> JsonPathResult<JsonPath> {
        JsonPath::compile(path, predicates)
    }

    /// One-shot read of `path` from JSON text
    ///
    /// # Errors
    ///
    /// Parse errors of [`Pathwise::parse`] and read errors of [`DocumentContext::read`].
    pub fn read(json: &str, path: &str) -> JsonPathResult<Value> {
        Self::parse(json)?.read(path)
    }

    /// One-shot read of `path` from JSON text, deserialized into `T`
    ///
    /// # Errors
    ///
    /// As [`Pathwise::read`], plus `Conversion` when the result does not fit `T`.
    pub fn read_as<T: DeserializeOwned>(json: &str, path: &str) -> JsonPathResult<T> {
        Self::parse(json)?.read_as(path)
    }
}

/// Parse JSON text with the default configuration
///
/// Shorthand for [`Pathwise::parse`]
///
/// # Errors
///
/// See [`Pathwise::parse`].
pub fn parse(json: &str) -> JsonPathResult<DocumentContext> {
    Pathwise::parse(json)
}

/// Compile a path for explicit reuse
///
/// Shorthand for [`Pathwise::compile`]
///
/// # Errors
///
/// See [`Pathwise::compile`].
pub fn compile(path: &str, predicates: &[Arc<dyn Predicate>]) -> JsonPathResult<JsonPath> {
    Pathwise::compile(path, predicates)
}

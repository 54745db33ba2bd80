//! Core error types for path-context operations

use thiserror::Error;

/// Failure families surfaced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Blank path text, blank document text, non-positive limit and similar caller mistakes
    InvalidArgument,
    /// Malformed path or predicate syntax (compile error)
    InvalidPath,
    /// A definite path did not resolve against the document
    PathNotFound,
    /// Traversal failed for a reason other than a missing node
    Evaluation,
    /// Mutation operand does not fit the shape of the matched container
    MutationType,
    /// The mapper could not produce the requested target shape
    Conversion,
    /// The document provider rejected its input
    InvalidJson,
    /// Reading a document source failed
    Io,
}

/// Main error type for path-context operations
#[derive(Debug, Clone, Error)]
#[error("JSON Path Error: {message}")]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Result type for path-context operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the error came out of the compile step
    #[inline]
    #[must_use]
    pub fn is_compile_error(&self) -> bool {
        self.kind == ErrorKind::InvalidPath
    }

    /// Whether the error is one of the evaluation failures a read may suppress
    #[inline]
    #[must_use]
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self.kind, ErrorKind::PathNotFound | ErrorKind::Evaluation)
    }
}

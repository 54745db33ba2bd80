//! Factory methods for creating errors with consistent messages

use super::types::{ErrorKind, JsonPathError};

impl JsonPathError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg.into())
    }

    /// Creates an invalid path expression error
    ///
    /// # Arguments
    /// * `expression` - The offending path text
    /// * `reason` - Why the expression was rejected
    /// * `position` - Optional character position where the problem was detected
    pub fn invalid_expression(
        expression: impl Into<String>,
        reason: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        let expression = expression.into();
        let reason = reason.into();
        let message = match position {
            Some(pos) => format!("Invalid expression '{expression}': {reason} at position {pos}"),
            None => format!("Invalid expression '{expression}': {reason}"),
        };
        Self::new(ErrorKind::InvalidPath, message)
    }

    pub fn path_not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::PathNotFound, msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Evaluation, msg.into())
    }

    /// Creates a mutation type error for an operation against a mismatched node
    ///
    /// # Arguments
    /// * `operation` - Mutation name (`add`, `put`, ...)
    /// * `path` - Concrete path of the offending node
    /// * `expected` - Container shape the operation requires
    pub fn mutation_type(operation: &str, path: &str, expected: &str) -> Self {
        Self::new(
            ErrorKind::MutationType,
            format!("{operation} requires {expected} at {path}"),
        )
    }

    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion, msg.into())
    }

    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidJson, msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, msg.into())
    }
}

/// Shorthand used throughout the compiler
pub fn invalid_expression_error(
    expression: &str,
    reason: impl Into<String>,
    position: Option<usize>,
) -> JsonPathError {
    JsonPathError::invalid_expression(expression, reason, position)
}

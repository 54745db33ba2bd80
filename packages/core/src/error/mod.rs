//! Error handling for path compilation, evaluation and mutation
//!
//! Every fallible operation in this crate returns [`JsonPathResult`]. Errors are
//! classified by [`ErrorKind`] so callers can branch on the failure family without
//! matching message text.

mod constructors;
mod conversions;
mod types;

pub use constructors::invalid_expression_error;
pub use types::{ErrorKind, JsonPathError, JsonPathResult};

//! Filter expression evaluation
//!
//! Filters are evaluated against one candidate node at a time. Paths inside a
//! filter start either at the candidate (`@`) or at the document root (`$`).

mod comparisons;
mod core;
mod functions;

pub(crate) use self::core::matches;
pub use functions::{REGEX_CACHE, RegexCache};

//! Document contexts
//!
//! [`ParseContext`] turns input into a [`DocumentContext`], which binds one
//! document to one configuration and a path cache. Reads and mutations accept
//! either path text (compiled through the cache) or an already compiled
//! [`JsonPath`](crate::jsonpath::JsonPath), see [`PathRef`].

mod core;
mod document;
mod parse;
mod path_ref;
mod read;
mod write;

pub use self::core::DocumentContext;
pub use document::Document;
pub use parse::ParseContext;
pub use path_ref::PathRef;

//! Normalized paths
//!
//! Every node produced by evaluation is identified by a normalized path in
//! canonical bracket notation (`$['store']['book'][0]`). These strings are what
//! mutations report and what `AsPathList` reads return.

mod operations;
mod types;

pub use types::{NormalizedPath, PathSegment};

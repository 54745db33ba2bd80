//! Selector chain evaluation
//!
//! The evaluator walks a document depth first and hands every matched node,
//! together with its normalized path, to a sink. The sink decides whether the
//! walk continues, which is how listeners stop enumeration early.

mod arrays;
mod core;
mod selectors;

pub(crate) use self::core::{Evaluator, Sink, WalkMode};

//! Path expression language
//!
//! Tokenizer, parsers, compiler, evaluator and mutation engine for the
//! JSONPath dialect used by document contexts.

pub mod ast;
pub mod compiler;
pub(crate) mod evaluator;
pub mod expression;
pub mod filter;
pub mod filter_parser;
pub(crate) mod mutation;
pub mod normalized_paths;
pub mod path;
pub mod selector_parser;
pub mod tokenizer;
pub mod tokens;

pub use ast::{ComparisonOp, FilterExpression, FilterValue, JsonSelector, LogicalOp};
pub use compiler::JsonPathParser;
pub use expression::JsonPathExpression;
pub use mutation::MapFunction;
pub use normalized_paths::{NormalizedPath, PathSegment};
pub use path::JsonPath;

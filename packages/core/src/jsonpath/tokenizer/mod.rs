//! Path expression tokenizer
//!
//! Converts raw expression text into a token queue consumed by the selector and
//! filter parsers.

mod characters;
mod core;
mod numbers;
mod operators;
mod strings;

pub use self::core::ExpressionParser;

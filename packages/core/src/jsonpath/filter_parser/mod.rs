//! Filter expression parsing for `[?(...)]` selectors and standalone filters

pub mod core;
pub mod expressions;

pub use self::core::FilterParser;

//! Selector parsing for dot, descendant and bracket segments

pub mod bracket;
pub mod core;
pub mod slice;

pub use self::core::SelectorParser;

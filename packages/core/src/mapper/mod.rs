//! Value mapping
//!
//! Converts extracted values to a requested target shape. Target shapes form a
//! closed set of strategies described by [`TargetType`].

mod serde_mapper;
mod target;

use std::fmt;

use serde_json::Value;

use crate::config::Configuration;
use crate::error::JsonPathResult;

pub use serde_mapper::SerdeMappingProvider;
pub use target::TargetType;

/// Converts values to target shapes
pub trait MappingProvider: Send + Sync + fmt::Debug {
    /// Convert `value` to `target`
    ///
    /// # Errors
    ///
    /// Returns a `Conversion` error when the value has an incompatible shape.
    fn map(
        &self,
        value: Value,
        target: &TargetType,
        configuration: &Configuration,
    ) -> JsonPathResult<Value>;
}

//! Read operations

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{core::DocumentContext, path_ref::PathRef};
use crate::error::{JsonPathError, JsonPathResult};
use crate::mapper::TargetType;

impl DocumentContext {
    /// Evaluate a path against the document
    ///
    /// Definite paths yield the matched value; indefinite paths yield an array.
    /// Listeners of this context's configuration may end enumeration early.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for blank text, `InvalidPath` for malformed
    /// paths and `PathNotFound` when a definite path matches nothing (unless
    /// `SuppressExceptions` is set).
    pub fn read<'p>(&self, path: impl Into<PathRef<'p>>) -> JsonPathResult<Value> {
        let compiled = self.resolve(path.into())?;
        self.document
            .with(|document| compiled.read(document, &self.configuration))?
    }

    /// Read and deserialize the result into `T`
    ///
    /// # Errors
    ///
    /// Everything [`DocumentContext::read`] reports, plus a `Conversion` error
    /// when the result does not fit `T`.
    pub fn read_as<'p, T: DeserializeOwned>(
        &self,
        path: impl Into<PathRef<'p>>,
    ) -> JsonPathResult<T> {
        let value = self.read(path)?;
        serde_json::from_value(value).map_err(|e| {
            JsonPathError::conversion(format!(
                "can not convert result to {}: {e}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Read and convert the result with the configured mapping provider
    ///
    /// # Errors
    ///
    /// Everything [`DocumentContext::read`] reports, plus a `Conversion` error
    /// from the mapper.
    pub fn read_typed<'p>(
        &self,
        path: impl Into<PathRef<'p>>,
        target: &TargetType,
    ) -> JsonPathResult<Value> {
        let value = self.read(path)?;
        self.configuration
            .mapping_provider()
            .map(value, target, &self.configuration)
    }
}

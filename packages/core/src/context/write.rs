//! Mutation operations
//!
//! Each mutation has a fluent form returning the context and a `*_paths` form
//! returning the normalized paths it changed. Both record the paths for
//! [`DocumentContext::last_modified`].
//!
//! Targets are collected and validated against a snapshot of the document, so
//! listeners and `map` functions may read the document through any context.
//! Only the final commit holds the document exclusively.

use serde_json::Value;

use super::{core::DocumentContext, path_ref::PathRef};
use crate::config::Configuration;
use crate::error::JsonPathResult;
use crate::jsonpath::MapFunction;
use crate::jsonpath::mutation::Mutation;

impl DocumentContext {
    /// Replace every match with `value`
    ///
    /// # Errors
    ///
    /// Returns `MutationType` when the path addresses the root, besides the
    /// path resolution errors of [`DocumentContext::read`].
    pub fn set<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        value: Value,
    ) -> JsonPathResult<&mut Self> {
        self.set_paths(path, value)?;
        Ok(self)
    }

    /// [`DocumentContext::set`], returning the modified paths
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::set`].
    pub fn set_paths<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        value: Value,
    ) -> JsonPathResult<Vec<String>> {
        let operand = value.to_string();
        self.mutate(path.into(), &operand, &Mutation::Set(value))
    }

    /// Replace every match with `func(current value, configuration)`
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::set`].
    pub fn map<'p, F>(&mut self, path: impl Into<PathRef<'p>>, func: F) -> JsonPathResult<&mut Self>
    where
        F: Fn(Value, &Configuration) -> Value,
    {
        self.map_paths(path, func)?;
        Ok(self)
    }

    /// [`DocumentContext::map`], returning the modified paths
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::set`].
    pub fn map_paths<'p, F>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        func: F,
    ) -> JsonPathResult<Vec<String>>
    where
        F: Fn(Value, &Configuration) -> Value,
    {
        let func: &MapFunction<'_> = &func;
        self.mutate(path.into(), "<function>", &Mutation::Map(func))
    }

    /// Remove every match from its container
    ///
    /// A path matching nothing changes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::set`].
    pub fn delete<'p>(&mut self, path: impl Into<PathRef<'p>>) -> JsonPathResult<&mut Self> {
        self.delete_paths(path)?;
        Ok(self)
    }

    /// [`DocumentContext::delete`], returning the modified paths
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::set`].
    pub fn delete_paths<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
    ) -> JsonPathResult<Vec<String>> {
        self.mutate(path.into(), "", &Mutation::Delete)
    }

    /// Append `value` to every matched array
    ///
    /// # Errors
    ///
    /// Returns `MutationType`, leaving the document unchanged, if any match
    /// is not an array.
    pub fn add<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        value: Value,
    ) -> JsonPathResult<&mut Self> {
        self.add_paths(path, value)?;
        Ok(self)
    }

    /// [`DocumentContext::add`], returning the modified paths
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::add`].
    pub fn add_paths<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        value: Value,
    ) -> JsonPathResult<Vec<String>> {
        let operand = value.to_string();
        self.mutate(path.into(), &operand, &Mutation::Add(value))
    }

    /// Insert or overwrite `key` with `value` in every matched object
    ///
    /// # Errors
    ///
    /// Returns `MutationType`, leaving the document unchanged, if any match
    /// is not an object.
    pub fn put<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        key: &str,
        value: Value,
    ) -> JsonPathResult<&mut Self> {
        self.put_paths(path, key, value)?;
        Ok(self)
    }

    /// [`DocumentContext::put`], returning the modified paths
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::put`].
    pub fn put_paths<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        key: &str,
        value: Value,
    ) -> JsonPathResult<Vec<String>> {
        let operand = format!("{key} = {value}");
        let mutation = Mutation::Put {
            key: key.to_string(),
            value,
        };
        self.mutate(path.into(), &operand, &mutation)
    }

    /// Rename `old_key` to `new_key` in every matched object that has `old_key`
    ///
    /// The value and the member position are kept.
    ///
    /// # Errors
    ///
    /// Returns `MutationType`, leaving the document unchanged, if any match
    /// is not an object.
    pub fn rename_key<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        old_key: &str,
        new_key: &str,
    ) -> JsonPathResult<&mut Self> {
        self.rename_key_paths(path, old_key, new_key)?;
        Ok(self)
    }

    /// [`DocumentContext::rename_key`], returning the modified paths
    ///
    /// # Errors
    ///
    /// See [`DocumentContext::rename_key`].
    pub fn rename_key_paths<'p>(
        &mut self,
        path: impl Into<PathRef<'p>>,
        old_key: &str,
        new_key: &str,
    ) -> JsonPathResult<Vec<String>> {
        let operand = format!("{old_key} -> {new_key}");
        let mutation = Mutation::RenameKey {
            old_key: old_key.to_string(),
            new_key: new_key.to_string(),
        };
        self.mutate(path.into(), &operand, &mutation)
    }

    fn mutate(
        &mut self,
        path: PathRef<'_>,
        operand: &str,
        mutation: &Mutation<'_>,
    ) -> JsonPathResult<Vec<String>> {
        let compiled = self.resolve(path)?;
        let plan = {
            let snapshot = self.document.current()?;
            compiled.plan(&snapshot, &self.configuration, mutation)?
        };
        let modified: Vec<String> = self
            .document
            .with_mut(|document| plan.commit(document, mutation))??
            .iter()
            .map(ToString::to_string)
            .collect();

        for path in &modified {
            tracing::debug!(
                target: "pathwise::context",
                operation = mutation.name(),
                path = %path,
                operand,
                "modified path"
            );
        }

        self.last_modified.clone_from(&modified);
        Ok(modified)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::cache::ConcurrentPathCache;
    use crate::context::Document;
    use crate::error::ErrorKind;

    fn context(value: Value) -> DocumentContext {
        DocumentContext::with_cache(
            Document::new(value),
            Configuration::default(),
            Arc::new(ConcurrentPathCache::new()),
        )
    }

    #[test]
    fn fluent_mutations_chain() {
        let mut ctx = context(json!({"a": {"old": 1}, "list": []}));
        ctx.put("$.a", "extra", json!(true))
            .unwrap()
            .rename_key("$.a", "old", "new")
            .unwrap()
            .add("$.list", json!("x"))
            .unwrap();

        assert_eq!(ctx.last_modified(), ["$['list']"]);
        assert_eq!(
            ctx.json().unwrap(),
            json!({"a": {"new": 1, "extra": true}, "list": ["x"]})
        );
    }

    #[test]
    fn map_uses_the_current_value() {
        let mut ctx = context(json!({"prices": [1, 2]}));
        let modified = ctx
            .map_paths("$.prices[*]", |value, _| json!(value.as_i64().unwrap_or(0) * 10))
            .unwrap();
        assert_eq!(modified, ["$['prices'][0]", "$['prices'][1]"]);
        assert_eq!(ctx.read("$.prices").unwrap(), json!([10, 20]));
    }

    #[test]
    fn failed_mutations_keep_the_previous_report() {
        let mut ctx = context(json!({"a": 1, "b": []}));
        ctx.add("$.b", json!(1)).unwrap();
        let err = ctx.add("$.a", json!(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MutationType);
        assert_eq!(ctx.last_modified(), ["$['b']"]);
    }
}

//! Per-selector application

use std::ops::ControlFlow;

use serde_json::Value;

use super::arrays::{normalize_index, slice_indices};
use super::core::{Evaluator, Sink, WalkMode};
use crate::config::EvalOption;
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::{ast::JsonSelector, filter, normalized_paths::{NormalizedPath, PathSegment}};
use crate::predicate::PredicateContext;

static NULL: Value = Value::Null;

macro_rules! propagate_break {
    ($flow:expr) => {
        if $flow?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    };
}

impl<'a> Evaluator<'a> {
    /// Apply one selector to `node`, then the remaining chain to every selected child
    pub(super) fn apply(
        &self,
        selector: &JsonSelector,
        node: &'a Value,
        rest: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        match selector {
            JsonSelector::Root => {
                let mut root_path = NormalizedPath::root();
                self.walk(self.root, rest, &mut root_path, sink)
            }
            JsonSelector::Child { name } => self.select_member(node, name, rest, path, sink),
            JsonSelector::Index { index } => {
                let Value::Array(items) = node else {
                    return Ok(ControlFlow::Continue(()));
                };
                match normalize_index(*index, items.len()) {
                    Some(i) => self.descend(&items[i], PathSegment::Index(i), rest, path, sink),
                    None => Ok(ControlFlow::Continue(())),
                }
            }
            JsonSelector::Slice { start, end, step } => {
                let Value::Array(items) = node else {
                    return Ok(ControlFlow::Continue(()));
                };
                for i in slice_indices(*start, *end, *step, items.len()) {
                    propagate_break!(self.descend(
                        &items[i],
                        PathSegment::Index(i),
                        rest,
                        path,
                        sink
                    ));
                }
                Ok(ControlFlow::Continue(()))
            }
            JsonSelector::Wildcard => self.select_children(node, rest, path, sink),
            JsonSelector::RecursiveDescent => self.descendants(node, rest, path, sink),
            JsonSelector::Filter { expression } => {
                self.select_where(node, rest, path, sink, |item| {
                    filter::matches(expression, item, self)
                })
            }
            JsonSelector::Predicate { slot } => {
                let predicate = self.predicates.get(*slot).ok_or_else(|| {
                    JsonPathError::evaluation(format!("no predicate bound to placeholder {slot}"))
                })?;
                self.select_where(node, rest, path, sink, |item| {
                    Ok(predicate.apply(&PredicateContext::new(item, self.root, self.configuration)))
                })
            }
            JsonSelector::Union { selectors } => {
                for member in selectors {
                    propagate_break!(self.apply(member, node, rest, path, sink));
                }
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn descend(
        &self,
        child: &'a Value,
        segment: PathSegment,
        rest: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        path.push(segment);
        let flow = self.walk(child, rest, path, sink);
        path.pop();
        flow
    }

    fn select_member(
        &self,
        node: &'a Value,
        name: &str,
        rest: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        let Value::Object(members) = node else {
            return Ok(ControlFlow::Continue(()));
        };
        let segment = PathSegment::Member(name.to_string());

        if let Some(child) = members.get(name) {
            return self.descend(child, segment, rest, path, sink);
        }

        match self.mode {
            WalkMode::Read
                if rest.is_empty()
                    && self
                        .configuration
                        .contains_option(EvalOption::DefaultPathLeafToNull) =>
            {
                self.descend(&NULL, segment, rest, path, sink)
            }
            WalkMode::Read | WalkMode::Update
                if self
                    .configuration
                    .contains_option(EvalOption::RequireProperties) =>
            {
                Err(JsonPathError::path_not_found(format!(
                    "missing property in path {path}{segment}"
                )))
            }
            _ => Ok(ControlFlow::Continue(())),
        }
    }

    fn select_children(
        &self,
        node: &'a Value,
        rest: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        match node {
            Value::Object(members) => {
                for (name, child) in members {
                    propagate_break!(self.descend(
                        child,
                        PathSegment::Member(name.clone()),
                        rest,
                        path,
                        sink
                    ));
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    propagate_break!(self.descend(child, PathSegment::Index(i), rest, path, sink));
                }
            }
            _ => {}
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Apply `rest` at `node` and at every descendant, parents before children
    ///
    /// A member selector directly after `..` only considers objects that have
    /// the member, so scans never synthesize or require properties.
    fn descendants(
        &self,
        node: &'a Value,
        rest: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        let absent_member = match (rest.first(), node) {
            (Some(JsonSelector::Child { name }), Value::Object(members)) => {
                !members.contains_key(name)
            }
            (Some(JsonSelector::Child { .. }), _) => true,
            _ => false,
        };
        if !absent_member {
            propagate_break!(self.walk(node, rest, path, sink));
        }

        match node {
            Value::Object(members) => {
                for (name, child) in members {
                    path.push(PathSegment::Member(name.clone()));
                    let flow = self.descendants(child, rest, path, sink);
                    path.pop();
                    propagate_break!(flow);
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    path.push(PathSegment::Index(i));
                    let flow = self.descendants(child, rest, path, sink);
                    path.pop();
                    propagate_break!(flow);
                }
            }
            _ => {}
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Arrays are filtered element by element; any other node is tested itself
    fn select_where(
        &self,
        node: &'a Value,
        rest: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
        accept: impl Fn(&'a Value) -> JsonPathResult<bool>,
    ) -> JsonPathResult<ControlFlow<()>> {
        match node {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if accept(item)? {
                        propagate_break!(self.descend(
                            item,
                            PathSegment::Index(i),
                            rest,
                            path,
                            sink
                        ));
                    }
                }
                Ok(ControlFlow::Continue(()))
            }
            Value::Object(_) if accept(node)? => self.walk(node, rest, path, sink),
            _ => Ok(ControlFlow::Continue(())),
        }
    }
}

//! Validation and application

use std::sync::Arc;

use serde_json::{Map, Value};

use super::{MapFunction, Mutation};
use super::collect::collect_targets;
use crate::config::Configuration;
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::{
    expression::JsonPathExpression,
    normalized_paths::{NormalizedPath, PathSegment},
};
use crate::predicate::Predicate;

/// Validated targets of a mutation, worked out without changing the document
#[derive(Debug)]
pub(crate) struct MutationPlan {
    targets: Vec<NormalizedPath>,
    /// Mapped values for the outermost targets of a `map`
    replacements: Vec<(NormalizedPath, Value)>,
}

impl MutationPlan {
    /// Apply the plan, returning the changed locations in traversal order
    ///
    /// `document` must still have the shape the plan was validated against.
    pub(crate) fn commit(
        self,
        document: &mut Value,
        mutation: &Mutation<'_>,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        if let Mutation::Map(_) = mutation {
            for (target, value) in self.replacements {
                let node = target
                    .resolve_mut(document)
                    .ok_or_else(|| vanished(mutation, &target))?;
                *node = value;
            }
        } else {
            let mut order: Vec<&NormalizedPath> = self.targets.iter().collect();
            order.sort_by(|a, b| b.cmp(a));
            for target in order {
                apply_at(document, target, mutation)?;
            }
        }
        Ok(self.targets)
    }
}

/// Apply `mutation` at every location matched by `expression`
///
/// Returns the normalized paths of the changed locations in traversal order.
pub(crate) fn mutate(
    expression: &JsonPathExpression,
    predicates: &[Arc<dyn Predicate>],
    document: &mut Value,
    configuration: &Configuration,
    mutation: &Mutation<'_>,
) -> JsonPathResult<Vec<NormalizedPath>> {
    plan(expression, predicates, document, configuration, mutation)?.commit(document, mutation)
}

/// Collect and validate the targets of `mutation` without changing `document`
///
/// Listeners and `map` functions run here, so callers can hold `document`
/// through a snapshot and take exclusive access only for the commit.
pub(crate) fn plan(
    expression: &JsonPathExpression,
    predicates: &[Arc<dyn Predicate>],
    document: &Value,
    configuration: &Configuration,
    mutation: &Mutation<'_>,
) -> JsonPathResult<MutationPlan> {
    let targets = collect_targets(expression, predicates, document, configuration)?;
    let targets = validate(&targets, document, mutation)?;
    let replacements = match mutation {
        Mutation::Map(func) => map_outermost(&targets, document, func, configuration),
        _ => Vec::new(),
    };

    tracing::trace!(
        target: "pathwise::evaluator",
        operation = mutation.name(),
        path = %expression.as_str(),
        targets = targets.len(),
        "mutation planned"
    );
    Ok(MutationPlan {
        targets,
        replacements,
    })
}

/// Run `func` over copies of the outermost targets, deepest location first
///
/// A target nested in another one is mapped inside its ancestor's copy, so
/// the ancestor's function sees the already mapped descendant.
fn map_outermost(
    targets: &[NormalizedPath],
    document: &Value,
    func: &MapFunction<'_>,
    configuration: &Configuration,
) -> Vec<(NormalizedPath, Value)> {
    let outermost: Vec<&NormalizedPath> = targets
        .iter()
        .filter(|target| {
            !targets
                .iter()
                .any(|other| other != *target && target.strip_prefix(other).is_some())
        })
        .collect();

    let mut order: Vec<&NormalizedPath> = targets.iter().collect();
    order.sort_by(|a, b| b.cmp(a));

    outermost
        .into_iter()
        .filter_map(|top| {
            let mut copy = top.resolve(document)?.clone();
            for relative in order.iter().filter_map(|target| target.strip_prefix(top)) {
                if let Some(node) = relative.resolve_mut(&mut copy) {
                    *node = func(std::mem::take(node), configuration);
                }
            }
            Some((top.clone(), copy))
        })
        .collect()
}

/// Check every target before anything changes; drops targets the mutation skips
fn validate(
    targets: &[NormalizedPath],
    document: &Value,
    mutation: &Mutation<'_>,
) -> JsonPathResult<Vec<NormalizedPath>> {
    let mut accepted = Vec::with_capacity(targets.len());
    for target in targets {
        let node = target.resolve(document);
        let operation = mutation.name();
        match mutation {
            Mutation::Set(_) | Mutation::Delete | Mutation::Map(_) => {
                if target.is_root() {
                    return Err(JsonPathError::mutation_type(
                        operation,
                        &target.to_string(),
                        "a node below the root",
                    ));
                }
            }
            Mutation::Add(_) => {
                if !matches!(node, Some(Value::Array(_))) {
                    return Err(JsonPathError::mutation_type(
                        operation,
                        &target.to_string(),
                        "an array",
                    ));
                }
            }
            Mutation::Put { .. } => {
                if !matches!(node, Some(Value::Object(_))) {
                    return Err(JsonPathError::mutation_type(
                        operation,
                        &target.to_string(),
                        "an object",
                    ));
                }
            }
            Mutation::RenameKey { old_key, .. } => match node {
                Some(Value::Object(members)) if !members.contains_key(old_key) => continue,
                Some(Value::Object(_)) => {}
                _ => {
                    return Err(JsonPathError::mutation_type(
                        operation,
                        &target.to_string(),
                        "an object",
                    ));
                }
            },
        }
        accepted.push(target.clone());
    }
    Ok(accepted)
}

fn vanished(mutation: &Mutation<'_>, target: &NormalizedPath) -> JsonPathError {
    JsonPathError::evaluation(format!(
        "{} target {target} no longer exists",
        mutation.name()
    ))
}

fn apply_at(
    document: &mut Value,
    target: &NormalizedPath,
    mutation: &Mutation<'_>,
) -> JsonPathResult<()> {
    let missing = || vanished(mutation, target);

    if let Mutation::Delete = mutation {
        let (parent, last) = target.split_last().ok_or_else(missing)?;
        match (parent.resolve_mut(document), last) {
            (Some(Value::Object(members)), PathSegment::Member(name)) => {
                members.retain(|key, _| key != name);
            }
            (Some(Value::Array(items)), PathSegment::Index(index)) if *index < items.len() => {
                items.remove(*index);
            }
            _ => return Err(missing()),
        }
        return Ok(());
    }

    let node = target.resolve_mut(document).ok_or_else(missing)?;
    match mutation {
        Mutation::Set(value) => *node = value.clone(),
        Mutation::Add(value) => match node {
            Value::Array(items) => items.push(value.clone()),
            _ => return Err(missing()),
        },
        Mutation::Put { key, value } => match node {
            Value::Object(members) => {
                members.insert(key.clone(), value.clone());
            }
            _ => return Err(missing()),
        },
        Mutation::RenameKey { old_key, new_key } => match node {
            Value::Object(members) => rename_in_place(members, old_key, new_key),
            _ => return Err(missing()),
        },
        Mutation::Delete | Mutation::Map(_) => {}
    }
    Ok(())
}

/// Rename `old_key` keeping its position; an existing `new_key` entry is replaced
fn rename_in_place(members: &mut Map<String, Value>, old_key: &str, new_key: &str) {
    if old_key == new_key {
        return;
    }
    let renamed = std::mem::take(members)
        .into_iter()
        .filter(|(key, _)| key != new_key)
        .map(|(key, value)| {
            if key == old_key {
                (new_key.to_string(), value)
            } else {
                (key, value)
            }
        })
        .collect();
    *members = renamed;
}

//! Target collection

use std::ops::ControlFlow;
use std::sync::Arc;

use hashbrown::HashSet;
use serde_json::Value;

use crate::config::Configuration;
use crate::error::JsonPathResult;
use crate::jsonpath::{
    evaluator::{Evaluator, WalkMode},
    expression::JsonPathExpression,
    normalized_paths::NormalizedPath,
};
use crate::listener::{FoundResult, notify};
use crate::predicate::Predicate;

/// Distinct matched locations in traversal order
///
/// Listeners of `configuration` see each distinct location and may stop the
/// collection early.
pub(super) fn collect_targets(
    expression: &JsonPathExpression,
    predicates: &[Arc<dyn Predicate>],
    document: &Value,
    configuration: &Configuration,
) -> JsonPathResult<Vec<NormalizedPath>> {
    let evaluator = Evaluator::new(document, predicates, configuration).with_mode(WalkMode::Update);
    let listeners = configuration.evaluation_listeners();

    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    evaluator.evaluate(expression.selectors(), &mut |path, value| {
        if !seen.insert(path.clone()) {
            return ControlFlow::Continue(());
        }
        let rendered = path.to_string();
        let flow = notify(listeners, &FoundResult::new(targets.len(), &rendered, value));
        targets.push(path.clone());
        flow
    })?;

    Ok(targets)
}

//! Evaluation listeners
//!
//! A listener observes every match found while a path is evaluated and may
//! stop the enumeration early. Listeners travel with a [`Configuration`], so
//! attaching one always yields a new configuration.
//!
//! [`Configuration`]: crate::config::Configuration

use std::ops::ControlFlow;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{JsonPathError, JsonPathResult};

/// Decision returned by a listener after each match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationContinuation {
    /// Keep enumerating matches
    Continue,
    /// Stop after the current match
    Abort,
}

/// One match reported to a listener
#[derive(Debug, Clone, Copy)]
pub struct FoundResult<'a> {
    index: usize,
    path: &'a str,
    result: &'a Value,
}

impl<'a> FoundResult<'a> {
    pub(crate) fn new(index: usize, path: &'a str, result: &'a Value) -> Self {
        Self {
            index,
            path,
            result,
        }
    }

    /// 0-based ordinal of this match among the matches found so far
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Normalized path of the match
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> &'a Value {
        self.result
    }
}

/// Observer of evaluation results
pub trait EvaluationListener: Send + Sync {
    fn result_found(&self, found: &FoundResult<'_>) -> EvaluationContinuation;
}

impl<F> EvaluationListener for F
where
    F: Fn(&FoundResult<'_>) -> EvaluationContinuation + Send + Sync,
{
    fn result_found(&self, found: &FoundResult<'_>) -> EvaluationContinuation {
        self(found)
    }
}

/// Listener that stops enumeration once `limit` matches have been seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitingEvaluationListener {
    limit: usize,
}

impl LimitingEvaluationListener {
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when `limit` is zero.
    pub fn new(limit: usize) -> JsonPathResult<Self> {
        if limit == 0 {
            return Err(JsonPathError::invalid_argument(
                "limit must be greater than 0",
            ));
        }
        Ok(Self { limit })
    }

    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl EvaluationListener for LimitingEvaluationListener {
    fn result_found(&self, found: &FoundResult<'_>) -> EvaluationContinuation {
        if found.index() == self.limit - 1 {
            EvaluationContinuation::Abort
        } else {
            EvaluationContinuation::Continue
        }
    }
}

/// Notify every listener of `found`; break if any of them asked to abort
pub(crate) fn notify(
    listeners: &[Arc<dyn EvaluationListener>],
    found: &FoundResult<'_>,
) -> ControlFlow<()> {
    let aborted = listeners.iter().fold(false, |aborted, listener| {
        listener.result_found(found) == EvaluationContinuation::Abort || aborted
    });

    if aborted {
        tracing::trace!(
            target: "pathwise::evaluator",
            index = found.index(),
            path = found.path(),
            "evaluation aborted by listener"
        );
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

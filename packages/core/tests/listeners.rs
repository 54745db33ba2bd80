//! Tests for evaluation listeners and early abort

use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use pathwise_core::prelude::*;
use pathwise_core::{ConcurrentPathCache, LimitingEvaluationListener};
use serde_json::{Value, json};

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> DocumentContext {
        ParseContext::default()
            .with_cache(Arc::new(ConcurrentPathCache::new()))
            .parse_value(json!({"items": [1, 2, 3, 4, 5]}))
    }

    #[test]
    fn test_limit_returns_first_n_matches_in_order() {
        let ctx = context();
        assert_eq!(ctx.limit(2).unwrap().read("$.items[*]").unwrap(), json!([1, 2]));
        assert_eq!(ctx.limit(5).unwrap().read("$.items[*]").unwrap(), json!([1, 2, 3, 4, 5]));
        assert_eq!(ctx.limit(10).unwrap().read("$.items[*]").unwrap(), json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_limit_does_not_change_the_original_context() {
        let ctx = context();
        let limited = ctx.limit(1).unwrap();
        assert_eq!(limited.read("$.items[*]").unwrap(), json!([1]));
        assert_eq!(ctx.read("$.items[*]").unwrap(), json!([1, 2, 3, 4, 5]));
        assert!(ctx.configuration().evaluation_listeners().is_empty());
        assert!(limited.document().ptr_eq(ctx.document()));
    }

    #[test]
    fn test_non_positive_limit_is_rejected() {
        let err = context().limit(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(LimitingEvaluationListener::new(0).is_err());
    }

    #[test]
    fn test_listener_sees_indices_paths_and_values() {
        let seen: Arc<Mutex<Vec<(usize, String, Value)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: Arc<dyn EvaluationListener> = Arc::new(move |found: &FoundResult<'_>| {
            sink.lock()
                .unwrap()
                .push((found.index(), found.path().to_string(), found.result().clone()));
            EvaluationContinuation::Continue
        });

        let ctx = context().with_listeners([listener]);
        ctx.read("$.items[3:]").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (0, "$['items'][3]".to_string(), json!(4)),
                (1, "$['items'][4]".to_string(), json!(5)),
            ]
        );
    }

    #[test]
    fn test_any_abort_stops_enumeration() {
        let keep_going: Arc<dyn EvaluationListener> =
            Arc::new(|_: &FoundResult<'_>| EvaluationContinuation::Continue);
        let stop_on_even: Arc<dyn EvaluationListener> = Arc::new(|found: &FoundResult<'_>| {
            if found.result().as_i64().is_some_and(|n| n % 2 == 0) {
                EvaluationContinuation::Abort
            } else {
                EvaluationContinuation::Continue
            }
        });

        let ctx = context().with_listeners([keep_going, stop_on_even]);
        assert_eq!(ctx.read("$.items[*]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_stacked_limits_use_the_smallest() {
        let ctx = context().limit(4).unwrap().limit(2).unwrap();
        assert_eq!(ctx.configuration().evaluation_listeners().len(), 2);
        assert_eq!(ctx.read("$.items[*]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_limit_bounds_mutations() {
        let mut ctx = context().limit(2).unwrap();
        let modified = ctx.set_paths("$.items[*]", json!(0)).unwrap();
        assert_eq!(modified, ["$['items'][0]", "$['items'][1]"]);
        assert_eq!(ctx.json().unwrap(), json!({"items": [0, 0, 3, 4, 5]}));
    }

    /// Run `f` on a worker thread, failing instead of hanging if it never returns
    fn within_timeout<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(f());
        });
        rx.recv_timeout(Duration::from_secs(5))
            .expect("operation did not return")
    }

    #[test]
    fn test_listener_may_read_through_a_sibling_during_mutation() {
        let ctx = ParseContext::default()
            .with_cache(Arc::new(ConcurrentPathCache::new()))
            .parse_value(json!({"xs": [1, 2, 3]}));
        let sibling = ctx.limit(10).unwrap();
        let firsts = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&firsts);
        let listener: Arc<dyn EvaluationListener> = Arc::new(move |_: &FoundResult<'_>| {
            sink.lock().unwrap().push(sibling.read("$.xs[0]").unwrap());
            EvaluationContinuation::Continue
        });
        let mut watched = ctx.with_listeners([listener]);

        let modified = within_timeout(move || watched.set_paths("$.xs[*]", json!(0)).unwrap());
        assert_eq!(modified.len(), 3);
        assert_eq!(*firsts.lock().unwrap(), vec![json!(1), json!(1), json!(1)]);
        assert_eq!(ctx.read("$.xs").unwrap(), json!([0, 0, 0]));
    }

    #[test]
    fn test_listener_may_read_through_a_sibling_during_read() {
        let ctx = context();
        let sibling = ctx.limit(1).unwrap();
        let listener: Arc<dyn EvaluationListener> = Arc::new(move |_: &FoundResult<'_>| {
            if sibling.read("$.items[*]").unwrap() == json!([1]) {
                EvaluationContinuation::Continue
            } else {
                EvaluationContinuation::Abort
            }
        });
        let watched = ctx.with_listeners([listener]);

        let values = within_timeout(move || watched.read("$.items[*]").unwrap());
        assert_eq!(values, json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_map_function_may_read_through_a_sibling() {
        let mut ctx = ParseContext::default()
            .with_cache(Arc::new(ConcurrentPathCache::new()))
            .parse_value(json!({"rate": 3, "prices": [1, 2]}));
        let sibling = ctx.limit(1).unwrap();

        let (modified, prices) = within_timeout(move || {
            let modified = ctx
                .map_paths("$.prices[*]", |value, _| {
                    let rate = sibling.read("$.rate").unwrap().as_i64().unwrap_or(1);
                    json!(value.as_i64().unwrap_or(0) * rate)
                })
                .unwrap();
            (modified, ctx.read("$.prices").unwrap())
        });
        assert_eq!(modified, ["$['prices'][0]", "$['prices'][1]"]);
        assert_eq!(prices, json!([3, 6]));
    }
}

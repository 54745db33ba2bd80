//! Evaluator state and entry points

use std::ops::ControlFlow;
use std::sync::Arc;

use serde_json::Value;

use crate::config::Configuration;
use crate::error::JsonPathResult;
use crate::jsonpath::{ast::JsonSelector, normalized_paths::NormalizedPath};
use crate::predicate::Predicate;

/// Receives each match; `Break` stops the walk
pub(crate) type Sink<'s, 'a> = dyn FnMut(&NormalizedPath, &'a Value) -> ControlFlow<()> + 's;

/// How evaluation options apply to a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkMode {
    /// Reads honour `DefaultPathLeafToNull` and `RequireProperties`
    Read,
    /// Mutation target collection only reports nodes that exist
    Update,
    /// Paths inside filters never fail and never synthesize nodes
    Filter,
}

pub(crate) struct Evaluator<'a> {
    pub(super) root: &'a Value,
    pub(super) predicates: &'a [Arc<dyn Predicate>],
    pub(super) configuration: &'a Configuration,
    pub(super) mode: WalkMode,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(
        root: &'a Value,
        predicates: &'a [Arc<dyn Predicate>],
        configuration: &'a Configuration,
    ) -> Self {
        Self {
            root,
            predicates,
            configuration,
            mode: WalkMode::Read,
        }
    }

    #[must_use]
    pub(crate) fn with_mode(mut self, mode: WalkMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub(crate) fn root(&self) -> &'a Value {
        self.root
    }

    #[inline]
    pub(crate) fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    /// Evaluate a full chain starting at the document root
    pub(crate) fn evaluate(
        &self,
        selectors: &[JsonSelector],
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        let selectors = match selectors.split_first() {
            Some((JsonSelector::Root, rest)) => rest,
            _ => selectors,
        };
        self.walk(self.root, selectors, &mut NormalizedPath::root(), sink)
    }

    /// Evaluate a chain starting at `start`; reported paths are relative to it
    pub(crate) fn evaluate_from(
        &self,
        start: &'a Value,
        selectors: &[JsonSelector],
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        self.walk(start, selectors, &mut NormalizedPath::root(), sink)
    }

    pub(super) fn walk(
        &self,
        node: &'a Value,
        selectors: &[JsonSelector],
        path: &mut NormalizedPath,
        sink: &mut Sink<'_, 'a>,
    ) -> JsonPathResult<ControlFlow<()>> {
        match selectors.split_first() {
            None => Ok(sink(path, node)),
            Some((selector, rest)) => self.apply(selector, node, rest, path, sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::EvalOption;
    use crate::error::ErrorKind;
    use crate::jsonpath::compiler::JsonPathParser;

    fn collect(
        path: &str,
        doc: &Value,
        config: &Configuration,
    ) -> JsonPathResult<Vec<(String, Value)>> {
        let compiled = JsonPathParser::parse_expression(path)?;
        let evaluator = Evaluator::new(doc, &[], config);
        let mut found = Vec::new();
        evaluator.evaluate(compiled.selectors(), &mut |path, value| {
            found.push((path.to_string(), value.clone()));
            ControlFlow::Continue(())
        })?;
        Ok(found)
    }

    fn paths(path: &str, doc: &Value) -> Vec<String> {
        collect(path, doc, &Configuration::default())
            .unwrap()
            .into_iter()
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn wildcard_and_members() {
        let doc = json!({
            "store": {"book": [{"price": 10}, {"price": 20}], "bicycle": {"price": 5}}
        });
        assert_eq!(
            paths("$.store.book[*].price", &doc),
            vec!["$['store']['book'][0]['price']", "$['store']['book'][1]['price']"]
        );
        assert_eq!(
            paths("$.store.*", &doc),
            vec!["$['store']['book']", "$['store']['bicycle']"]
        );
    }

    #[test]
    fn recursive_descent_is_document_ordered() {
        let doc = json!({"a": {"price": 1, "b": {"price": 2}, "c": {}}, "price": 0});
        assert_eq!(
            paths("$..price", &doc),
            vec!["$['price']", "$['a']['price']", "$['a']['b']['price']"]
        );
    }

    #[test]
    fn negative_index_and_unions() {
        let doc = json!({"xs": [1, 2, 3], "a": 1, "b": 2});
        assert_eq!(paths("$.xs[-1]", &doc), vec!["$['xs'][2]"]);
        assert_eq!(paths("$.xs[5]", &doc), Vec::<String>::new());
        assert_eq!(paths("$.xs[2,0]", &doc), vec!["$['xs'][2]", "$['xs'][0]"]);
        assert_eq!(paths("$['b','missing','a']", &doc), vec!["$['b']", "$['a']"]);
    }

    #[test]
    fn slices_with_huge_steps() {
        let doc = json!([1, 2, 3]);
        assert_eq!(paths("$[1::9223372036854775807]", &doc), vec!["$[1]"]);
        assert_eq!(paths("$[::-9223372036854775808]", &doc), vec!["$[2]"]);
    }

    #[test]
    fn inline_filters_test_array_elements() {
        let doc = json!({"book": [{"price": 8}, {"price": 12}, {"title": "x"}]});
        assert_eq!(paths("$.book[?(@.price > 10)]", &doc), vec!["$['book'][1]"]);
        assert_eq!(paths("$.book[?(@.title)]", &doc), vec!["$['book'][2]"]);
    }

    #[test]
    fn missing_leaf_can_default_to_null() {
        let doc = json!({"book": [{"isbn": "1"}, {}]});
        let config = Configuration::default().add_options(&[EvalOption::DefaultPathLeafToNull]);
        let found = collect("$.book[*].isbn", &doc, &config).unwrap();
        assert_eq!(
            found,
            vec![
                ("$['book'][0]['isbn']".to_string(), json!("1")),
                ("$['book'][1]['isbn']".to_string(), Value::Null),
            ]
        );
    }

    #[test]
    fn required_properties_fail_indefinite_paths() {
        let doc = json!({"book": [{"isbn": "1"}, {}]});
        let config = Configuration::default().add_options(&[EvalOption::RequireProperties]);
        let err = collect("$.book[*].isbn", &doc, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathNotFound);

        let scanned = collect("$..isbn", &doc, &config).unwrap();
        assert_eq!(scanned.len(), 1);
    }

    #[test]
    fn sink_break_stops_the_walk() {
        let doc = json!([1, 2, 3, 4]);
        let compiled = JsonPathParser::parse_expression("$[*]").unwrap();
        let config = Configuration::default();
        let evaluator = Evaluator::new(&doc, &[], &config);
        let mut seen = 0;
        let flow = evaluator
            .evaluate(compiled.selectors(), &mut |_, _| {
                seen += 1;
                if seen == 2 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert!(flow.is_break());
        assert_eq!(seen, 2);
    }
}

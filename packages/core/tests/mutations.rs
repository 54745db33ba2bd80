//! Tests for path-reporting mutations through document contexts

use std::sync::Arc;

use pathwise_core::prelude::*;
use pathwise_core::ConcurrentPathCache;
use serde_json::{Value, json};

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn context(value: Value) -> DocumentContext {
        ParseContext::default()
            .with_cache(Arc::new(ConcurrentPathCache::new()))
            .parse_value(value)
    }

    #[test]
    fn test_set_reports_concrete_paths() {
        init_logging();
        let mut ctx = context(json!({"store": {"book": [{"price": 10}, {"price": 20}]}}));
        let modified = ctx.set_paths("$.store.book[*].price", json!(0)).unwrap();

        assert_eq!(
            modified,
            [
                "$['store']['book'][0]['price']",
                "$['store']['book'][1]['price']"
            ]
        );
        assert_eq!(ctx.read("$.store.book[*].price").unwrap(), json!([0, 0]));
        assert_eq!(ctx.last_modified(), modified.as_slice());
    }

    #[test]
    fn test_report_length_matches_match_count() {
        let doc = json!({"a": [{"k": 1}, {"k": 2}, {"k": 3}]});

        let mut ctx = context(doc.clone());
        assert_eq!(ctx.delete_paths("$.a[*].k").unwrap().len(), 3);

        let mut ctx = context(doc.clone());
        assert_eq!(ctx.put_paths("$.a[*]", "n", json!(null)).unwrap().len(), 3);

        let mut ctx = context(doc);
        let modified = ctx.rename_key_paths("$.a[*]", "k", "key").unwrap();
        assert_eq!(modified.len(), 3);
        let mut unique = modified.clone();
        unique.dedup();
        assert_eq!(unique, modified);
    }

    #[test]
    fn test_rename_preserves_value() {
        let mut ctx = context(json!({"obj": {"a": 1}}));
        ctx.rename_key("$.obj", "a", "b").unwrap();
        assert_eq!(ctx.json().unwrap(), json!({"obj": {"b": 1}}));
    }

    #[test]
    fn test_rename_skips_objects_without_the_key() {
        let mut ctx = context(json!([{"a": 1}, {"c": 2}]));
        let modified = ctx.rename_key_paths("$[*]", "a", "b").unwrap();
        assert_eq!(modified, ["$[0]"]);
        assert_eq!(ctx.json().unwrap(), json!([{"b": 1}, {"c": 2}]));
    }

    #[test]
    fn test_add_type_guard_leaves_document_unchanged() {
        let original = json!({"list": [1], "scalar": 5, "obj": {}});
        let mut ctx = context(original.clone());

        for path in ["$.scalar", "$.obj", "$[*]"] {
            let err = ctx.add(path, json!(2)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MutationType, "{path}");
            assert_eq!(ctx.json().unwrap(), original);
        }

        ctx.add("$.list", json!(2)).unwrap();
        assert_eq!(ctx.read("$.list").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_put_type_guard() {
        let mut ctx = context(json!({"list": []}));
        let err = ctx.put("$.list", "k", json!(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MutationType);
    }

    #[test]
    fn test_delete_missing_path_is_a_no_op() {
        let original = r#"{"b":1,"a":[true,null]}"#;
        let mut ctx = ParseContext::default()
            .with_cache(Arc::new(ConcurrentPathCache::new()))
            .parse(original)
            .unwrap();

        let modified = ctx.delete_paths("$.missing").unwrap();
        assert!(modified.is_empty());
        assert_eq!(ctx.json_string().unwrap(), original);
    }

    #[test]
    fn test_mutations_are_visible_to_sibling_contexts() {
        let mut ctx = context(json!({"a": 1}));
        let sibling = ctx.limit(1).unwrap();
        ctx.set("$.a", json!(2)).unwrap();
        assert_eq!(sibling.read("$.a").unwrap(), json!(2));
    }

    #[test]
    fn test_compiled_path_mutation() {
        let compiled = JsonPath::compile("$..price", &[]).unwrap();
        let mut ctx = context(json!({"x": {"price": 1}, "y": [{"price": 2}]}));
        let modified = ctx
            .map_paths(&compiled, |value, _| json!(value.as_i64().unwrap_or(0) + 100))
            .unwrap();
        assert_eq!(modified, ["$['x']['price']", "$['y'][0]['price']"]);
        assert_eq!(ctx.read(&compiled).unwrap(), json!([101, 102]));
    }

    #[test]
    fn test_root_mutation_is_rejected() {
        let mut ctx = context(json!({"a": 1}));
        assert_eq!(
            ctx.set("$", json!(null)).unwrap_err().kind(),
            ErrorKind::MutationType
        );
        assert_eq!(ctx.put_paths("$", "b", json!(2)).unwrap(), ["$"]);
    }
}

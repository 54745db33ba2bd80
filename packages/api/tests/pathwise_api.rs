//! Tests for the static `Pathwise` entry points

use std::io::Cursor;
use std::sync::Arc;

use pathwise::{
    ConcurrentPathCache, Configuration, ErrorKind, EvalOption, Filter, PathCache, PathRef,
    Pathwise, Predicate,
};
use serde_json::{Value, json};

const INVENTORY: &str = r#"{"items": [
    {"sku": "a", "qty": 0},
    {"sku": "b", "qty": 3},
    {"sku": "c", "qty": 7}
]}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_one_shot_reads() {
        init_logging();
        assert_eq!(
            Pathwise::read(INVENTORY, "$.items[?(@.qty > 0)].sku").unwrap(),
            json!(["b", "c"])
        );
        let qty: i64 = Pathwise::read_as(INVENTORY, "$.items[2].qty").unwrap();
        assert_eq!(qty, 7);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Pathwise::parse("   ").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Pathwise::parse("{\"a\":").unwrap_err().kind(),
            ErrorKind::InvalidJson
        );
        assert_eq!(
            Pathwise::read(INVENTORY, "").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_parse_reader_and_mutate() {
        let mut ctx = Pathwise::parse_reader(Cursor::new(INVENTORY.as_bytes())).unwrap();
        let modified = ctx.delete_paths("$.items[?(@.qty == 0)]").unwrap();
        assert_eq!(modified, ["$['items'][0]"]);
        assert_eq!(ctx.read("$.items[*].sku").unwrap(), json!(["b", "c"]));
    }

    #[test]
    fn test_parse_file() {
        let path = std::env::temp_dir().join(format!("pathwise-api-{}.json", std::process::id()));
        std::fs::write(&path, INVENTORY).unwrap();
        let ctx = Pathwise::parse_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(ctx.read("$.items[1].sku").unwrap(), json!("b"));

        let missing = Pathwise::parse_file(path.with_extension("missing")).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_using_configuration_and_cache() {
        let cache: Arc<dyn PathCache> = Arc::new(ConcurrentPathCache::new());
        let configuration = Configuration::default().add_options(&[EvalOption::AlwaysReturnList]);
        let parser = Pathwise::using_cache(configuration, Arc::clone(&cache));

        let ctx = parser.parse(INVENTORY).unwrap();
        assert_eq!(ctx.read("$.items[0].sku").unwrap(), json!(["a"]));
        assert_eq!(ctx.read("$.items[0].missing").unwrap(), json!([]));
        assert_eq!(cache.len(), 2);

        let plain = Pathwise::using(Configuration::default()).parse(INVENTORY).unwrap();
        assert_eq!(plain.read("$.items[0].sku").unwrap(), json!("a"));
    }

    #[test]
    fn test_compiled_path_reuse() {
        let restock: Vec<Arc<dyn Predicate>> =
            vec![Arc::new(Filter::parse("[?(@.qty < 5)]").unwrap())];
        let path = Pathwise::compile("$.items[?].qty", &restock).unwrap();
        assert!(!path.is_definite());

        let mut ctx = Pathwise::parse(INVENTORY).unwrap();
        let modified = ctx.set_paths(&path, json!(10)).unwrap();
        assert_eq!(modified, ["$['items'][0]['qty']", "$['items'][1]['qty']"]);
        assert_eq!(ctx.read(&path).unwrap(), json!([]));
        assert_eq!(
            ctx.read("$.items[*].qty").unwrap(),
            json!([10, 10, 7])
        );

        let err = pathwise::compile("$.items[?].qty", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
    }

    #[test]
    fn test_text_path_with_predicates() {
        let sold_out: Vec<Arc<dyn Predicate>> =
            vec![Arc::new(Filter::from_fn("sold-out", |c| c.item()["qty"] == 0))];
        let ctx = pathwise::parse(INVENTORY).unwrap();
        assert_eq!(
            ctx.read(PathRef::with_predicates("$.items[?].sku", &sold_out))
                .unwrap(),
            json!(["a"])
        );
    }

    #[test]
    fn test_put_add_and_rename_through_facade() {
        let mut ctx = Pathwise::parse_value(json!({"tags": [], "meta": {"v": 1}}));
        ctx.add("$.tags", json!("new"))
            .unwrap()
            .put("$.meta", "owner", json!("ops"))
            .unwrap()
            .rename_key("$.meta", "v", "version")
            .unwrap();

        assert_eq!(
            ctx.json().unwrap(),
            json!({"tags": ["new"], "meta": {"version": 1, "owner": "ops"}})
        );
        assert_eq!(ctx.last_modified(), ["$['meta']"]);
        assert_eq!(ctx.read("$.meta.owner").unwrap(), Value::String("ops".into()));
    }
}

//! Tests for reads, options and typed results

use std::sync::Arc;

use pathwise_core::prelude::*;
use pathwise_core::ConcurrentPathCache;
use serde::Deserialize;
use serde_json::{Value, json};

const STORE: &str = r#"{
    "store": {
        "book": [
            {"category": "reference", "author": "Nigel Rees",
             "title": "Sayings of the Century", "price": 8.95},
            {"category": "fiction", "author": "Evelyn Waugh",
             "title": "Sword of Honour", "price": 12.99},
            {"category": "fiction", "author": "Herman Melville",
             "title": "Moby Dick", "isbn": "0-553-21311-3", "price": 8.99},
            {"category": "fiction", "author": "J. R. R. Tolkien",
             "title": "The Lord of the Rings", "isbn": "0-395-19395-8", "price": 22.99}
        ],
        "bicycle": {"color": "red", "price": 19.95}
    },
    "expensive": 10
}"#;

#[derive(Debug, Deserialize, PartialEq)]
struct Book {
    author: String,
    title: String,
    price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn context_with(configuration: Configuration) -> DocumentContext {
        ParseContext::new(configuration)
            .with_cache(Arc::new(ConcurrentPathCache::new()))
            .parse(STORE)
            .unwrap()
    }

    fn context() -> DocumentContext {
        context_with(Configuration::default())
    }

    #[test]
    fn test_classic_store_queries() {
        init_logging();
        let ctx = context();
        assert_eq!(
            ctx.read("$.store.book[*].author").unwrap(),
            json!(["Nigel Rees", "Evelyn Waugh", "Herman Melville", "J. R. R. Tolkien"])
        );
        assert_eq!(ctx.read("$..book[2].title").unwrap(), json!(["Moby Dick"]));
        assert_eq!(ctx.read("$..book[-1:].price").unwrap(), json!([22.99]));
        assert_eq!(
            ctx.read("$..book[?(@.isbn)].title").unwrap(),
            json!(["Moby Dick", "The Lord of the Rings"])
        );
        assert_eq!(
            ctx.read("$.store.book[?(@.price < $.expensive)].price").unwrap(),
            json!([8.95, 8.99])
        );
        assert_eq!(
            ctx.read("$.store.book[?(@.category == 'fiction' && @.price > 20)].author")
                .unwrap(),
            json!(["J. R. R. Tolkien"])
        );
        assert_eq!(ctx.read("$.store.bicycle.color").unwrap(), json!("red"));
    }

    #[test]
    fn test_filter_functions() {
        let ctx = context();
        assert_eq!(
            ctx.read("$.store.book[?(match(@.author, 'H.*'))].title").unwrap(),
            json!(["Moby Dick"])
        );
        assert_eq!(
            ctx.read("$.store.book[?(search(@.title, 'of the'))].price").unwrap(),
            json!([8.95, 22.99])
        );
        assert_eq!(
            ctx.read("$.store.book[?(length(@.title) < 10)].title").unwrap(),
            json!(["Moby Dick"])
        );
    }

    #[test]
    fn test_definite_missing_path() {
        let ctx = context();
        let err = ctx.read("$.store.car").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathNotFound);
        assert!(err.is_evaluation_error());

        let quiet = context_with(
            Configuration::default().add_options(&[EvalOption::SuppressExceptions]),
        );
        assert_eq!(quiet.read("$.store.car").unwrap(), Value::Null);
        assert!(quiet.read("$.store[").is_err());
    }

    #[test]
    fn test_leaf_defaults_to_null() {
        let ctx = context_with(
            Configuration::builder()
                .with_options(&[EvalOption::DefaultPathLeafToNull])
                .build(),
        );
        assert_eq!(
            ctx.read("$.store.book[*].isbn").unwrap(),
            json!([null, null, "0-553-21311-3", "0-395-19395-8"])
        );
        assert_eq!(ctx.read("$.store.bicycle.gears").unwrap(), Value::Null);
    }

    #[test]
    fn test_path_list_option() {
        let ctx = context_with(Configuration::default().add_options(&[EvalOption::AsPathList]));
        assert_eq!(
            ctx.read("$..book[?(@.price > 20)]").unwrap(),
            json!(["$['store']['book'][3]"])
        );
    }

    #[test]
    fn test_typed_reads() {
        let ctx = context();
        let book: Book = ctx.read_as("$.store.book[0]").unwrap();
        assert_eq!(
            book,
            Book {
                author: "Nigel Rees".to_string(),
                title: "Sayings of the Century".to_string(),
                price: 8.95,
            }
        );

        let prices: Vec<f64> = ctx.read_as("$.store.book[*].price").unwrap();
        assert_eq!(prices.len(), 4);

        let err = ctx.read_as::<Book>("$.store.bicycle").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);

        assert_eq!(
            ctx.read_typed("$.expensive", &TargetType::Text).unwrap(),
            json!("10")
        );
    }

    #[test]
    fn test_closure_predicate() {
        let ctx = context();
        let melville: Vec<Arc<dyn Predicate>> = vec![Arc::new(Filter::from_fn("by-melville", |c| {
            c.item()["author"] == "Herman Melville"
        }))];
        assert_eq!(
            ctx.read(PathRef::with_predicates("$.store.book[?].title", &melville))
                .unwrap(),
            json!(["Moby Dick"])
        );
    }
}

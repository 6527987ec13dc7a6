//! End-to-end tests for query-string parsing.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use muster_query::{
    FilterValue, OptionKey, OptionValue, Pagination, Parser, ParserSettings, QueryError,
    QueryOptions, Relation, parse,
};
use serde_json::json;

/// Query string exercising every parameter.
const FULL_MONTY: &str = "select=id,guid,name&where=name:foop&order=id:desc&order=name\
    &page=3&page_size=5&includes=author.country,comments&joins=activity";

/// Shorthand for a bare relation.
fn name(name: &str) -> Relation {
    Relation::Name(name.to_string())
}

/// Shorthand for a dotted relation path.
fn path(segments: &[&str]) -> Relation {
    Relation::from_path(segments).unwrap()
}

/// Parses with default settings, panicking on decode errors.
fn options(query: &str) -> QueryOptions {
    parse(query).unwrap()
}

mod selects {
    use super::*;

    #[test]
    fn single_value_as_list() {
        assert_eq!(options("select=id").select(), ["id"]);
    }

    #[test]
    fn repeated_values() {
        assert_eq!(options("select=id&select=name").select(), ["id", "name"]);
    }

    #[test]
    fn comma_separation_matches_repetition() {
        assert_eq!(
            options("select=id&select=guid,name").select(),
            ["id", "guid", "name"]
        );
        assert_eq!(
            options("select=a&select=b,c").select(),
            options("select=a,b,c").select()
        );
    }
}

mod orders {
    use super::*;

    #[test]
    fn single_value_as_list() {
        assert_eq!(options("order=id").order_clauses(), ["id asc"]);
    }

    #[test]
    fn directions() {
        for (query, expected) in [
            ("order=id:asc", "id asc"),
            ("order=id:desc", "id desc"),
            ("order=id:ascending", "id asc"),
            ("order=id:descending", "id desc"),
        ] {
            assert_eq!(options(query).order_clauses(), [expected], "{query}");
        }
    }

    #[test]
    fn unknown_direction_uses_asc() {
        assert_eq!(options("order=id:upwards").order_clauses(), ["id asc"]);
    }
}

mod wheres {
    use super::*;

    /// Looks up the filter for `field`.
    fn filter(query: &str, field: &str) -> Option<FilterValue> {
        options(query).filters().get(field).cloned()
    }

    /// Builds a list of non-nil values.
    fn list(values: &[&str]) -> FilterValue {
        FilterValue::List(values.iter().map(|v| Some(v.to_string())).collect())
    }

    #[test]
    fn single_value_is_string() {
        assert_eq!(filter("where=id:1", "id"), Some("1".into()));
    }

    #[test]
    fn repeated_values_form_list() {
        assert_eq!(filter("where=id:1&where=id:2", "id"), Some(list(&["1", "2"])));
    }

    #[test]
    fn pipe_matches_repetition() {
        assert_eq!(filter("where=id:1|2", "id"), Some(list(&["1", "2"])));
        assert_eq!(
            options("where=id:1|2").filters(),
            options("where=id:1&where=id:2").filters()
        );
    }

    #[test]
    fn null_literals() {
        for literal in ["null", "NULL", "Null", "nil", "NIL", "Nil"] {
            assert_eq!(
                filter(&format!("where=id:{literal}"), "id"),
                Some(FilterValue::Null),
                "{literal}"
            );
        }
    }

    #[test]
    fn encoded_pipe_and_colon() {
        assert_eq!(filter("where=id%3A1%7C2", "id"), Some(list(&["1", "2"])));
    }

    #[test]
    fn fields_stay_separate() {
        let options = options("where=id:1&where=name:foop");
        assert_eq!(options.filters().len(), 2);
        assert_eq!(options.filters().get("name"), Some(&"foop".into()));
    }
}

mod relations {
    use super::*;

    #[test]
    fn dotted_path_expansion() {
        assert_eq!(options("joins=a.b.c").joins(), [path(&["a", "b", "c"])]);
        assert_eq!(
            options("joins=a.b,c.d").joins(),
            [path(&["a", "b"]), path(&["c", "d"])]
        );
    }

    #[test]
    fn includes_use_the_same_rules() {
        assert_eq!(
            options("includes=a.b,c.d").includes(),
            options("joins=a.b,c.d").joins()
        );
    }

    #[test]
    fn serialized_shape() {
        let value = serde_json::to_value(options("joins=a.b.c,d").joins()).unwrap();
        assert_eq!(value, json!([{"a": {"b": "c"}}, "d"]));
    }
}

mod pagination {
    use super::*;

    #[test]
    fn offset_and_limit_follow_page_request() {
        for page in 1..=4_u64 {
            for per_page in [1_u64, 5, 30, 250] {
                let options = options(&format!("page={page}&per_page={per_page}"));
                assert_eq!(options.limit(), per_page);
                let expected = (page > 1).then(|| (page - 1) * per_page);
                assert_eq!(options.offset(), expected, "page={page} per_page={per_page}");
            }
        }
    }

    #[test]
    fn malformed_values_revert_independently() {
        let options = options("page=-2&per_page=12");
        assert_eq!(options.pagination(), Pagination { page: 1, per_page: 12 });

        let options = super::options("page=2&page_size=zero");
        assert_eq!(options.pagination(), Pagination { page: 2, per_page: 30 });
        assert_eq!(options.offset(), Some(30));
    }

    #[test]
    fn configured_parser() {
        let parser = Parser::new(
            ParserSettings::default()
                .with_default_per_page(20)
                .with_max_per_page(50),
        );
        let options = parser.parse("page=2&per_page=1000").unwrap();
        assert_eq!(options.limit(), 50);
        assert_eq!(options.offset(), Some(50));

        let options = parser.parse("page=2").unwrap();
        assert_eq!(options.limit(), 20);
    }
}

#[test]
fn empty_query_string() {
    let options = options("");
    assert!(options.select().is_empty());
    assert!(options.order().is_empty());
    assert!(options.filters().is_empty());
    assert!(options.joins().is_empty());
    assert!(options.includes().is_empty());
    assert_eq!(options.pagination(), Pagination { page: 1, per_page: 30 });
    assert_eq!(options.limit(), 30);
    assert_eq!(options.offset(), None);
}

#[test]
fn the_full_monty() {
    let options = options(FULL_MONTY);

    assert_eq!(options.select(), ["id", "guid", "name"]);
    assert_eq!(options.filters().get("name"), Some(&"foop".into()));
    assert_eq!(options.filters().len(), 1);
    assert_eq!(options.order_clauses(), ["id desc", "name asc"]);
    assert_eq!(
        options.includes(),
        [path(&["author", "country"]), name("comments")]
    );
    assert_eq!(options.joins(), [name("activity")]);
    assert_eq!(options.pagination(), Pagination { page: 3, per_page: 5 });
    assert_eq!(options.limit(), 5);
    assert_eq!(options.offset(), Some(10));
}

#[test]
fn indifferent_access() {
    for query in [FULL_MONTY, "", "where=id:nil&page=2", "joins=a.b,c"] {
        let options = options(query);
        for key in OptionKey::ALL {
            let by_key = options.get(key);
            assert!(by_key.is_some(), "{key}");
            assert_eq!(options.get(key.as_str()), by_key, "{query} {key}");
            assert_eq!(options.get(format!(":{key}")), by_key, "{query} :{key}");
        }
    }
}

#[test]
fn indifferent_access_by_name() {
    let options = options(FULL_MONTY);
    match options.get("select") {
        Some(OptionValue::Select(fields)) => assert_eq!(fields, ["id", "guid", "name"]),
        other => panic!("unexpected select value: {other:?}"),
    }
    assert_eq!(options.get(":limit"), Some(OptionValue::Limit(5)));
    assert_eq!(options.get("unknown"), None);
}

#[test]
fn parsing_is_idempotent() {
    for query in [FULL_MONTY, "", "where=id:1|NULL&order=a,b:desc"] {
        assert_eq!(options(query), options(query));
    }
}

#[test]
fn serializes_to_json() {
    let value = serde_json::to_value(options(FULL_MONTY)).unwrap();
    assert_eq!(
        value,
        json!({
            "select": ["id", "guid", "name"],
            "order": ["id desc", "name asc"],
            "where": {"name": "foop"},
            "joins": ["activity"],
            "includes": [{"author": "country"}, "comments"],
            "pagination": {"page": 3, "per_page": 5},
            "limit": 5,
            "offset": 10
        })
    );
}

#[test]
fn serializes_nil_filters_and_first_page() {
    let value = serde_json::to_value(options("where=id:1|nil&where=deleted_at:NULL")).unwrap();
    assert_eq!(value["where"], json!({"id": ["1", null], "deleted_at": null}));
    assert_eq!(value["offset"], json!(null));
}

#[test]
fn invalid_percent_encoding_is_an_error() {
    let err = parse("select=id&where=name:100%").unwrap_err();
    assert!(matches!(
        err,
        QueryError::InvalidPercentEncoding { position: 24, .. }
    ));
    assert!(err.format_with_context().contains("select=id&where=name:100%"));
}

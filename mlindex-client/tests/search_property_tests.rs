//! Property tests for query construction and field projection

use mlindex_client::{lookup, SearchQuery, RELEVANCE_SORT};
use mlindex_core::{DocumentType, EndpointShape, FilterClause, SortOrder};
use proptest::prelude::*;
use serde_json::json;

fn document(query: &SearchQuery) -> serde_json::Value {
    serde_json::to_value(query.to_document(EndpointShape::Legacy)).unwrap()
}

proptest! {
    /// Any tag produces exactly one nested term clause on `tags.tag`,
    /// discarding whatever filters the caller supplied.
    #[test]
    fn prop_tag_overrides_filters(
        tag in "[a-zA-Z0-9_-]{1,24}",
        caller_filters in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let filters = caller_filters
            .iter()
            .map(|field| FilterClause::term(field.clone(), json!("x")));
        let query = SearchQuery::new(DocumentType::Data)
            .with_filters(filters)
            .with_tag(tag.clone());

        let doc = document(&query);
        let filter = doc["query"]["bool"]["filter"].as_array().unwrap();
        prop_assert_eq!(filter.len(), 1);
        prop_assert_eq!(&filter[0]["nested"]["path"], &json!("tags"));
        prop_assert_eq!(&filter[0]["nested"]["query"]["term"]["tags.tag"], &json!(tag));
    }

    /// The relevance sort omits the sort key; any other field keeps it.
    #[test]
    fn prop_sort_key_present_iff_not_relevance(field in "[a-z]{1,12}") {
        let explicit = SearchQuery::new(DocumentType::Run)
            .with_sort(field.clone(), SortOrder::Asc);
        let doc = document(&explicit);
        prop_assert_eq!(&doc["sort"][&field]["order"], &json!("asc"));

        let relevance = SearchQuery::new(DocumentType::Run)
            .with_sort(RELEVANCE_SORT, SortOrder::Asc);
        prop_assert!(document(&relevance).get("sort").is_none());
    }

    /// Empty field entries never reach the `_source` projection.
    #[test]
    fn prop_source_list_has_no_empty_entries(
        fields in prop::collection::vec(prop_oneof![Just(String::new()), "[a-z_]{1,12}"], 0..8),
    ) {
        let query = SearchQuery::new(DocumentType::Data).with_fields(fields);
        let doc = document(&query);
        let source = doc["_source"].as_array().unwrap();
        prop_assert!(source.iter().all(|f| !f.as_str().unwrap().is_empty()));
    }

    /// Identifier fields holding numeric strings come back numeric,
    /// except the two exempt names.
    #[test]
    fn prop_id_suffix_coerces_except_exemptions(
        stem in "[a-z]{1,10}",
        n in 0i64..10_000_000,
    ) {
        let field = format!("{}_id", stem);
        let doc = json!({ (field.as_str()): n.to_string() })
            .as_object()
            .unwrap()
            .clone();

        let value = lookup(&doc, &field).unwrap().unwrap();
        if field == "eval_id" || field == "quality_id" {
            prop_assert_eq!(value, json!(n.to_string()));
        } else {
            prop_assert_eq!(value, json!(n));
        }
    }

    /// A missing leaf under existing ancestors is absence; a null
    /// ancestor on the same path is an error.
    #[test]
    fn prop_leaf_vs_ancestor_distinction(leaf in "[a-z]{1,10}") {
        let with_ancestors = json!({ "a": { "b": {} } }).as_object().unwrap().clone();
        let path = format!("a.b.{}", leaf);
        prop_assert_eq!(lookup(&with_ancestors, &path).unwrap(), None);

        let null_ancestor = json!({ "a": null }).as_object().unwrap().clone();
        prop_assert!(lookup(&null_ancestor, &path).is_err());
    }
}

//! Search query construction
//!
//! Translates UI-level search parameters into the backend's query DSL.
//! The produced document is a bool query: the free-text clause in
//! `must`, caller filters (or the tag clause) in `filter`, and the
//! public-visibility term as the sole should-clause with
//! `minimum_should_match = 1`.

use mlindex_core::{DocumentType, EndpointShape, FilterClause, SortOrder};
use serde::Serialize;
use serde_json::{json, Value};

/// Sort field value meaning "order by relevance score".
///
/// When selected, the query document carries no sort key at all and the
/// backend's own scoring order is used.
pub const RELEVANCE_SORT: &str = "match";

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================

/// Parameters for one search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text query; `None` matches all documents.
    pub text: Option<String>,
    /// Tag filter. When set, replaces `filters` entirely with a single
    /// nested term clause on `tags.tag`.
    pub tag: Option<String>,
    /// Document type to search.
    pub doc_type: DocumentType,
    /// Field paths to project out of each hit.
    pub fields: Vec<String>,
    /// Sort field, or [`RELEVANCE_SORT`] for score ordering.
    pub sort_field: String,
    /// Sort direction for an explicit sort field.
    pub sort_order: SortOrder,
    /// Caller-supplied filter clauses. Discarded when `tag` is set.
    pub filters: Vec<FilterClause>,
    /// Pagination offset.
    pub from: u64,
    /// Page size.
    pub size: u64,
}

impl SearchQuery {
    /// A query for `doc_type` with the catalog's historical defaults:
    /// id and name fields, newest first, first page of 50.
    pub fn new(doc_type: DocumentType) -> Self {
        Self {
            text: None,
            tag: None,
            doc_type,
            fields: vec!["data_id".to_string(), "name".to_string()],
            sort_field: "date".to_string(),
            sort_order: SortOrder::Desc,
            filters: Vec::new(),
            from: 0,
            size: 50,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = field.into();
        self.sort_order = order;
        self
    }

    /// Sort by relevance score instead of an explicit field.
    pub fn with_relevance_sort(mut self) -> Self {
        self.sort_field = RELEVANCE_SORT.to_string();
        self
    }

    pub fn with_filters(mut self, filters: impl IntoIterator<Item = FilterClause>) -> Self {
        self.filters = filters.into_iter().collect();
        self
    }

    pub fn with_page(mut self, from: u64, size: u64) -> Self {
        self.from = from;
        self.size = size;
        self
    }

    /// Field list with empty entries dropped, as sent to the backend.
    pub fn sanitized_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !f.is_empty())
            .cloned()
            .collect()
    }

    /// Build the query document for the given endpoint shape.
    pub fn to_document(&self, shape: EndpointShape) -> QueryDocument {
        let filter = match &self.tag {
            Some(tag) => vec![FilterClause::nested_tag_term(tag)],
            None => self.filters.clone(),
        };

        let must = match &self.text {
            Some(text) => json!({ "query_string": { "query": text } }),
            None => json!({ "match_all": {} }),
        };

        let sort = if self.sort_field == RELEVANCE_SORT {
            None
        } else {
            Some(json!({ (self.sort_field.as_str()): { "order": self.sort_order } }))
        };

        QueryDocument {
            from: self.from,
            size: self.size,
            query: QueryClause {
                bool: BoolQuery {
                    must,
                    filter,
                    should: vec![json!({ "term": { "visibility": "public" } })],
                    minimum_should_match: 1,
                },
            },
            aggs: Aggregations {
                doc_type: TermsAggregation {
                    terms: TermsField {
                        field: shape.aggregation_field(),
                    },
                },
            },
            source: self.sanitized_fields(),
            sort,
        }
    }
}

// ============================================================================
// QUERY DOCUMENT (wire format)
// ============================================================================

/// The serialized query document posted to the search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDocument {
    pub from: u64,
    pub size: u64,
    pub query: QueryClause,
    pub aggs: Aggregations,
    #[serde(rename = "_source")]
    pub source: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryClause {
    pub bool: BoolQuery,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoolQuery {
    pub must: Value,
    pub filter: Vec<FilterClause>,
    pub should: Vec<Value>,
    pub minimum_should_match: u32,
}

/// Type-bucket aggregation keyed on the version-dependent field.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregations {
    #[serde(rename = "type")]
    pub doc_type: TermsAggregation,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermsAggregation {
    pub terms: TermsField,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermsField {
    pub field: &'static str,
}

// =============================================================================
// TESTS
// =============================================================================

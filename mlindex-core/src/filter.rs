//! Filter clauses for search queries
//!
//! Callers may pass arbitrary backend query clauses; the library treats
//! them as opaque JSON and forwards them into the bool query's filter
//! list. The one clause the library builds itself is the nested tag
//! term.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// A single filter clause in the backend's query DSL.
///
/// Opaque to this library: the payload is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterClause(pub serde_json::Value);

impl FilterClause {
    /// Wrap a raw backend query clause.
    pub fn new(clause: serde_json::Value) -> Self {
        Self(clause)
    }

    /// Exact-match term clause on a top-level field.
    pub fn term(field: impl Into<String>, value: serde_json::Value) -> Self {
        let field = field.into();
        Self(json!({ "term": { (field): value } }))
    }

    /// Nested term clause matching a tag inside the `tags` sub-documents.
    ///
    /// When a tag is requested, the search query's filter list consists
    /// of exactly this clause, replacing anything the caller supplied.
    pub fn nested_tag_term(tag: &str) -> Self {
        Self(json!({
            "nested": {
                "path": "tags",
                "query": {
                    "term": {
                        "tags.tag": tag
                    }
                }
            }
        }))
    }

    /// Borrow the underlying JSON clause.
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for FilterClause {
    fn from(clause: serde_json::Value) -> Self {
        Self(clause)
    }
}

// =============================================================================
// TESTS
// =============================================================================

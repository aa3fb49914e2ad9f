//! Wire types for backend responses
//!
//! Deserialize-only structs mirroring the search engine's response
//! envelope, plus normalization into [`SearchOutcome`].

use crate::project::project;
use mlindex_core::{Document, MlindexResult, SearchOutcome};
use serde::Deserialize;

// ============================================================================
// SEARCH ENVELOPE
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    pub hits: Hits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hits {
    pub total: HitTotal,
    pub hits: Vec<Hit>,
}

/// Total hit count across backend versions.
///
/// Older backends report a bare number at `hits.total`; version 8 and
/// later wrap it as `hits.total.value`. Decoding is structural, so the
/// version number is not consulted here.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HitTotal {
    Bare(u64),
    Tracked { value: u64 },
}

impl HitTotal {
    pub fn value(&self) -> u64 {
        match self {
            HitTotal::Bare(value) => *value,
            HitTotal::Tracked { value } => *value,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source")]
    pub source: Document,
}

// ============================================================================
// SINGLE-DOCUMENT ENVELOPE
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct DocEnvelope {
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<Document>,
}

// ============================================================================
// BACKEND ERROR PAYLOAD
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub root_cause: Vec<RootCause>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RootCause {
    pub reason: String,
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Turn a decoded search envelope into the caller-facing outcome,
/// projecting the requested field paths out of every hit in backend
/// order.
pub fn normalize(envelope: SearchEnvelope, field_paths: &[String]) -> MlindexResult<SearchOutcome> {
    let total_count = envelope.hits.total.value();
    let mut items = Vec::with_capacity(envelope.hits.hits.len());
    for hit in &envelope.hits.hits {
        items.push(project(&hit.source, field_paths)?);
    }
    Ok(SearchOutcome { total_count, items })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_legacy_bare_total() {
        let envelope: SearchEnvelope =
            serde_json::from_value(json!({ "hits": { "total": 3, "hits": [] } })).unwrap();
        assert_eq!(envelope.hits.total.value(), 3);
    }

    #[test]
    fn test_decodes_tracked_total() {
        let envelope: SearchEnvelope = serde_json::from_value(json!({
            "hits": { "total": { "value": 12, "relation": "eq" }, "hits": [] }
        }))
        .unwrap();
        assert_eq!(envelope.hits.total.value(), 12);
    }

    #[test]
    fn test_normalize_projects_hits_in_order() {
        let envelope: SearchEnvelope = serde_json::from_value(json!({
            "hits": {
                "total": 2,
                "hits": [
                    { "_source": { "data_id": "2", "name": "two" } },
                    { "_source": { "data_id": "1", "name": "one" } }
                ]
            }
        }))
        .unwrap();

        let fields = vec!["data_id".to_string(), "name".to_string()];
        let outcome = normalize(envelope, &fields).unwrap();
        assert_eq!(outcome.total_count, 2);
        assert_eq!(outcome.items[0]["name"], json!("two"));
        assert_eq!(outcome.items[1]["name"], json!("one"));
    }

    #[test]
    fn test_doc_envelope_found_defaults_false() {
        let envelope: DocEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(!envelope.found);
        assert!(envelope.source.is_none());
    }

    #[test]
    fn test_error_envelope_extracts_root_cause() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": {
                "root_cause": [
                    { "type": "parsing_exception", "reason": "unknown field [foo]" }
                ]
            }
        }))
        .unwrap();
        assert_eq!(envelope.error.root_cause[0].reason, "unknown field [foo]");
    }
}

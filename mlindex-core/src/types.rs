//! Result types for search and item fetch

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full stored field mapping of one indexed document.
pub type Document = Map<String, Value>;

/// One projected search hit: requested field path to extracted value.
///
/// Paths that resolved to nothing are simply absent. Built fresh per
/// response; carries no identity beyond its fields.
pub type ResultItem = Map<String, Value>;

/// Normalized outcome of a search call.
///
/// `items` preserves the backend's relevance/sort order and is never
/// re-sorted by this library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Total number of matching documents, across all pages.
    pub total_count: u64,
    /// Projected hits for the requested page.
    pub items: Vec<ResultItem>,
}

impl SearchOutcome {
    /// An empty outcome (no matches).
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }
}

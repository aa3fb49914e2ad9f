//! Version-dependent endpoint shapes
//!
//! Backend versions before 8 address documents through a doubled type
//! path (`{type}/{type}/...`) and bucket aggregations on `_type`;
//! version 8 and later use `{type}/_search`, `{type}/_doc/{id}` and
//! `_index`. [`EndpointShape`] resolves the difference once so the
//! search and item-fetch paths cannot drift apart.

use crate::{BackendConfig, DocumentType};

/// Threshold at which the backend switched endpoint and aggregation shapes.
const MODERN_SHAPE_VERSION: u32 = 8;

/// Resolved endpoint shape for one backend version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointShape {
    /// Pre-8 backends: doubled type path, `_type` aggregation field.
    Legacy,
    /// Version 8 and later: flat paths, `_index` aggregation field.
    Modern,
}

impl EndpointShape {
    /// Resolve the shape for a configuration. This is the only place
    /// the major version is inspected.
    pub fn resolve(config: &BackendConfig) -> Self {
        if config.major_version >= MODERN_SHAPE_VERSION {
            EndpointShape::Modern
        } else {
            EndpointShape::Legacy
        }
    }

    /// Relative search path for a document type.
    pub fn search_path(&self, doc_type: DocumentType) -> String {
        let ty = doc_type.as_str();
        match self {
            EndpointShape::Modern => format!("{}/_search", ty),
            EndpointShape::Legacy => format!("{}/{}/_search?type={}", ty, ty, ty),
        }
    }

    /// Relative path for fetching a single document by id.
    pub fn doc_path(&self, doc_type: DocumentType, id: &str) -> String {
        let ty = doc_type.as_str();
        match self {
            EndpointShape::Modern => format!("{}/_doc/{}", ty, id),
            EndpointShape::Legacy => format!("{}/{}/{}", ty, ty, id),
        }
    }

    /// Field the type-bucket aggregation keys on.
    pub fn aggregation_field(&self) -> &'static str {
        match self {
            EndpointShape::Modern => "_index",
            EndpointShape::Legacy => "_type",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

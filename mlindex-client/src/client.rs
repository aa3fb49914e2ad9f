//! The search client
//!
//! Owns the HTTP connection pool and the resolved endpoint shape, and
//! exposes the two backend operations: paged search and single-document
//! fetch.

use crate::query::SearchQuery;
use crate::response::{normalize, DocEnvelope, SearchEnvelope};
use crate::transport;
use mlindex_core::{
    BackendConfig, Document, DocumentType, EndpointShape, MlindexError, MlindexResult,
    SearchOutcome, TransportError,
};

/// Client for the catalog search backend.
///
/// Cheap to clone; the underlying connection pool is shared. Holds no
/// mutable state: concurrent calls are independent and are neither
/// deduplicated nor cancelled by this layer.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: BackendConfig,
    shape: EndpointShape,
}

impl SearchClient {
    /// Create a client for an explicit backend configuration.
    pub fn new(config: BackendConfig) -> MlindexResult<Self> {
        config.validate()?;
        let shape = EndpointShape::resolve(&config);
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            shape,
        })
    }

    /// Create a client from the process-wide environment configuration.
    pub fn from_env() -> MlindexResult<Self> {
        Self::new(BackendConfig::global().clone())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Run a search and project the requested fields out of every hit.
    pub async fn search(&self, query: &SearchQuery) -> MlindexResult<SearchOutcome> {
        let document = query.to_document(self.shape);
        let url = self.url(&self.shape.search_path(query.doc_type));

        let (status, body) = transport::post_json(&self.http, &url, &document).await?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|e| TransportError::MalformedBackend {
                status,
                reason: format!("undecodable search response: {}", e),
            })?;

        normalize(envelope, &query.sanitized_fields())
    }

    /// Fetch one document by type and identifier.
    ///
    /// A well-formed negative answer from the backend becomes
    /// [`MlindexError::NotFound`]; transport failures propagate as-is.
    pub async fn get_item(&self, doc_type: DocumentType, id: &str) -> MlindexResult<Document> {
        let url = self.url(&self.shape.doc_path(doc_type, id));

        let (status, body) = transport::get_json(&self.http, &url).await?;
        let envelope: DocEnvelope =
            serde_json::from_str(&body).map_err(|e| TransportError::MalformedBackend {
                status,
                reason: format!("undecodable document response: {}", e),
            })?;

        if !envelope.found {
            return Err(MlindexError::NotFound {
                doc_type,
                id: id.to_string(),
            });
        }

        envelope.source.ok_or_else(|| {
            TransportError::MalformedBackend {
                status,
                reason: "document reported found without _source".to_string(),
            }
            .into()
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

// =============================================================================
// TESTS
// =============================================================================

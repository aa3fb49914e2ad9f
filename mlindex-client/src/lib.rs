//! mlindex client - HTTP search client for the ML catalog backend
//!
//! Builds backend query documents from UI-level parameters, issues them
//! over HTTP, classifies failures, and projects requested fields out of
//! the hits. One outbound call per operation; callers own debounce,
//! retry and cancellation policy.
//!
//! ```no_run
//! use mlindex_client::{SearchClient, SearchQuery};
//! use mlindex_core::DocumentType;
//!
//! # async fn example() -> mlindex_core::MlindexResult<()> {
//! let client = SearchClient::from_env()?;
//! let query = SearchQuery::new(DocumentType::Data)
//!     .with_text("iris")
//!     .with_fields(["data_id", "name", "runs"]);
//! let outcome = client.search(&query).await?;
//! println!("{} matches", outcome.total_count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod project;
pub mod query;
pub mod response;
pub mod transport;

pub use client::SearchClient;
pub use project::{lookup, project};
pub use query::{QueryDocument, SearchQuery, RELEVANCE_SORT};
pub use response::{DocEnvelope, HitTotal, SearchEnvelope};
pub use transport::classify_failure;

// Re-export core types for convenience
pub use mlindex_core::{
    BackendConfig, Document, DocumentType, EndpointShape, FilterClause, MlindexError,
    MlindexResult, ProjectionError, ResultItem, SearchOutcome, SortOrder, TransportError,
};

//! mlindex core - data types for the catalog search client
//!
//! Pure data structures with no I/O. The client crate depends on this
//! for document/sort enums, filter clauses, backend configuration,
//! endpoint-shape resolution and the error taxonomy.

pub mod config;
pub mod endpoint;
pub mod enums;
pub mod error;
pub mod filter;
pub mod types;

pub use config::{BackendConfig, DEFAULT_SEARCH_URL, DEFAULT_SEARCH_VERSION};
pub use endpoint::EndpointShape;
pub use enums::{DocumentType, SortOrder};
pub use error::{ConfigError, MlindexError, MlindexResult, ProjectionError, TransportError};
pub use filter::FilterClause;
pub use types::{Document, ResultItem, SearchOutcome};

//! Error types for mlindex operations

use crate::DocumentType;
use thiserror::Error;

/// Transport layer errors.
///
/// Everything that can go wrong between issuing an HTTP request and
/// obtaining a decoded response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed before a response was received: {reason}")]
    Network { reason: String },

    #[error("[{status}] {reason}")]
    RequestFailed { status: u16, reason: String },

    #[error("Backend returned an unrecognized error payload (status {status}): {reason}")]
    MalformedBackend { status: u16, reason: String },
}

/// Field projection errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Cannot traverse into missing object at segment '{segment}' of path '{path}'")]
    MissingObject { path: String, segment: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all mlindex errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MlindexError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("No {doc_type} with id \"{id}\" found. It may have been removed or renamed")]
    NotFound { doc_type: DocumentType, id: String },
}

/// Result type alias for mlindex operations.
pub type MlindexResult<T> = Result<T, MlindexError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display_request_failed() {
        let err = TransportError::RequestFailed {
            status: 502,
            reason: "Bad Gateway".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("502"));
        assert!(msg.contains("Bad Gateway"));
    }

    #[test]
    fn test_transport_error_display_network() {
        let err = TransportError::Network {
            reason: "connection refused".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("before a response was received"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_transport_error_display_malformed_backend() {
        let err = TransportError::MalformedBackend {
            status: 500,
            reason: "missing root_cause".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("unrecognized error payload"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_projection_error_display_missing_object() {
        let err = ProjectionError::MissingObject {
            path: "qualities.NumberOfFeatures".to_string(),
            segment: "qualities".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("qualities.NumberOfFeatures"));
        assert!(msg.contains("missing object"));
    }

    #[test]
    fn test_not_found_display_mentions_id() {
        let err = MlindexError::NotFound {
            doc_type: DocumentType::Task,
            id: "999".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("task"));
        assert!(msg.contains("\"999\""));
        assert!(msg.contains("removed or renamed"));
    }

    #[test]
    fn test_mlindex_error_from_variants() {
        let transport = MlindexError::from(TransportError::Network {
            reason: "timeout".to_string(),
        });
        assert!(matches!(transport, MlindexError::Transport(_)));

        let projection = MlindexError::from(ProjectionError::MissingObject {
            path: "a.b".to_string(),
            segment: "a".to_string(),
        });
        assert!(matches!(projection, MlindexError::Projection(_)));

        let config = MlindexError::from(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: "".to_string(),
            reason: "must not be empty".to_string(),
        });
        assert!(matches!(config, MlindexError::Config(_)));
    }
}

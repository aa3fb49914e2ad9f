//! HTTP transport and failure classification
//!
//! One outbound request per call, no retries, no coalescing. Failures
//! are classified into the transport error taxonomy and logged before
//! propagating; the caller owns any retry policy.

use crate::response::ErrorEnvelope;
use mlindex_core::TransportError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

/// POST a JSON body and return the status with the raw response text.
pub(crate) async fn post_json(
    http: &reqwest::Client,
    url: &str,
    body: &impl Serialize,
) -> Result<(u16, String), TransportError> {
    tracing::debug!(url = %url, "posting search query");
    let response = http
        .post(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| TransportError::Network {
            reason: e.to_string(),
        })?;

    read_response(response).await
}

/// GET and return the status with the raw response text.
pub(crate) async fn get_json(
    http: &reqwest::Client,
    url: &str,
) -> Result<(u16, String), TransportError> {
    tracing::debug!(url = %url, "fetching document");
    let response = http
        .get(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| TransportError::Network {
            reason: e.to_string(),
        })?;

    read_response(response).await
}

async fn read_response(response: reqwest::Response) -> Result<(u16, String), TransportError> {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);

    let body = response.text().await.map_err(|e| TransportError::Network {
        reason: e.to_string(),
    })?;

    if status.is_success() {
        return Ok((status.as_u16(), body));
    }

    tracing::error!(
        status = status.as_u16(),
        body = %body,
        "search backend request failed"
    );

    Err(classify_failure(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        is_json.then_some(body.as_str()),
    ))
}

/// Classify a non-2xx response.
///
/// `json_body` is the response body when its content type was JSON.
/// A JSON body is expected to carry the backend's root cause; one that
/// does not is malformed. Non-JSON failures keep the HTTP status text.
pub fn classify_failure(status: u16, status_text: &str, json_body: Option<&str>) -> TransportError {
    let Some(body) = json_body else {
        return TransportError::RequestFailed {
            status,
            reason: status_text.to_string(),
        };
    };

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.root_cause.first() {
            Some(cause) => TransportError::RequestFailed {
                status,
                reason: cause.reason.clone(),
            },
            None => TransportError::MalformedBackend {
                status,
                reason: "error payload carries no root cause".to_string(),
            },
        },
        Err(e) => TransportError::MalformedBackend {
            status,
            reason: format!("undecodable error payload: {}", e),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Typed async boundary to the backend.
//!
//! The panel consumes two read-only GET endpoints:
//! - `/api/profile/fields/?type={category}` -> `{ "fields": [...] }`
//! - `/api/search/?q={query}` -> `{ "results": [...] }`
//!
//! Every failure mode (connection error, non-2xx status, malformed body)
//! surfaces as an [`ApiError`]; callers collapse all of them into a single
//! fixed user-visible message and keep the panel interactive.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// ============================================================================
// Wire Types
// ============================================================================

/// Opaque field identifier.
///
/// The backend serves numeric ids today, but nothing here depends on that;
/// the id is only ever echoed back into the detail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldId {
    Number(u64),
    Text(String),
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Number(n) => write!(f, "{n}"),
            FieldId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One user-authored record as served by the backend.
///
/// `created_at` is a display-formatted string and is rendered verbatim;
/// the panel never parses or reformats it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub id: FieldId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

/// Envelope for the category listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsEnvelope {
    pub fields: Vec<FieldSummary>,
}

/// Envelope for the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    pub results: Vec<FieldSummary>,
}

// ============================================================================
// Errors
// ============================================================================

/// What went wrong while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, offline...).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Server(u16),
    /// The body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Parse(String),
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

// ============================================================================
// URL Construction
// ============================================================================

/// URL for the default listing of one category.
pub fn fields_url(api_base: &str, category: &str) -> String {
    format!("{api_base}/api/profile/fields/?type={category}")
}

/// URL for a free-text search. The query is URL-encoded here, nowhere else.
pub fn search_url(api_base: &str, query: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(query).into();
    format!("{api_base}/api/search/?q={encoded}")
}

// ============================================================================
// Fetch
// ============================================================================

async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    let window = web_sys::window()
        .ok_or_else(|| ApiError::Network("no window available".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(response.status()));
    }

    let body = JsFuture::from(
        response
            .text()
            .map_err(|e| ApiError::Network(js_error_message(&e)))?,
    )
    .await
    .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    let body = body.as_string().unwrap_or_default();

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the default listing for one category (wire value, e.g. "mine").
pub async fn fetch_fields(api_base: &str, category: &str) -> Result<Vec<FieldSummary>, ApiError> {
    let envelope: FieldsEnvelope = get_json(&fields_url(api_base, category)).await?;
    Ok(envelope.fields)
}

/// Fetch the fields matching a free-text query.
pub async fn search_fields(api_base: &str, query: &str) -> Result<Vec<FieldSummary>, ApiError> {
    let envelope: SearchEnvelope = get_json(&search_url(api_base, query)).await?;
    Ok(envelope.results)
}

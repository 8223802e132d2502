//! API Wire Type Tests
//!
//! Tests for decoding the backend's JSON shapes, id passthrough, URL
//! construction, and the error taxonomy's display messages.

use field_panel_frontend::api::{
    search_url, ApiError, FieldId, FieldSummary, FieldsEnvelope, SearchEnvelope,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// FieldId Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_field_id_decodes_from_number() {
    let id: FieldId = serde_json::from_str("7").unwrap();
    assert_eq!(id, FieldId::Number(7));
    assert_eq!(id.to_string(), "7");
}

#[wasm_bindgen_test]
fn test_field_id_decodes_from_string() {
    let id: FieldId = serde_json::from_str("\"a1b2\"").unwrap();
    assert_eq!(id, FieldId::Text("a1b2".to_string()));
    assert_eq!(id.to_string(), "a1b2");
}

// ============================================================================
// FieldSummary Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_field_summary_with_null_description() {
    let json = r#"{"id":7,"title":"Alpha","description":null,"created_at":"2024-01-01"}"#;
    let field: FieldSummary = serde_json::from_str(json).unwrap();

    assert_eq!(field.id, FieldId::Number(7));
    assert_eq!(field.title, "Alpha");
    assert_eq!(field.description, None);
    assert_eq!(field.created_at, "2024-01-01");
}

#[wasm_bindgen_test]
fn test_field_summary_with_absent_description() {
    let json = r#"{"id":8,"title":"Beta","created_at":"2024-02-02"}"#;
    let field: FieldSummary = serde_json::from_str(json).unwrap();

    assert_eq!(field.description, None);
}

#[wasm_bindgen_test]
fn test_created_at_passes_through_verbatim() {
    // Whatever display format the backend chose is rendered as-is.
    let json = r#"{"id":1,"title":"T","description":"d","created_at":"31 Dec 2023, 23:59"}"#;
    let field: FieldSummary = serde_json::from_str(json).unwrap();

    assert_eq!(field.created_at, "31 Dec 2023, 23:59");
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_fields_envelope_decodes() {
    let json = r#"{"fields":[{"id":7,"title":"Alpha","description":null,"created_at":"2024-01-01"}]}"#;
    let envelope: FieldsEnvelope = serde_json::from_str(json).unwrap();

    assert_eq!(envelope.fields.len(), 1);
    assert_eq!(envelope.fields[0].title, "Alpha");
}

#[wasm_bindgen_test]
fn test_search_envelope_decodes() {
    let json = r#"{"results":[]}"#;
    let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();

    assert!(envelope.results.is_empty());
}

#[wasm_bindgen_test]
fn test_envelope_preserves_backend_order() {
    let json = r#"{"fields":[
        {"id":3,"title":"C","created_at":"c"},
        {"id":1,"title":"A","created_at":"a"},
        {"id":2,"title":"B","created_at":"b"}
    ]}"#;
    let envelope: FieldsEnvelope = serde_json::from_str(json).unwrap();

    let titles: Vec<_> = envelope.fields.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, ["C", "A", "B"]);
}

#[wasm_bindgen_test]
fn test_malformed_envelope_is_a_decode_error() {
    let result: Result<FieldsEnvelope, _> = serde_json::from_str(r#"{"items":[]}"#);
    assert!(result.is_err());
}

// ============================================================================
// URL Construction Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_search_url_encodes_the_query() {
    assert_eq!(search_url("", "widget"), "/api/search/?q=widget");
    assert_eq!(
        search_url("", "two words & more"),
        "/api/search/?q=two%20words%20%26%20more"
    );
}

#[wasm_bindgen_test]
fn test_urls_respect_the_api_base() {
    assert_eq!(
        search_url("https://api.example.com", "x"),
        "https://api.example.com/api/search/?q=x"
    );
}

// ============================================================================
// Error Display Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_api_error_messages() {
    assert_eq!(
        ApiError::Network("connection refused".to_string()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        ApiError::Server(500).to_string(),
        "server returned status 500"
    );
    assert!(ApiError::Parse("missing field".to_string())
        .to_string()
        .starts_with("unexpected response body"));
}

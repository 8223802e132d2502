//! Panel configuration.
//!
//! The detail route is deliberately configurable: the page shell decides
//! whether field cards link to `/fields/{id}/` or somewhere else entirely.

use crate::api::FieldId;

/// Injectable configuration for the field panel.
///
/// Provided via context next to the panel state so components and tests
/// never reach for globals.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PanelConfig {
    /// Prefix for API requests, e.g. "" (same origin) or "https://api.example.com".
    pub api_base: String,
    /// Route prefix for a field's detail page.
    pub detail_route: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            detail_route: "/fields".to_string(),
        }
    }
}

impl PanelConfig {
    /// Read overrides from `data-api-base` / `data-detail-route` on `<body>`,
    /// falling back to the defaults when absent (or outside a document).
    pub fn from_document() -> Self {
        let mut config = Self::default();

        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            if let Some(base) = body.get_attribute("data-api-base") {
                config.api_base = base;
            }
            if let Some(route) = body.get_attribute("data-detail-route") {
                config.detail_route = route;
            }
        }

        config
    }

    /// Full navigation target for one field's detail page.
    ///
    /// The id is passed through verbatim; the backend owns its shape.
    pub fn detail_url(&self, id: &FieldId) -> String {
        format!("{}/{}/", self.detail_route.trim_end_matches('/'), id)
    }
}

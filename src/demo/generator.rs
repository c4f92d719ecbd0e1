//! Capability document dispatch.
//!
//! Turns a [`RoutingDecision`] into the document served to the client:
//!
//! | selected service            | document                         |
//! |-----------------------------|----------------------------------|
//! | none                        | landing page (`text/html`)       |
//! | wms                         | OpenLayers demo (`text/html`)    |
//! | tms, wmts, kml, gmaps, ve   | `not implemented` (`text/plain`) |
//! | demo                        | [`DemoError::UnsupportedDemo`]   |

use std::collections::HashMap;

use tracing::debug;

use crate::error::DemoError;
use crate::grid::TileSetRegistry;
use crate::service::{ServiceRegistry, ServiceType};

use super::classify::RoutingDecision;
use super::landing::landing_page;
use super::wms::wms_demo;

/// Content type of HTML documents.
pub const TEXT_HTML: &str = "text/html";

/// Content type of the placeholder document.
pub const TEXT_PLAIN: &str = "text/plain";

/// Body served for protocols without a demo page.
pub const NOT_IMPLEMENTED: &str = "not implemented";

/// Metadata key overriding the request's base URL.
pub const URL_METADATA_KEY: &str = "url";

/// Free-form gateway metadata.
pub type Metadata = HashMap<String, String>;

// =============================================================================
// Types
// =============================================================================

/// A generated document and its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityDocument {
    pub content_type: String,
    pub body: String,
}

impl CapabilityDocument {
    pub fn new(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}

/// Options affecting demo generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoOptions {
    /// Also declare a single-tile variant of every WMS layer
    pub single_tile: bool,
}

impl DemoOptions {
    pub fn with_single_tile(mut self, enabled: bool) -> Self {
        self.single_tile = enabled;
        self
    }
}

/// Everything a demo document is generated from.
///
/// Borrowed from the loaded configuration for the duration of a request.
#[derive(Debug, Clone, Copy)]
pub struct DemoContext<'a> {
    pub services: &'a ServiceRegistry,
    pub tilesets: &'a TileSetRegistry,
    pub metadata: &'a Metadata,
    pub options: DemoOptions,
}

// =============================================================================
// Generation
// =============================================================================

/// Pick the base URL for links: the `url` metadata entry when configured,
/// otherwise the URL the request came in on.
pub fn resolve_base_url<'a>(metadata: &'a Metadata, request_base_url: &'a str) -> &'a str {
    metadata
        .get(URL_METADATA_KEY)
        .map(String::as_str)
        .unwrap_or(request_base_url)
        .trim_end_matches('/')
}

/// Generate the document for a routing decision.
pub fn generate(
    decision: &RoutingDecision<'_>,
    context: &DemoContext<'_>,
    request_base_url: &str,
) -> Result<CapabilityDocument, DemoError> {
    let base_url = resolve_base_url(context.metadata, request_base_url);

    let document = match decision.selected_service.map(|s| s.kind) {
        None => landing_page(context.services, base_url)?,
        Some(ServiceType::Wms) => wms_demo(context.tilesets, base_url, &context.options)?,
        Some(
            ServiceType::Tms
            | ServiceType::Wmts
            | ServiceType::Kml
            | ServiceType::Gmaps
            | ServiceType::Ve,
        ) => CapabilityDocument::new(TEXT_PLAIN, NOT_IMPLEMENTED),
        Some(ServiceType::Demo) => return Err(DemoError::UnsupportedDemo),
    };

    debug!(
        content_type = %document.content_type,
        bytes = document.body.len(),
        "Generated demo document"
    );

    Ok(document)
}

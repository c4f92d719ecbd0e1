//! Protocol services exposed by the gateway.
//!
//! Each service is identified by a protocol type and reachable under a URL
//! prefix. The demo front end only needs their prefixes and types; the
//! protocol encoders themselves live elsewhere.
//!
//! ```text
//! ServiceRegistry
//! ┌──────┬──────┬──────┬──────┬──────┬──────┬──────┐
//! │ demo │ wms  │ tms  │ wmts │ kml  │gmaps │  ve  │   one slot per ServiceType
//! └──────┴──────┴──────┴──────┴──────┴──────┴──────┘
//!    Some   Some   None   Some   None   None   None
//! ```

mod registry;

pub use registry::{validate_prefix, ServiceRegistry, SERVICE_SLOTS};

use serde::Deserialize;

// =============================================================================
// ServiceType
// =============================================================================

/// Protocol served by a configured service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// The demo front end itself
    Demo,
    /// OGC Web Map Service
    Wms,
    /// Tile Map Service
    Tms,
    /// OGC Web Map Tile Service
    Wmts,
    /// Google Earth KML superoverlays
    Kml,
    /// Google Maps XYZ tiles
    Gmaps,
    /// Virtual Earth quadkey tiles
    Ve,
}

impl ServiceType {
    /// All protocol types, in registry slot order.
    pub const ALL: [ServiceType; SERVICE_SLOTS] = [
        ServiceType::Demo,
        ServiceType::Wms,
        ServiceType::Tms,
        ServiceType::Wmts,
        ServiceType::Kml,
        ServiceType::Gmaps,
        ServiceType::Ve,
    ];

    /// Lowercase protocol name.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceType::Demo => "demo",
            ServiceType::Wms => "wms",
            ServiceType::Tms => "tms",
            ServiceType::Wmts => "wmts",
            ServiceType::Kml => "kml",
            ServiceType::Gmaps => "gmaps",
            ServiceType::Ve => "ve",
        }
    }

    /// URL prefix used when the configuration does not provide one.
    pub fn default_prefix(&self) -> &'static str {
        self.name()
    }

    /// Registry slot holding services of this type.
    pub fn slot(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Service
// =============================================================================

/// A configured protocol service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// URL prefix, without leading or trailing slash
    pub url_prefix: String,

    /// Protocol served under the prefix
    pub kind: ServiceType,
}

impl Service {
    /// Create a service with an explicit prefix.
    pub fn new(kind: ServiceType, url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            kind,
        }
    }

    /// Create a service mounted under its protocol's default prefix.
    pub fn with_default_prefix(kind: ServiceType) -> Self {
        Self::new(kind, kind.default_prefix())
    }

    /// The demo service, mounted under `demo`.
    pub fn demo() -> Self {
        Self::with_default_prefix(ServiceType::Demo)
    }

    /// Whether this is the demo front end itself.
    pub fn is_demo(&self) -> bool {
        self.kind == ServiceType::Demo
    }
}

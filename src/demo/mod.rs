//! Demo front end.
//!
//! Renders HTML pages that let a browser try the gateway's services without
//! writing a client.
//!
//! # Architecture
//!
//! ```text
//!   path fragment
//!        │
//!        ▼
//! ┌──────────────┐     ┌────────────────────────────────────────────┐
//! │   classify   │────►│                 generate                   │
//! │ (prefix scan)│     │  landing │ wms demo │ not implemented │ 400 │
//! └──────────────┘     └───────────────────┬────────────────────────┘
//!                                          │
//!                                          ▼
//!                               ┌─────────────────────┐
//!                               │      assembler      │
//!                               │ (numbers, template) │
//!                               └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tilegate::demo::{classify, generate, DemoContext, DemoOptions, Metadata};
//! use tilegate::grid::TileSetRegistry;
//! use tilegate::service::{Service, ServiceRegistry, ServiceType};
//!
//! let services = ServiceRegistry::new()
//!     .with_service(Service::demo())
//!     .unwrap()
//!     .with_service(Service::with_default_prefix(ServiceType::Wms))
//!     .unwrap();
//! let tilesets = TileSetRegistry::new();
//! let metadata = Metadata::new();
//! let context = DemoContext {
//!     services: &services,
//!     tilesets: &tilesets,
//!     metadata: &metadata,
//!     options: DemoOptions::default(),
//! };
//!
//! let decision = classify(Some("/wms"), &services).unwrap();
//! let doc = generate(&decision, &context, "http://localhost:3000").unwrap();
//! assert_eq!(doc.content_type, "text/html");
//! assert!(doc.body.contains("map.addLayers([]);"));
//! ```

pub mod assembler;
mod classify;
mod generator;
mod landing;
mod wms;

pub use assembler::{format_resolutions, unit_token, LayerVariant};
pub use classify::{classify, RoutingDecision};
pub use generator::{
    generate, resolve_base_url, CapabilityDocument, DemoContext, DemoOptions, Metadata,
    NOT_IMPLEMENTED, TEXT_HTML, TEXT_PLAIN, URL_METADATA_KEY,
};
pub use landing::landing_page;
pub use wms::wms_demo;

//! # tilegate
//!
//! Demo front end for a tile-serving gateway.
//!
//! Given a request below the demo service's prefix, tilegate works out which
//! configured protocol service the caller wants to try and renders a page
//! for it. For WMS this is an OpenLayers map declaring one layer per tile set
//! and grid, with exact resolution ladders and extents; other protocols get
//! a placeholder document, and the bare prefix lists all available demos.
//!
//! ## Architecture
//!
//! - [`service`] - Protocol services and their URL prefixes
//! - [`grid`] - Grids, tile sets and the tile set registry
//! - [`demo`] - Request classification and document generation
//! - [`gateway`] - TOML gateway configuration loading and validation
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use tilegate::{create_router, GatewayConfig, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = GatewayConfig::load("tilegate.toml").unwrap();
//!     let router = create_router(gateway, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod gateway;
pub mod grid;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use demo::{
    classify, generate, CapabilityDocument, DemoContext, DemoOptions, Metadata, RoutingDecision,
};
pub use error::{ConfigError, DemoError};
pub use gateway::GatewayConfig;
pub use grid::{Extent, Grid, GridLink, TileSet, TileSetRegistry, Unit};
pub use server::{create_router, health_handler, AppState, ErrorResponse, RouterConfig};
pub use service::{Service, ServiceRegistry, ServiceType};

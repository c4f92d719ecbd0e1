//! Router configuration for tilegate.
//!
//! # Route Structure
//!
//! ```text
//! /health                          - Health check
//! /{demo_prefix}                   - Demo landing page
//! /{demo_prefix}/                  - Demo landing page
//! /{demo_prefix}/{service}[/...]   - Demo page for a service
//! ```
//!
//! The demo prefix comes from the gateway configuration (`demo` by default).
//!
//! # Example
//!
//! ```ignore
//! use tilegate::gateway::GatewayConfig;
//! use tilegate::server::{create_router, RouterConfig};
//!
//! let gateway = GatewayConfig::load("tilegate.toml")?;
//! let config = RouterConfig::new()
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(gateway, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{demo_handler, demo_index_handler, health_handler, AppState};
use crate::config::DEFAULT_CACHE_MAX_AGE;
use crate::demo::DemoOptions;
use crate::gateway::GatewayConfig;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Cache-Control max-age in seconds for demo pages
    pub cache_max_age: u32,

    /// Whether to enable request tracing
    pub enable_tracing: bool,

    /// Demo generation options
    pub demo_options: DemoOptions,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterConfig {
    /// Create a new router configuration.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Cache max-age is 5 minutes
    /// - Tracing is enabled
    /// - Single-tile demo layers are disabled
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
            enable_tracing: true,
            demo_options: DemoOptions::default(),
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Set the Cache-Control max-age in seconds.
    pub fn with_cache_max_age(mut self, seconds: u32) -> Self {
        self.cache_max_age = seconds;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }

    /// Set demo generation options.
    pub fn with_demo_options(mut self, options: DemoOptions) -> Self {
        self.demo_options = options;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// The demo routes are mounted under the demo service's configured prefix.
pub fn create_router(gateway: GatewayConfig, config: RouterConfig) -> Router {
    let demo_prefix = gateway.demo_prefix().to_string();

    let app_state = AppState::new(gateway)
        .with_options(config.demo_options)
        .with_cache_max_age(config.cache_max_age);

    let cors = build_cors_layer(&config);

    // The catch-all does not match an empty remainder, so the bare prefix
    // and the trailing-slash form get their own routes
    let router = Router::new()
        .route("/health", get(health_handler))
        .route(&format!("/{}", demo_prefix), get(demo_index_handler))
        .route(&format!("/{}/", demo_prefix), get(demo_index_handler))
        .route(&format!("/{}/{{*path}}", demo_prefix), get(demo_handler))
        .with_state(app_state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

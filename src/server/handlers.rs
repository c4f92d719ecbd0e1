//! HTTP request handlers for the tilegate demo front end.
//!
//! # Endpoints
//!
//! - `GET /{demo_prefix}` - Landing page
//! - `GET /{demo_prefix}/{service_prefix}[/...]` - Demo page for a service
//! - `GET /health` - Health check endpoint

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::DEFAULT_CACHE_MAX_AGE;
use crate::demo::{classify, generate, DemoOptions};
use crate::error::DemoError;
use crate::gateway::GatewayConfig;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// The gateway configuration is loaded once and shared read-only by all
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Services, tile sets and metadata the demo pages are built from
    pub gateway: Arc<GatewayConfig>,

    /// Demo generation options
    pub options: DemoOptions,

    /// Cache-Control max-age in seconds for demo pages
    pub cache_max_age: u32,
}

impl AppState {
    /// Create a new application state with default options.
    pub fn new(gateway: GatewayConfig) -> Self {
        Self {
            gateway: Arc::new(gateway),
            options: DemoOptions::default(),
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
        }
    }

    /// Set demo generation options.
    pub fn with_options(mut self, options: DemoOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the Cache-Control max-age in seconds.
    pub fn with_cache_max_age(mut self, cache_max_age: u32) -> Self {
        self.cache_max_age = cache_max_age;
        self
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "not_found", "unsupported_demo")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

impl DemoError {
    /// HTTP status and error type identifier for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            DemoError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            DemoError::UnsupportedDemo => (StatusCode::BAD_REQUEST, "unsupported_demo"),
            DemoError::AllocationFailure => {
                (StatusCode::INTERNAL_SERVER_ERROR, "allocation_failure")
            }
        }
    }
}

/// Convert DemoError to HTTP response.
///
/// 404s are logged at DEBUG, other client errors at WARN and server errors
/// at ERROR.
impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);
        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle demo landing page requests.
///
/// # Endpoint
///
/// `GET /{demo_prefix}` and `GET /{demo_prefix}/`
///
/// # Response
///
/// `200 OK` with an HTML page linking to each service's demo.
pub async fn demo_index_handler(
    State(state): State<AppState>,
    Query(_params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, DemoError> {
    render_demo(&state, None, &headers)
}

/// Handle demo requests for a specific service.
///
/// # Endpoint
///
/// `GET /{demo_prefix}/{*path}`
///
/// # Path Parameters
///
/// - `path`: service prefix, optionally followed by `/` and anything else
///
/// # Query Parameters
///
/// Accepted and ignored.
///
/// # Response
///
/// - `200 OK`: `text/html` demo page, or `text/plain` "not implemented"
///   for protocols without a demo
/// - `400 Bad Request`: the demo service itself was requested
/// - `404 Not Found`: no service is configured under the prefix
pub async fn demo_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(_params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, DemoError> {
    let fragment = format!("/{}", path);
    render_demo(&state, Some(&fragment), &headers)
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn render_demo(
    state: &AppState,
    fragment: Option<&str>,
    headers: &HeaderMap,
) -> Result<Response, DemoError> {
    let gateway = state.gateway.as_ref();

    let decision = classify(fragment, &gateway.services)?;
    let base_url = request_base_url(headers);
    let document = generate(&decision, &gateway.demo_context(state.options), &base_url)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", state.cache_max_age),
            ),
        ],
        document.body,
    )
        .into_response())
}

/// Base URL the request was made against, from the `Host` and
/// `X-Forwarded-Proto` headers.
pub fn request_base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:3000");

    // X-Forwarded-Proto is set by reverse proxies terminating TLS
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}", proto, host)
}

// =============================================================================
// Tests
// =============================================================================

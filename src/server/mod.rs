//! HTTP server layer for tilegate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │              GET /{demo_prefix}[/{service}[/...]]               │
//! │                                                                 │
//! │  ┌────────────────────────┐        ┌─────────────────────────┐  │
//! │  │       handlers         │        │        routes           │  │
//! │  │ (classify + generate)  │        │  (router config, CORS)  │  │
//! │  └────────────────────────┘        └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    demo_handler, demo_index_handler, health_handler, request_base_url, AppState, ErrorResponse,
    HealthResponse,
};
pub use routes::{create_router, RouterConfig};

//! Test utilities for integration tests.
//!
//! Provides sample gateway configurations and helpers to drive the router
//! without binding a socket.

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tilegate::{create_router, GatewayConfig, RouterConfig};

/// Gateway with a demo, WMS and TMS service, two grids and two tile sets.
pub const SAMPLE_CONFIG: &str = r#"
[[services]]
type = "demo"

[[services]]
type = "wms"

[[services]]
type = "tms"

[[grids]]
name = "g"
unit = "m"
srs = "EPSG:900913"
extent = [-20037508.3427892480, -20037508.3427892480, 20037508.3427892480, 20037508.3427892480]
resolutions = [100.0, 50.0, 25.0]

[[grids]]
name = "WGS84"
unit = "dd"
srs = "EPSG:4326"
extent = [-180, -90, 180, 90]
resolutions = [0.703125, 0.3515625]

[[tilesets]]
name = "osm"
grids = ["g", "WGS84"]

[[tilesets]]
name = "relief"
grids = ["WGS84"]
"#;

/// Gateway with services but no tile sets.
pub const EMPTY_TILESETS_CONFIG: &str = r#"
[[services]]
type = "demo"

[[services]]
type = "wms"
"#;

/// A buffered HTTP response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

/// Build a router from TOML configuration text.
pub fn router_from_toml(toml: &str, config: RouterConfig) -> Router {
    let gateway = GatewayConfig::from_toml_str(toml).expect("test configuration should load");
    create_router(gateway, config.with_tracing(false))
}

/// Router for [`SAMPLE_CONFIG`] with default settings.
pub fn sample_router() -> Router {
    router_from_toml(SAMPLE_CONFIG, RouterConfig::new())
}

/// Issue a GET request with optional extra headers.
pub async fn get(router: Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

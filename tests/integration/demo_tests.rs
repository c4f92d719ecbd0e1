//! Demo endpoint integration tests.
//!
//! Tests verify:
//! - Landing page routing for the bare and trailing-slash demo paths
//! - WMS demo generation from the configured tile sets and grids
//! - Placeholder documents for protocols without a demo
//! - Error responses and status codes

use axum::http::StatusCode;

use tilegate::demo::assembler::{DEMO_FOOTER, DEMO_HEAD};
use tilegate::{DemoOptions, RouterConfig};

use super::test_utils::{
    get, router_from_toml, sample_router, EMPTY_TILESETS_CONFIG, SAMPLE_CONFIG,
};

// =============================================================================
// Landing Page
// =============================================================================

#[tokio::test]
async fn test_landing_page() {
    for uri in ["/demo", "/demo/"] {
        let response = get(sample_router(), uri, &[("host", "tiles.example.com")]).await;

        assert_eq!(response.status, StatusCode::OK, "uri {}", uri);
        assert_eq!(response.content_type(), "text/html");
        assert_eq!(
            response.body,
            concat!(
                "<html><head><title>tilegate demo landing page</title></head><body>",
                "<a href=\"http://tiles.example.com/demo/wms\">wms</a><br/>",
                "<a href=\"http://tiles.example.com/demo/tms\">tms</a><br/>",
                "</body></html>"
            )
        );
    }
}

#[tokio::test]
async fn test_landing_page_ignores_query() {
    let response = get(sample_router(), "/demo?foo=bar&SERVICE=WMS", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("/demo/wms"));
}

#[tokio::test]
async fn test_landing_page_uses_forwarded_proto() {
    let response = get(
        sample_router(),
        "/demo",
        &[("host", "tiles.example.com"), ("x-forwarded-proto", "https")],
    )
    .await;
    assert!(response
        .body
        .contains("<a href=\"https://tiles.example.com/demo/wms\">wms</a>"));
}

// =============================================================================
// WMS Demo
// =============================================================================

#[tokio::test]
async fn test_wms_demo() {
    let response = get(sample_router(), "/demo/wms", &[("host", "gw:8080")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), "text/html");
    assert!(response.headers.contains_key("cache-control"));

    let body = &response.body;
    assert!(body.starts_with(DEMO_HEAD));
    assert!(body.ends_with(DEMO_FOOTER));
    assert!(body.contains("    var osm_g_layer = new OpenLayers.Layer.WMS( \"osm-g\",\n"));
    assert!(body.contains("        \"http://gw:8080/wms?\",{layers: 'osm'},\n"));
    assert!(body.contains(
        "          resolutions:[100.00000000000000000000,50.00000000000000000000,25.00000000000000000000],\n"
    ));
    assert!(body.contains("          units:\"m\",\n"));
    assert!(body.contains("var osm_WGS84_layer = "));
    assert!(body.contains("var relief_WGS84_layer = "));
    assert!(body.contains("          units:\"dd\",\n"));
    assert!(body.contains(
        "          maxExtent: new OpenLayers.Bounds(-180.000000,-90.000000,180.000000,90.000000),\n"
    ));
    assert!(body.contains("    map.addLayers([osm_g_layer,osm_WGS84_layer,relief_WGS84_layer]);\n"));
    assert!(!body.contains("singleTile"));
}

#[tokio::test]
async fn test_wms_demo_with_trailing_path() {
    let response = get(sample_router(), "/demo/wms/anything/else", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("map.addLayers(["));
}

#[tokio::test]
async fn test_wms_demo_single_tile() {
    let router = router_from_toml(
        SAMPLE_CONFIG,
        RouterConfig::new().with_demo_options(DemoOptions::default().with_single_tile(true)),
    );
    let response = get(router, "/demo/wms", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("var osm_g_slayer = new OpenLayers.Layer.WMS( \"osm-g (singleTile)\",\n"));
    assert!(response.body.contains(
        "map.addLayers([osm_g_layer,osm_g_slayer,osm_WGS84_layer,osm_WGS84_slayer,relief_WGS84_layer,relief_WGS84_slayer]);"
    ));
}

#[tokio::test]
async fn test_wms_demo_without_tilesets() {
    let router = router_from_toml(EMPTY_TILESETS_CONFIG, RouterConfig::new());
    let response = get(router, "/demo/wms", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        format!("{}    map.addLayers([]);\n{}", DEMO_HEAD, DEMO_FOOTER)
    );
}

#[tokio::test]
async fn test_metadata_url_overrides_host() {
    let toml = format!(
        "[metadata]\nurl = \"https://public.example.com/gw/\"\n{}",
        SAMPLE_CONFIG
    );
    let router = router_from_toml(&toml, RouterConfig::new());
    let response = get(router, "/demo/wms", &[("host", "internal:9000")]).await;

    assert!(response
        .body
        .contains("\"https://public.example.com/gw/wms?\",{layers: 'osm'}"));
    assert!(!response.body.contains("internal:9000"));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let router = sample_router();
    let first = get(router.clone(), "/demo/wms", &[]).await;
    let second = get(router, "/demo/wms", &[]).await;
    assert_eq!(first.body, second.body);
}

// =============================================================================
// Other Protocols
// =============================================================================

#[tokio::test]
async fn test_tms_demo_not_implemented() {
    let response = get(sample_router(), "/demo/tms", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), "text/plain");
    assert_eq!(response.body, "not implemented");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_unknown_service_not_found() {
    let response = get(sample_router(), "/demo/wmts", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let error = response.json();
    assert_eq!(error["error"], "not_found");
    assert_eq!(error["status"], 404);
    assert_eq!(
        error["message"],
        "demo service \"wmts\" not recognised or not enabled"
    );
}

#[tokio::test]
async fn test_prefix_without_separator_not_found() {
    let response = get(sample_router(), "/demo/wmsfoo", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "not_found");
}

#[tokio::test]
async fn test_demo_of_demo_rejected() {
    let response = get(sample_router(), "/demo/demo", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let error = response.json();
    assert_eq!(error["error"], "unsupported_demo");
    assert_eq!(
        error["message"],
        "selected service does not provide a demo page"
    );
}

#[tokio::test]
async fn test_custom_demo_prefix() {
    let toml = r#"
[[services]]
type = "demo"
prefix = "preview"

[[services]]
type = "wms"
prefix = "ogc/wms"
"#;
    let router = router_from_toml(toml, RouterConfig::new());

    let response = get(router.clone(), "/preview", &[("host", "h")]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("<a href=\"http://h/preview/ogc/wms\">ogc/wms</a><br/>"));

    let response = get(router.clone(), "/preview/ogc/wms", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), "text/html");

    let response = get(router, "/demo", &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let response = get(sample_router(), "/health", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
}

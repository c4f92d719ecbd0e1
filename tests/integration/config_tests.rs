//! Gateway configuration file tests.
//!
//! Tests verify:
//! - Loading a configuration file from disk
//! - Rejection of files the demo generator could not render
//! - Serving a router built from a loaded file

use std::io::Write;

use axum::http::StatusCode;
use tempfile::NamedTempFile;

use tilegate::{create_router, ConfigError, GatewayConfig, RouterConfig, ServiceType, Unit};

use super::test_utils::{get, SAMPLE_CONFIG};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(SAMPLE_CONFIG);
    let gateway = GatewayConfig::load(file.path()).unwrap();

    assert!(gateway.services.demo().is_some());
    assert!(gateway.services.get(ServiceType::Wms).is_some());
    assert!(gateway.services.get(ServiceType::Kml).is_none());
    assert_eq!(gateway.tilesets.len(), 2);

    let osm = gateway.tilesets.get("osm").unwrap();
    assert_eq!(osm.grid_links.len(), 2);
    assert_eq!(osm.grid_links[1].grid.unit, Unit::Degrees);
    assert_eq!(osm.grid_links[0].grid.levels, vec![100.0, 50.0, 25.0]);
}

#[test]
fn test_load_rejects_malformed_toml() {
    let file = write_config("[[services]\ntype = ");
    let result = GatewayConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_rejects_unknown_fields() {
    let file = write_config("[[services]]\ntype = \"demo\"\nenabled = true\n");
    let result = GatewayConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_rejects_grid_without_levels() {
    let file = write_config(
        r#"
[[services]]
type = "demo"

[[grids]]
name = "g"
unit = "m"
srs = "EPSG:3857"
extent = [0, 0, 1, 1]
resolutions = []
"#,
    );
    let err = GatewayConfig::load(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Grid g has no resolutions");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = GatewayConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[tokio::test]
async fn test_serve_loaded_file() {
    let file = write_config(SAMPLE_CONFIG);
    let gateway = GatewayConfig::load(file.path()).unwrap();
    let router = create_router(gateway, RouterConfig::new().with_tracing(false));

    let response = get(router, "/demo/wms", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("relief_WGS84_layer"));
}

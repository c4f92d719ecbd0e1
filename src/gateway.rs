//! Gateway configuration file.
//!
//! Describes the services, grids and tile sets the demo pages are rendered
//! from. The file is TOML:
//!
//! ```toml
//! [metadata]
//! url = "https://tiles.example.com"
//!
//! [[services]]
//! type = "demo"
//!
//! [[services]]
//! type = "wms"
//!
//! [[grids]]
//! name = "g"
//! unit = "m"
//! srs = "EPSG:900913"
//! extent = [-20037508.3427892480, -20037508.3427892480, 20037508.3427892480, 20037508.3427892480]
//! resolutions = [156543.0339280410, 78271.51696402048, 39135.75848201024]
//!
//! [[tilesets]]
//! name = "osm"
//! grids = ["g"]
//! ```
//!
//! Loading validates everything the demo generator relies on, so a loaded
//! [`GatewayConfig`] always renders a well-formed document.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::demo::{DemoContext, DemoOptions, Metadata, URL_METADATA_KEY};
use crate::error::ConfigError;
use crate::grid::{Extent, Grid, TileSet, TileSetRegistry, Unit};
use crate::service::{Service, ServiceRegistry, ServiceType};

// =============================================================================
// File Format
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GatewayFile {
    #[serde(default)]
    metadata: Metadata,

    #[serde(default)]
    services: Vec<ServiceEntry>,

    #[serde(default)]
    grids: Vec<GridEntry>,

    #[serde(default)]
    tilesets: Vec<TileSetEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceEntry {
    #[serde(rename = "type")]
    kind: ServiceType,

    /// Defaults to the protocol name
    prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridEntry {
    name: String,
    unit: Unit,
    srs: String,
    extent: [f64; 4],
    resolutions: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TileSetEntry {
    name: String,
    grids: Vec<String>,
}

// =============================================================================
// GatewayConfig
// =============================================================================

/// Validated, immutable gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub services: ServiceRegistry,
    pub tilesets: TileSetRegistry,
    pub metadata: Metadata,
}

/// Paths the server mounts beside the demo routes.
const RESERVED_DEMO_PREFIXES: &[&str] = &["health"];

impl GatewayConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: GatewayFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    fn from_file(file: GatewayFile) -> Result<Self, ConfigError> {
        if let Some(url) = file.metadata.get(URL_METADATA_KEY) {
            url::Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
                value: url.clone(),
                source,
            })?;
        }

        let mut services = ServiceRegistry::new();
        for entry in file.services {
            let service = match entry.prefix {
                Some(prefix) => Service::new(entry.kind, prefix),
                None => Service::with_default_prefix(entry.kind),
            };
            services.register(service)?;
        }
        match services.demo() {
            None => return Err(ConfigError::MissingDemoService),
            Some(demo) if RESERVED_DEMO_PREFIXES.contains(&demo.url_prefix.as_str()) => {
                return Err(ConfigError::InvalidPrefix {
                    prefix: demo.url_prefix.clone(),
                    reason: "prefix is reserved by the server",
                });
            }
            Some(_) => {}
        }

        let mut grids: HashMap<String, Arc<Grid>> = HashMap::new();
        for entry in file.grids {
            let grid = build_grid(entry)?;
            if grids.contains_key(&grid.name) {
                return Err(ConfigError::DuplicateGrid(grid.name));
            }
            grids.insert(grid.name.clone(), Arc::new(grid));
        }

        let mut tilesets = TileSetRegistry::new();
        for entry in file.tilesets {
            let mut tileset = TileSet::new(entry.name);
            for grid_name in entry.grids {
                let grid = grids
                    .get(&grid_name)
                    .ok_or_else(|| ConfigError::UnknownGrid {
                        tileset: tileset.name.clone(),
                        grid: grid_name.clone(),
                    })?;
                tileset = tileset.with_grid(Arc::clone(grid));
            }
            tilesets.insert(tileset)?;
        }

        debug!(
            services = services.len(),
            grids = grids.len(),
            tilesets = tilesets.len(),
            "Loaded gateway configuration"
        );

        Ok(Self {
            services,
            tilesets,
            metadata: file.metadata,
        })
    }

    /// Borrow the configuration for demo generation.
    pub fn demo_context(&self, options: DemoOptions) -> DemoContext<'_> {
        DemoContext {
            services: &self.services,
            tilesets: &self.tilesets,
            metadata: &self.metadata,
            options,
        }
    }

    /// URL prefix of the demo service.
    pub fn demo_prefix(&self) -> &str {
        self.services
            .demo()
            .map(|s| s.url_prefix.as_str())
            .unwrap_or(ServiceType::Demo.default_prefix())
    }
}

fn build_grid(entry: GridEntry) -> Result<Grid, ConfigError> {
    if entry.resolutions.is_empty() {
        return Err(ConfigError::EmptyResolutions(entry.name));
    }
    if let Some(&value) = entry
        .resolutions
        .iter()
        .find(|r| !r.is_finite() || **r <= 0.0)
    {
        return Err(ConfigError::InvalidResolution {
            grid: entry.name,
            value,
        });
    }

    let extent = Extent::from(entry.extent);
    extent
        .validate()
        .map_err(|message| ConfigError::InvalidExtent {
            grid: entry.name.clone(),
            message,
        })?;

    Ok(Grid::new(
        entry.name,
        entry.unit,
        extent,
        entry.srs,
        entry.resolutions,
    ))
}

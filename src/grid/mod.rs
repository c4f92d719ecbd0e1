//! Tiling grids and the tile sets published on them.
//!
//! A [`Grid`] describes a tiling scheme: spatial reference, unit, extent and
//! a resolution ladder from coarsest to finest. A [`TileSet`] is published on
//! one or more grids through [`GridLink`]s; grids are shared between tile
//! sets by reference counting rather than copied.
//!
//! ```text
//! TileSet "osm" ──┬── GridLink ──► Arc<Grid "g3857">
//!                 └── GridLink ──► Arc<Grid "wgs84"> ◄── GridLink ── TileSet "relief"
//! ```

mod registry;

pub use registry::TileSetRegistry;

use std::sync::Arc;

use serde::Deserialize;

// =============================================================================
// Unit
// =============================================================================

/// Unit of a grid's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[serde(alias = "m")]
    Meters,
    #[serde(alias = "ft")]
    Feet,
    #[serde(alias = "dd")]
    Degrees,
}

// =============================================================================
// Extent
// =============================================================================

/// Bounding extent of a grid, in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Create an extent from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Corner coordinates as `[minx, miny, maxx, maxy]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Check that both axes are finite and non-degenerate.
    pub fn validate(&self) -> Result<(), String> {
        if self.as_array().iter().any(|v| !v.is_finite()) {
            return Err("coordinates must be finite".to_string());
        }
        if self.min_x >= self.max_x {
            return Err(format!("minx {} >= maxx {}", self.min_x, self.max_x));
        }
        if self.min_y >= self.max_y {
            return Err(format!("miny {} >= maxy {}", self.min_y, self.max_y));
        }
        Ok(())
    }
}

impl From<[f64; 4]> for Extent {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

// =============================================================================
// Grid
// =============================================================================

/// A tiling grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Grid name, used in demo layer identifiers
    pub name: String,

    /// Unit of the grid's coordinate system
    pub unit: Unit,

    /// Bounding extent
    pub extent: Extent,

    /// Spatial reference identifier (e.g. "EPSG:3857")
    pub srs: String,

    /// Resolution of each zoom level, first level is the base resolution
    pub levels: Vec<f64>,
}

impl Grid {
    pub fn new(
        name: impl Into<String>,
        unit: Unit,
        extent: Extent,
        srs: impl Into<String>,
        levels: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            unit,
            extent,
            srs: srs.into(),
            levels,
        }
    }

    /// Number of zoom levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

// =============================================================================
// GridLink / TileSet
// =============================================================================

/// Publication of a tile set on a grid.
#[derive(Debug, Clone)]
pub struct GridLink {
    pub grid: Arc<Grid>,
}

impl GridLink {
    pub fn new(grid: Arc<Grid>) -> Self {
        Self { grid }
    }
}

/// A named set of tiles published on one or more grids.
#[derive(Debug, Clone)]
pub struct TileSet {
    /// Tile set name, also used as the WMS layer name
    pub name: String,

    /// Grids the tile set is published on, in configured order
    pub grid_links: Vec<GridLink>,
}

impl TileSet {
    /// Create a tile set with no grids.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grid_links: Vec::new(),
        }
    }

    /// Publish the tile set on another grid.
    pub fn with_grid(mut self, grid: Arc<Grid>) -> Self {
        self.grid_links.push(GridLink::new(grid));
        self
    }

    /// Grids the tile set is published on, in configured order.
    pub fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.grid_links.iter().map(|link| link.grid.as_ref())
    }
}

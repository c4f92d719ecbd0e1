//! Formatting helpers for the OpenLayers WMS demo page.
//!
//! All numbers go through Rust's float formatting with an explicit
//! precision, which prints the exact decimal expansion and never depends on
//! the process locale. Resolutions get at least [`RESOLUTION_PRECISION`]
//! fractional digits, and more when a value needs them to parse back to
//! itself.

use crate::error::DemoError;
use crate::grid::{Extent, Grid, Unit};

/// Minimum fractional digits used for resolution ladders.
pub const RESOLUTION_PRECISION: usize = 20;

/// Fractional digits of the exact expansion of the smallest subnormal.
const MAX_FRACTION_DIGITS: usize = 1074;

/// Fractional digits used for extent coordinates.
pub const EXTENT_PRECISION: usize = 6;

/// Document head, up to the point where layers are declared.
pub const DEMO_HEAD: &str = concat!(
    "<html xmlns=\"http://www.w3.org/1999/xhtml\">\n",
    "  <head>\n",
    "    <style type=\"text/css\">\n",
    "    #map {\n",
    "    width: 100%;\n",
    "    height: 100%;\n",
    "    border: 1px solid black;\n",
    "    }\n",
    "    </style>\n",
    "    <script src=\"http://www.openlayers.org/api/OpenLayers.js\"></script>\n",
    "    <script type=\"text/javascript\">\n",
    "var map;\n",
    "function init(){\n",
    "    map = new OpenLayers.Map( 'map' );\n",
);

/// Everything after the `addLayers` call.
pub const DEMO_FOOTER: &str = concat!(
    "    if(!map.getCenter())\n",
    "     map.zoomToMaxExtent();\n",
    "    map.addControl(new OpenLayers.Control.LayerSwitcher());\n",
    "    map.addControl(new OpenLayers.Control.MousePosition());\n",
    "}\n",
    "    </script>\n",
    "  </head>\n",
    "\n",
    "<body onload=\"init()\">\n",
    "    <div id=\"map\">\n",
    "    </div>\n",
    "</body>\n",
    "</html>\n",
);

/// Rough size of one layer declaration, used to pre-size the document.
pub const LAYER_SIZE_HINT: usize = 512;

/// Flavour of a demo layer declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerVariant {
    /// Regular tiled WMS layer
    Tiled,
    /// Whole-extent single image, no gutter or tiling
    SingleTile,
}

impl LayerVariant {
    fn suffix(&self) -> &'static str {
        match self {
            LayerVariant::Tiled => "layer",
            LayerVariant::SingleTile => "slayer",
        }
    }
}

/// Map a grid unit to the OpenLayers `units` token.
pub fn unit_token(unit: Unit) -> &'static str {
    match unit {
        Unit::Meters => "m",
        Unit::Feet => "ft",
        Unit::Degrees => "dd",
    }
}

/// Render a resolution ladder as a comma-separated list, keeping level order.
pub fn format_resolutions(levels: &[f64]) -> String {
    levels
        .iter()
        .map(|&r| format!("{:.*}", resolution_precision(r), r))
        .collect::<Vec<_>>()
        .join(",")
}

/// Fractional digits needed for `value` to parse back unchanged.
fn resolution_precision(value: f64) -> usize {
    if !value.is_finite() {
        return RESOLUTION_PRECISION;
    }

    let mut precision = RESOLUTION_PRECISION.max(shortest_fraction_digits(value));
    while precision < MAX_FRACTION_DIGITS
        && format!("{:.*}", precision, value).parse::<f64>() != Ok(value)
    {
        precision += 1;
    }
    precision
}

/// Fractional digits of the shortest representation of a finite value.
fn shortest_fraction_digits(value: f64) -> usize {
    // `{:e}` prints the shortest mantissa that round-trips, e.g. "2.1457e-5"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let mantissa_digits = mantissa.split_once('.').map_or(0, |(_, f)| f.len()) as i64;
    let exponent: i64 = exponent.parse().unwrap_or(0);
    (mantissa_digits - exponent).max(0) as usize
}

/// Render an extent as `minx,miny,maxx,maxy`.
pub fn format_extent(extent: &Extent) -> String {
    extent
        .as_array()
        .iter()
        .map(|v| format!("{:.*}", EXTENT_PRECISION, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// JavaScript variable holding the layer for a tile set on a grid.
pub fn layer_variable(tileset: &str, grid: &str, variant: LayerVariant) -> String {
    format!("{}_{}_{}", tileset, grid, variant.suffix())
}

/// Declare one `OpenLayers.Layer.WMS` for a tile set published on a grid.
///
/// `resolutions` is the pre-rendered ladder from [`format_resolutions`], so
/// both variants of a layer share a single rendering.
pub fn layer_declaration(
    tileset: &str,
    grid: &Grid,
    wms_url: &str,
    resolutions: &str,
    variant: LayerVariant,
) -> String {
    let variable = layer_variable(tileset, &grid.name, variant);
    let units = unit_token(grid.unit);
    let extent = format_extent(&grid.extent);
    let srs = &grid.srs;
    let grid_name = &grid.name;

    match variant {
        LayerVariant::Tiled => format!(
            r#"    var {variable} = new OpenLayers.Layer.WMS( "{tileset}-{grid_name}",
        "{wms_url}",{{layers: '{tileset}'}},
        {{ gutter:0,buffer:0,isBaseLayer:true,transitionEffect:'resize',
          resolutions:[{resolutions}],
          units:"{units}",
          maxExtent: new OpenLayers.Bounds({extent}),
          projection: new OpenLayers.Projection("{srs}")
        }}
    );
"#
        ),
        LayerVariant::SingleTile => format!(
            r#"    var {variable} = new OpenLayers.Layer.WMS( "{tileset}-{grid_name} (singleTile)",
        "{wms_url}",{{layers: '{tileset}'}},
        {{ gutter:0,ratio:1,isBaseLayer:true,transitionEffect:'resize',
          resolutions:[{resolutions}],
          units:"{units}",
          singleTile:true,
          maxExtent: new OpenLayers.Bounds({extent}),
          projection: new OpenLayers.Projection("{srs}")
        }}
    );
"#
        ),
    }
}

/// The `addLayers` call followed by the fixed document tail.
pub fn demo_footer(layers: &[String]) -> String {
    format!("    map.addLayers([{}]);\n{}", layers.join(","), DEMO_FOOTER)
}

/// Allocate the output buffer for a document.
pub fn reserve_document(capacity: usize) -> Result<String, DemoError> {
    let mut doc = String::new();
    doc.try_reserve(capacity)
        .map_err(|_| DemoError::AllocationFailure)?;
    Ok(doc)
}

//! OpenLayers demo page for the WMS service.
//!
//! Every tile set is declared once per grid it is published on, so a client
//! can switch between all tile set/grid combinations from one page.

use crate::error::DemoError;
use crate::grid::TileSetRegistry;

use super::assembler::{
    demo_footer, format_resolutions, layer_declaration, layer_variable, reserve_document,
    LayerVariant, DEMO_FOOTER, DEMO_HEAD, LAYER_SIZE_HINT,
};
use super::generator::{CapabilityDocument, DemoOptions, TEXT_HTML};

/// Build the WMS demo page for all configured tile sets.
pub fn wms_demo(
    tilesets: &TileSetRegistry,
    base_url: &str,
    options: &DemoOptions,
) -> Result<CapabilityDocument, DemoError> {
    let wms_url = format!("{}/wms?", base_url);

    let link_count: usize = tilesets.iter().map(|t| t.grid_links.len()).sum();
    let variants = if options.single_tile { 2 } else { 1 };
    let mut body = reserve_document(
        DEMO_HEAD.len() + DEMO_FOOTER.len() + link_count * variants * LAYER_SIZE_HINT,
    )?;
    body.push_str(DEMO_HEAD);

    let mut layers = Vec::with_capacity(link_count * variants);
    for tileset in tilesets.iter() {
        for grid in tileset.grids() {
            let resolutions = format_resolutions(&grid.levels);

            body.push_str(&layer_declaration(
                &tileset.name,
                grid,
                &wms_url,
                &resolutions,
                LayerVariant::Tiled,
            ));
            layers.push(layer_variable(&tileset.name, &grid.name, LayerVariant::Tiled));

            if options.single_tile {
                body.push_str(&layer_declaration(
                    &tileset.name,
                    grid,
                    &wms_url,
                    &resolutions,
                    LayerVariant::SingleTile,
                ));
                layers.push(layer_variable(
                    &tileset.name,
                    &grid.name,
                    LayerVariant::SingleTile,
                ));
            }
        }
    }

    body.push_str(&demo_footer(&layers));

    Ok(CapabilityDocument::new(TEXT_HTML, body))
}

//! Draw operations for canvas paints
//!
//! Turns [`CanvasPaint`]s into image blits and rectangles in canvas pixels,
//! leaving the actual drawing to the host.

use pico_map_core::{ColiderTypes, MapChip, RenderingRect};
use tracing::debug;

use crate::arrangement::PaintItem;
use crate::canvas::{CanvasPaint, PaintTarget};
use crate::project::TiledMap;

/// One drawing step, in canvas pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOperation {
    /// Clear the chip layer of a cell
    Clear {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Copy `source` from chip image `chip_id` to `(dest_x, dest_y)`
    Image {
        chip_id: u32,
        source: RenderingRect,
        dest_x: u32,
        dest_y: u32,
    },
    /// Clear the collision overlay of a cell
    ClearColider {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Mark a cell as colliding
    FillColider {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Operations redrawing the cell of `paint`.
///
/// Cells outside the map and fragments whose chip image is unknown produce
/// nothing.
pub fn draw_operations(map: &TiledMap, paint: &CanvasPaint) -> Vec<DrawOperation> {
    if paint.x < 0
        || paint.y < 0
        || paint.x as u32 >= map.chip_count_x()
        || paint.y as u32 >= map.chip_count_y()
    {
        return Vec::new();
    }

    let (width, height) = (map.chip_width(), map.chip_height());
    let (x, y) = (paint.x as u32 * width, paint.y as u32 * height);

    match &paint.item {
        PaintItem::MapChip(chip) => chip_operations(map, chip, x, y),
        PaintItem::Empty => vec![DrawOperation::Clear {
            x,
            y,
            width,
            height,
        }],
        PaintItem::Colider(ColiderTypes::None) => vec![DrawOperation::ClearColider {
            x,
            y,
            width,
            height,
        }],
        PaintItem::Colider(ColiderTypes::Colider) => vec![
            DrawOperation::ClearColider {
                x,
                y,
                width,
                height,
            },
            DrawOperation::FillColider {
                x,
                y,
                width,
                height,
            },
        ],
    }
}

fn chip_operations(map: &TiledMap, chip: &MapChip, x: u32, y: u32) -> Vec<DrawOperation> {
    let (width, height) = (map.chip_width(), map.chip_height());
    let mut operations = vec![DrawOperation::Clear {
        x,
        y,
        width,
        height,
    }];

    for fragment in chip.items() {
        if !map.chip_images().contains(fragment.chip_id()) {
            debug!(chip_id = fragment.chip_id(), "chip image not found, fragment not drawn");
            continue;
        }
        let source = fragment.source_rect(width, height);
        operations.push(DrawOperation::Image {
            chip_id: fragment.chip_id(),
            dest_x: x + source.dest_offset_x,
            dest_y: y + source.dest_offset_y,
            source,
        });
    }
    operations
}

/// Committed paints for every cell of the chip grid, then the collision grid
pub fn render_all(map: &TiledMap) -> Vec<CanvasPaint> {
    let chips = map.map_chips().iter().map(|(x, y, chip)| {
        CanvasPaint::new(PaintTarget::Committed, x, y, PaintItem::MapChip(chip.clone()))
    });
    let coliders = map.coliders().iter().map(|(x, y, colider)| {
        CanvasPaint::new(PaintTarget::Committed, x, y, PaintItem::Colider(*colider))
    });
    chips.chain(coliders).collect()
}

//! Recomposition of auto tile cells after the grid changed
//!
//! Painting or erasing a cell changes what its 8 neighbors should look like.
//! The engine works per cell; whoever writes to the grid calls
//! [`refresh_neighborhood`] or [`refresh_cells`] for the touched area.

use pico_map_core::{MapChip, MapMatrix};
use tracing::{debug, warn};

use crate::{compose_at, AutoTiles};

/// Check whether `(x, y)` holds a chip of auto tile `auto_tile_id`.
///
/// Cells outside the grid never match.
pub fn is_same_auto_tile(map_chips: &MapMatrix<MapChip>, auto_tile_id: u32, x: i32, y: i32) -> bool {
    map_chips
        .get(x, y)
        .and_then(MapChip::auto_tile_id)
        .is_some_and(|id| id == auto_tile_id)
}

/// Every cell within one step of the given points, row-major and without
/// duplicates.
pub fn affected_cells(points: impl IntoIterator<Item = (i32, i32)>) -> Vec<(i32, i32)> {
    let mut cells: Vec<(i32, i32)> = points
        .into_iter()
        .flat_map(|(x, y)| {
            (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (y + dy, x + dx)))
        })
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells.into_iter().map(|(y, x)| (x, y)).collect()
}

/// Recompose the auto tile chips among `cells` and write back the ones that
/// changed. Returns the rewritten cells in input order.
///
/// Cells without an auto tile payload, outside the grid, or whose auto tile
/// is no longer registered are left untouched.
pub fn refresh_cells(
    map_chips: &mut MapMatrix<MapChip>,
    auto_tiles: &AutoTiles,
    cells: impl IntoIterator<Item = (i32, i32)>,
) -> Vec<(i32, i32, MapChip)> {
    let mut updates = Vec::new();

    for (x, y) in cells {
        let Some(chip) = map_chips.get(x, y) else {
            continue;
        };
        let Some(auto_tile_id) = chip.auto_tile_id() else {
            continue;
        };
        let Some(auto_tile) = auto_tiles.from_id(auto_tile_id) else {
            warn!(auto_tile_id, x, y, "auto tile not found, cell left as is");
            continue;
        };

        let recomposed = compose_at(auto_tile, x, y, |nx, ny| {
            is_same_auto_tile(map_chips, auto_tile_id, nx, ny)
        });
        if recomposed != *chip {
            updates.push((x, y, recomposed));
        }
    }

    // Occupancy only depends on auto tile ids, which recomposition keeps
    for (x, y, chip) in &updates {
        if map_chips.put(chip.clone(), *x, *y).is_err() {
            warn!(x, y, "refreshed cell fell outside the map");
        }
    }

    if !updates.is_empty() {
        debug!(count = updates.len(), "recomposed auto tile cells");
    }
    updates
}

/// Recompose `(x, y)` and its 8 neighbors
pub fn refresh_neighborhood(
    map_chips: &mut MapMatrix<MapChip>,
    auto_tiles: &AutoTiles,
    x: i32,
    y: i32,
) -> Vec<(i32, i32, MapChip)> {
    refresh_cells(map_chips, auto_tiles, affected_cells([(x, y)]))
}

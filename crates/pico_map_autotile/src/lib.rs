//! Blob-style autotile composition for pico_map
//!
//! An auto tile is a block of five chips in a source image. For every cell
//! the engine looks at the 8 neighbors, picks one of the five rows for each
//! quadrant of the cell, and stacks the resulting fragments into a
//! [`MapChip`](pico_map_core::MapChip).
//!
//! # Example
//!
//! ```rust,ignore
//! use pico_map_autotile::{compose_at, refresh_neighborhood, AutoTiles};
//! use pico_map_core::{MapChip, MapMatrix};
//!
//! let mut auto_tiles = AutoTiles::new();
//! let id = auto_tiles.push(2, 0, 0)?; // image 2, chip column 0
//!
//! let mut map_chips = MapMatrix::new(10, 10, MapChip::empty());
//! let auto_tile = auto_tiles.from_id(id).unwrap();
//! map_chips.put(compose_at(auto_tile, 5, 5, |_, _| false), 5, 5)?;
//!
//! // Neighbors of a changed cell must be recomposed by the caller
//! refresh_neighborhood(&mut map_chips, &auto_tiles, 5, 5);
//! ```

mod auto_tile;
mod compose;
mod index;
mod neighborhood;
mod refresh;

pub use auto_tile::{AutoTile, AutoTileImportStrategy, AutoTiles, DefaultAutoTileImportStrategy};
pub use compose::{compose, compose_at, merge_quadrants, quadrant_shapes, QuadrantShape};
pub use index::{AutoTileIndexLayout, IndexImageTile};
pub use neighborhood::{calculate_bitmask, Direction, Neighborhood};
pub use refresh::{affected_cells, is_same_auto_tile, refresh_cells, refresh_neighborhood};

// Re-export pico_map_core
pub use pico_map_core;

//! Core data structures for pico_map
//!
//! This crate provides the fundamental types for representing tile-based maps:
//! - `MapMatrix` - Fixed-size grid with bounds-checked access
//! - `MapChipFragment` / `MapChip` - Tile references and their composition
//! - `ColiderMap` - Per-cell collision flags
//! - `MapChipsCollection` - Source images fragments point into
//!
//! This crate has no rendering dependency. It operates on plain data.

mod colider;
mod error;
mod image;
mod map_chip;
mod matrix;

pub use colider::{ColiderMap, ColiderTypes};
pub use error::MapError;
pub use image::{MapChipImage, MapChipsCollection};
pub use map_chip::{
    AutoTileAttributes, Boundary, Cross, FragmentParameters, MapChip, MapChipFragment, Quadrant,
    RenderingArea, RenderingRect,
};
pub use matrix::{MapMatrix, MapMatrixProperties};

//! Error type shared by the map data structures

use thiserror::Error;

/// Errors raised by grid access and map data validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("position ({x}, {y}) is outside of a {width}x{height} map")]
    OutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    #[error("expected {expected} cells for a {width}x{height} map, found {found}")]
    CellCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },
    #[error("a {width}x{height} map has more cells than can be addressed")]
    TooLarge { width: u32, height: u32 },
    #[error("map is {found_width}x{found_height}, expected {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },
    #[error("{0} is not a valid rendering area")]
    InvalidRenderingArea(u8),
    #[error("chip image {0} not found")]
    MissingChipImage(u32),
    #[error("auto tile {0} not found")]
    MissingAutoTile(u32),
    #[error("no auto tile id left after {0}")]
    AutoTileIdsExhausted(u32),
    #[error("chip image {0} has not finished loading")]
    ImageNotLoaded(u32),
}

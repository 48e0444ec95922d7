//! Auto tile sets and their registration

use pico_map_core::{MapChipFragment, MapChipImage, MapError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::QuadrantShape;

/// One auto tile: a block of [`AutoTile::ROWS`] chips stacked vertically in a
/// source image, one row per [`QuadrantShape`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTile {
    pub id: u32,
    /// Id of the source image
    pub chip_id: u32,
    /// Chip column of the block
    pub x: u32,
    /// Chip row of the block's first chip
    pub y: u32,
}

impl AutoTile {
    /// Chip rows in one auto tile block
    pub const ROWS: u32 = 5;

    pub fn new(id: u32, chip_id: u32, x: u32, y: u32) -> Self {
        Self { id, chip_id, x, y }
    }

    /// Full-cell fragment of the row drawn for `shape`
    pub fn fragment(&self, shape: QuadrantShape) -> MapChipFragment {
        MapChipFragment::new(self.x, self.y + shape.row(), self.chip_id)
    }

    /// Every row of the block, top to bottom
    pub fn fragments(&self) -> Vec<MapChipFragment> {
        QuadrantShape::ALL
            .into_iter()
            .map(|shape| self.fragment(shape))
            .collect()
    }

    /// Fragment shown for this auto tile in pickers
    pub fn icon(&self) -> MapChipFragment {
        self.fragment(QuadrantShape::Outer)
    }
}

/// Produces auto tiles out of some source
pub trait AutoTileImportStrategy {
    /// Build auto tiles, numbering them from `first_id`
    fn auto_tiles(&self, first_id: u32) -> Result<Vec<AutoTile>, MapError>;
}

/// Slices a loaded image into auto tiles: one per chip column and per block of
/// five chip rows, left to right then top to bottom.
#[derive(Debug, Clone)]
pub struct DefaultAutoTileImportStrategy<'a> {
    image: &'a MapChipImage,
    chip_width: u32,
    chip_height: u32,
}

impl<'a> DefaultAutoTileImportStrategy<'a> {
    pub fn new(image: &'a MapChipImage, chip_width: u32, chip_height: u32) -> Self {
        Self {
            image,
            chip_width,
            chip_height,
        }
    }
}

impl AutoTileImportStrategy for DefaultAutoTileImportStrategy<'_> {
    fn auto_tiles(&self, first_id: u32) -> Result<Vec<AutoTile>, MapError> {
        let (width, height) = self.image.size()?;
        if self.chip_width == 0 || self.chip_height == 0 {
            return Ok(Vec::new());
        }

        let columns = width / self.chip_width;
        let blocks = height / (self.chip_height * AutoTile::ROWS);

        let mut auto_tiles = Vec::with_capacity(columns as usize * blocks as usize);
        let mut id = first_id;
        for block in 0..blocks {
            for column in 0..columns {
                if !auto_tiles.is_empty() {
                    id = id.checked_add(1).ok_or(MapError::AutoTileIdsExhausted(id))?;
                }
                auto_tiles.push(AutoTile::new(
                    id,
                    self.image.id,
                    column,
                    block * AutoTile::ROWS,
                ));
            }
        }
        Ok(auto_tiles)
    }
}

/// All auto tiles of a map, looked up by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutoTiles {
    items: Vec<AutoTile>,
}

impl AutoTiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next registered auto tile receives
    pub fn next_id(&self) -> Result<u32, MapError> {
        match self.items.iter().map(|a| a.id).max() {
            Some(last) => last
                .checked_add(1)
                .ok_or(MapError::AutoTileIdsExhausted(last)),
            None => Ok(1),
        }
    }

    /// Register an auto tile block, returning its id
    pub fn push(&mut self, chip_id: u32, x: u32, y: u32) -> Result<u32, MapError> {
        let id = self.next_id()?;
        self.items.push(AutoTile::new(id, chip_id, x, y));
        Ok(id)
    }

    /// Register every auto tile produced by `strategy`, returning how many
    pub fn import(&mut self, strategy: &impl AutoTileImportStrategy) -> Result<usize, MapError> {
        let imported = strategy.auto_tiles(self.next_id()?)?;
        let count = imported.len();
        self.items.extend(imported);
        debug!(count, total = self.items.len(), "imported auto tiles");
        Ok(count)
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_id(&self, id: u32) -> Option<&AutoTile> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Position of the auto tile in registration order
    pub fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&AutoTile> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AutoTile> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

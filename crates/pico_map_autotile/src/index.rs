//! Layout of the auto tile picker image
//!
//! The picker shows every auto tile as one chip, laid out left to right in as
//! many columns as fit the picker width. The layout converts between picker
//! pixels, picker chip positions and auto tiles.

use pico_map_core::MapChipFragment;

use crate::{AutoTile, AutoTiles};

/// One chip of the picker image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexImageTile {
    pub x: u32,
    pub y: u32,
    pub auto_tile_id: u32,
    pub fragment: MapChipFragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoTileIndexLayout {
    width: u32,
    chip_width: u32,
    chip_height: u32,
}

impl AutoTileIndexLayout {
    /// Layout for a picker `width` pixels wide
    pub fn new(width: u32, chip_width: u32, chip_height: u32) -> Self {
        Self {
            width,
            chip_width: chip_width.max(1),
            chip_height: chip_height.max(1),
        }
    }

    /// Number of chip columns, at least one
    pub fn columns(&self) -> u32 {
        (self.width / self.chip_width).max(1)
    }

    /// Pixel size of the picker image for `auto_tiles`
    pub fn size(&self, auto_tiles: &AutoTiles) -> (u32, u32) {
        let columns = self.columns();
        let rows = (auto_tiles.len() as u32).div_ceil(columns);
        (columns * self.chip_width, rows * self.chip_height)
    }

    /// Chip position under a picker pixel, clamped to the columns
    pub fn chip_position(&self, x: i32, y: i32) -> (u32, u32) {
        let column = (x.max(0) as u32 / self.chip_width).min(self.columns() - 1);
        let row = y.max(0) as u32 / self.chip_height;
        (column, row)
    }

    /// Auto tile under a picker pixel, `None` past the last one
    pub fn auto_tile_at<'a>(&self, auto_tiles: &'a AutoTiles, x: i32, y: i32) -> Option<&'a AutoTile> {
        let (column, row) = self.chip_position(x, y);
        let index = row.checked_mul(self.columns())?.checked_add(column)?;
        auto_tiles.get(usize::try_from(index).ok()?)
    }

    /// Chip position of an auto tile in the picker
    pub fn position_of(&self, auto_tiles: &AutoTiles, auto_tile_id: u32) -> Option<(u32, u32)> {
        let index = auto_tiles.position(auto_tile_id)? as u32;
        Some((index % self.columns(), index / self.columns()))
    }

    /// Chips to draw for the picker image
    pub fn index_image(&self, auto_tiles: &AutoTiles) -> Vec<IndexImageTile> {
        let columns = self.columns();
        auto_tiles
            .iter()
            .enumerate()
            .map(|(index, auto_tile)| {
                let index = index as u32;
                IndexImageTile {
                    x: index % columns,
                    y: index / columns,
                    auto_tile_id: auto_tile.id,
                    fragment: auto_tile.icon(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_tiles(count: u32) -> AutoTiles {
        let mut auto_tiles = AutoTiles::new();
        for x in 0..count {
            auto_tiles.push(2, x, 0).unwrap();
        }
        auto_tiles
    }

    #[test]
    fn test_size() {
        let layout = AutoTileIndexLayout::new(192, 32, 32);
        assert_eq!(layout.columns(), 6);
        assert_eq!(layout.size(&auto_tiles(7)), (192, 64));
        assert_eq!(layout.size(&auto_tiles(6)), (192, 32));
        assert_eq!(layout.size(&AutoTiles::new()), (192, 0));
    }

    #[test]
    fn test_pixel_to_auto_tile_and_back() {
        let layout = AutoTileIndexLayout::new(96, 32, 32);
        let auto_tiles = auto_tiles(5);

        assert_eq!(layout.chip_position(70, 40), (2, 1));
        assert_eq!(layout.chip_position(-5, 500), (0, 15));
        assert_eq!(layout.chip_position(1000, 0), (2, 0));

        let picked = layout.auto_tile_at(&auto_tiles, 40, 33).unwrap();
        assert_eq!(picked.id, 5);
        assert_eq!(layout.position_of(&auto_tiles, picked.id), Some((1, 1)));

        assert!(layout.auto_tile_at(&auto_tiles, 70, 40).is_none());
        assert_eq!(layout.position_of(&auto_tiles, 42), None);
    }

    #[test]
    fn test_far_below_the_picker_is_empty() {
        // 64 columns of 1px chips: the row index overflows once scaled
        let layout = AutoTileIndexLayout::new(64, 1, 1);
        let auto_tiles = auto_tiles(3);

        assert!(layout.auto_tile_at(&auto_tiles, 0, i32::MAX).is_none());
        assert!(layout.auto_tile_at(&auto_tiles, 63, i32::MAX / 64).is_none());
        assert_eq!(layout.auto_tile_at(&auto_tiles, 2, 0).map(|a| a.id), Some(3));
    }

    #[test]
    fn test_index_image() {
        let layout = AutoTileIndexLayout::new(64, 32, 32);
        let tiles = layout.index_image(&auto_tiles(3));

        let positions: Vec<_> = tiles.iter().map(|t| (t.x, t.y, t.auto_tile_id)).collect();
        assert_eq!(positions, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3)]);
        assert_eq!(tiles[2].fragment, MapChipFragment::new(2, 0, 2));
    }
}

//! Map state edited by a canvas and its persisted form

use pico_map_autotile::{refresh_cells, AutoTiles};
use pico_map_core::{
    ColiderMap, ColiderTypes, MapChip, MapChipsCollection, MapError, MapMatrix,
    MapMatrixProperties,
};
use serde::{Deserialize, Serialize};

use crate::EditorError;

/// A tile map: chip grid, collision grid, auto tiles and chip images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TiledMapProperties", into = "TiledMapProperties")]
pub struct TiledMap {
    chip_count_x: u32,
    chip_count_y: u32,
    chip_width: u32,
    chip_height: u32,
    map_chips: MapMatrix<MapChip>,
    coliders: ColiderMap,
    auto_tiles: AutoTiles,
    chip_images: MapChipsCollection,
}

/// Plain serialized form of a [`TiledMap`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiledMapProperties {
    pub chip_count_x: u32,
    pub chip_count_y: u32,
    pub chip_width: u32,
    pub chip_height: u32,
    pub map_chips: MapMatrixProperties<MapChip>,
    pub coliders: MapMatrixProperties<ColiderTypes>,
    #[serde(default)]
    pub auto_tiles: AutoTiles,
    #[serde(default)]
    pub chip_images: MapChipsCollection,
}

impl TiledMap {
    /// Create an empty map of `chip_count_x x chip_count_y` chips
    pub fn new(chip_count_x: u32, chip_count_y: u32, chip_width: u32, chip_height: u32) -> Self {
        Self {
            chip_count_x,
            chip_count_y,
            chip_width,
            chip_height,
            map_chips: MapMatrix::new(chip_count_x, chip_count_y, MapChip::empty()),
            coliders: ColiderMap::empty(chip_count_x, chip_count_y),
            auto_tiles: AutoTiles::new(),
            chip_images: MapChipsCollection::new(),
        }
    }

    pub fn chip_count_x(&self) -> u32 {
        self.chip_count_x
    }

    pub fn chip_count_y(&self) -> u32 {
        self.chip_count_y
    }

    pub fn chip_width(&self) -> u32 {
        self.chip_width
    }

    pub fn chip_height(&self) -> u32 {
        self.chip_height
    }

    pub fn map_chips(&self) -> &MapMatrix<MapChip> {
        &self.map_chips
    }

    pub fn coliders(&self) -> &ColiderMap {
        &self.coliders
    }

    pub fn auto_tiles(&self) -> &AutoTiles {
        &self.auto_tiles
    }

    pub fn auto_tiles_mut(&mut self) -> &mut AutoTiles {
        &mut self.auto_tiles
    }

    pub fn chip_images(&self) -> &MapChipsCollection {
        &self.chip_images
    }

    pub fn chip_images_mut(&mut self) -> &mut MapChipsCollection {
        &mut self.chip_images
    }

    pub fn put_chip(&mut self, chip: MapChip, x: i32, y: i32) -> Result<(), MapError> {
        self.map_chips.put(chip, x, y)
    }

    pub fn put_colider(&mut self, colider: ColiderTypes, x: i32, y: i32) -> Result<(), MapError> {
        self.coliders.put(colider, x, y)
    }

    /// Recompose auto tile chips among `cells`, see [`refresh_cells`]
    pub fn refresh_auto_tiles(
        &mut self,
        cells: impl IntoIterator<Item = (i32, i32)>,
    ) -> Vec<(i32, i32, MapChip)> {
        refresh_cells(&mut self.map_chips, &self.auto_tiles, cells)
    }

    /// Chip position under a pixel, clamped to the map
    pub fn chip_position_from_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        let clamp = |value: f32, size: u32, count: u32| {
            let max = count.saturating_sub(1) as i32;
            ((value / size.max(1) as f32).floor() as i32).clamp(0, max)
        };
        (
            clamp(x, self.chip_width, self.chip_count_x),
            clamp(y, self.chip_height, self.chip_count_y),
        )
    }

    pub fn to_object(&self) -> TiledMapProperties {
        TiledMapProperties {
            chip_count_x: self.chip_count_x,
            chip_count_y: self.chip_count_y,
            chip_width: self.chip_width,
            chip_height: self.chip_height,
            map_chips: self.map_chips.to_object(),
            coliders: self.coliders.to_object(),
            auto_tiles: self.auto_tiles.clone(),
            chip_images: self.chip_images.clone(),
        }
    }

    /// Rebuild a map, checking dimensions and that every chip image and auto
    /// tile referenced by a cell is registered.
    ///
    /// Chip images come back unloaded.
    pub fn from_object(properties: TiledMapProperties) -> Result<Self, MapError> {
        let map_chips = MapMatrix::from_object(properties.map_chips)?;
        let coliders = MapMatrix::from_object(properties.coliders)?;

        for (width, height) in [
            (map_chips.width(), map_chips.height()),
            (coliders.width(), coliders.height()),
        ] {
            if (width, height) != (properties.chip_count_x, properties.chip_count_y) {
                return Err(MapError::DimensionMismatch {
                    width: properties.chip_count_x,
                    height: properties.chip_count_y,
                    found_width: width,
                    found_height: height,
                });
            }
        }

        let chip_images = properties.chip_images;
        let auto_tiles = properties.auto_tiles;

        if let Some(auto_tile) = auto_tiles
            .iter()
            .find(|auto_tile| !chip_images.contains(auto_tile.chip_id))
        {
            return Err(MapError::MissingChipImage(auto_tile.chip_id));
        }

        for chip in map_chips.cells() {
            if let Some(fragment) = chip
                .items()
                .iter()
                .find(|fragment| !chip_images.contains(fragment.chip_id()))
            {
                return Err(MapError::MissingChipImage(fragment.chip_id()));
            }
            if let Some(auto_tile_id) = chip.auto_tile_id() {
                if auto_tiles.from_id(auto_tile_id).is_none() {
                    return Err(MapError::MissingAutoTile(auto_tile_id));
                }
            }
        }

        Ok(Self {
            chip_count_x: properties.chip_count_x,
            chip_count_y: properties.chip_count_y,
            chip_width: properties.chip_width,
            chip_height: properties.chip_height,
            map_chips,
            coliders,
            auto_tiles,
            chip_images,
        })
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<TiledMapProperties> for TiledMap {
    type Error = MapError;

    fn try_from(properties: TiledMapProperties) -> Result<Self, Self::Error> {
        Self::from_object(properties)
    }
}

impl From<TiledMap> for TiledMapProperties {
    fn from(map: TiledMap) -> Self {
        TiledMapProperties {
            chip_count_x: map.chip_count_x,
            chip_count_y: map.chip_count_y,
            chip_width: map.chip_width,
            chip_height: map.chip_height,
            map_chips: map.map_chips.to_object(),
            coliders: map.coliders.to_object(),
            auto_tiles: map.auto_tiles,
            chip_images: map.chip_images,
        }
    }
}

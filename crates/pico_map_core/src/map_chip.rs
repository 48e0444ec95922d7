//! Map chip types: fragments, composite chips and auto-tile metadata
//!
//! A [`MapChipFragment`] points at one chip of a source image and says which
//! quadrants of the destination cell it covers. A [`MapChip`] stacks fragments
//! to form the content of one cell.
//!
//! ```text
//! |<- 1chip ->|
//! *-----*-----* ---
//! |  1  |  2  |  ^
//! *-----*-----* 1chip
//! |  4  |  8  |  v
//! *-----*-----* ---
//! ```

use serde::{Deserialize, Serialize};

use crate::MapError;

/// One quarter of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Bit of this quadrant in a rendering area mask
    pub fn bit(self) -> u8 {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomLeft => 4,
            Quadrant::BottomRight => 8,
        }
    }
}

/// The part of a cell a fragment is drawn into.
///
/// Only single quadrants, halves and the full cell are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum RenderingArea {
    TopLeft = 1,
    TopRight = 2,
    Top = 3,
    BottomLeft = 4,
    Left = 5,
    BottomRight = 8,
    Right = 10,
    Bottom = 12,
    #[default]
    Full = 15,
}

/// Source and destination rectangle of a rendering area, in pixels.
///
/// `x`/`y` are relative to the chip's top-left corner in the source image,
/// `dest_offset_x`/`dest_offset_y` relative to the destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub dest_offset_x: u32,
    pub dest_offset_y: u32,
}

impl RenderingArea {
    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn contains(self, quadrant: Quadrant) -> bool {
        self.bits() & quadrant.bit() != 0
    }

    /// Quadrants covered by this area, in `Quadrant::ALL` order
    pub fn quadrants(self) -> impl Iterator<Item = Quadrant> {
        Quadrant::ALL.into_iter().filter(move |q| self.contains(*q))
    }

    /// Area covering exactly the given quadrants, if it is representable
    pub fn from_quadrants(quadrants: &[Quadrant]) -> Option<Self> {
        let bits = quadrants.iter().fold(0u8, |acc, q| acc | q.bit());
        Self::try_from(bits).ok()
    }

    /// Rectangle of this area inside a `chip_width x chip_height` chip
    pub fn rect(self, chip_width: u32, chip_height: u32) -> RenderingRect {
        let half_width = (chip_width + 1) / 2;
        let half_height = (chip_height + 1) / 2;

        let (x, y, width, height) = match self {
            RenderingArea::Full => (0, 0, chip_width, chip_height),
            RenderingArea::TopLeft => (0, 0, half_width, half_height),
            RenderingArea::TopRight => (half_width, 0, half_width, half_height),
            RenderingArea::Top => (0, 0, chip_width, half_height),
            RenderingArea::BottomLeft => (0, half_height, half_width, half_height),
            RenderingArea::Left => (0, 0, half_width, chip_height),
            RenderingArea::BottomRight => (half_width, half_height, half_width, half_height),
            RenderingArea::Right => (half_width, 0, half_width, chip_height),
            RenderingArea::Bottom => (0, half_height, chip_width, half_height),
        };

        RenderingRect {
            x,
            y,
            width,
            height,
            dest_offset_x: x,
            dest_offset_y: y,
        }
    }
}

impl TryFrom<u8> for RenderingArea {
    type Error = MapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RenderingArea::TopLeft),
            2 => Ok(RenderingArea::TopRight),
            3 => Ok(RenderingArea::Top),
            4 => Ok(RenderingArea::BottomLeft),
            5 => Ok(RenderingArea::Left),
            8 => Ok(RenderingArea::BottomRight),
            10 => Ok(RenderingArea::Right),
            12 => Ok(RenderingArea::Bottom),
            15 => Ok(RenderingArea::Full),
            other => Err(MapError::InvalidRenderingArea(other)),
        }
    }
}

impl From<RenderingArea> for u8 {
    fn from(area: RenderingArea) -> Self {
        area.bits()
    }
}

/// Attribute overrides for [`MapChipFragment::with_parameter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentParameters {
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub rendering_area: Option<RenderingArea>,
}

/// A reference to one chip of a source image plus the area it is drawn into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapChipFragment {
    x: u32,
    y: u32,
    chip_id: u32,
    #[serde(default)]
    rendering_area: RenderingArea,
}

impl MapChipFragment {
    /// Create a fragment covering the full cell
    pub fn new(x: u32, y: u32, chip_id: u32) -> Self {
        Self {
            x,
            y,
            chip_id,
            rendering_area: RenderingArea::Full,
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// Id of the source image
    pub fn chip_id(&self) -> u32 {
        self.chip_id
    }

    pub fn rendering_area(&self) -> RenderingArea {
        self.rendering_area
    }

    /// Key identifying the referenced chip, ignoring the rendering area
    pub fn identify_key(&self) -> String {
        format!("{},{},{}", self.x, self.y, self.chip_id)
    }

    /// Check whether both fragments reference the same chip
    pub fn compare(&self, other: &MapChipFragment) -> bool {
        self.x == other.x && self.y == other.y && self.chip_id == other.chip_id
    }

    /// Override the given attributes
    pub fn with_parameter(mut self, parameters: FragmentParameters) -> Self {
        if let Some(x) = parameters.x {
            self.x = x;
        }
        if let Some(y) = parameters.y {
            self.y = y;
        }
        if let Some(rendering_area) = parameters.rendering_area {
            self.rendering_area = rendering_area;
        }
        self
    }

    /// Set the rendering area
    pub fn with_rendering_area(mut self, rendering_area: RenderingArea) -> Self {
        self.rendering_area = rendering_area;
        self
    }

    /// Source rectangle in the chip image and destination offset in the cell
    pub fn source_rect(&self, chip_width: u32, chip_height: u32) -> RenderingRect {
        let mut rect = self.rendering_area.rect(chip_width, chip_height);
        rect.x += self.x * chip_width;
        rect.y += self.y * chip_height;
        rect
    }
}

/// Whether the orthogonal neighbors belong to the same auto tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

/// Whether the diagonal neighbors belong to the same auto tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cross {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

/// Auto-tile payload of a composed chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTileAttributes {
    pub auto_tile_id: u32,
    #[serde(default)]
    pub boundary: Boundary,
    #[serde(default)]
    pub cross: Cross,
}

/// Paintable content of one cell: an ordered stack of fragments.
///
/// An empty chip means "no content". Chips composed by the auto-tile engine
/// carry [`AutoTileAttributes`] so neighbors can be recomputed later.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapChip {
    #[serde(default)]
    items: Vec<MapChipFragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto_tile: Option<AutoTileAttributes>,
}

impl MapChip {
    pub fn new(items: Vec<MapChipFragment>) -> Self {
        Self {
            items,
            auto_tile: None,
        }
    }

    /// A chip with no content
    pub fn empty() -> Self {
        Self::default()
    }

    /// A chip composed for an auto tile
    pub fn auto_tile(items: Vec<MapChipFragment>, attributes: AutoTileAttributes) -> Self {
        Self {
            items,
            auto_tile: Some(attributes),
        }
    }

    pub fn items(&self) -> &[MapChipFragment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn auto_tile_attributes(&self) -> Option<&AutoTileAttributes> {
        self.auto_tile.as_ref()
    }

    /// Id of the auto tile this chip was composed from
    pub fn auto_tile_id(&self) -> Option<u32> {
        self.auto_tile.map(|attributes| attributes.auto_tile_id)
    }

    pub fn push(&mut self, fragment: MapChipFragment) {
        self.items.push(fragment);
    }

    /// Remove every fragment and the auto-tile payload
    pub fn clear(&mut self) {
        self.items.clear();
        self.auto_tile = None;
    }

    /// Member keys joined with `|`, order sensitive
    pub fn identify_key(&self) -> String {
        self.items
            .iter()
            .map(MapChipFragment::identify_key)
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn compare(&self, other: &MapChip) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.compare(b))
    }
}

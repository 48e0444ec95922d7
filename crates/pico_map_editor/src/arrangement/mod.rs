//! Arrangements: what gets painted at the cells a brush picked
//!
//! An arrangement is configured once with [`ArrangementContent`] and then
//! resolves brush positions to [`ArrangementPaint`]s. Resolution is pure: the
//! canvas writes the results into the map.

mod auto_tile;
mod colider;
mod default;
mod erase;

pub use auto_tile::AutoTileArrangement;
pub use colider::ColiderArrangement;
pub use default::DefaultArrangement;
pub use erase::EraseArrangement;

use pico_map_core::{ColiderTypes, MapChip, MapChipFragment};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::brush::BrushPaint;
use crate::project::TiledMap;
use crate::EditorError;

/// Content handed to an arrangement by the selection UI
#[derive(Debug, Clone, PartialEq)]
pub enum ArrangementContent {
    Fragments(Vec<MapChipFragment>),
    AutoTile(u32),
    Colider(ColiderTypes),
    None,
}

impl ArrangementContent {
    pub fn describe(&self) -> String {
        match self {
            ArrangementContent::Fragments(fragments) => format!("{} fragments", fragments.len()),
            ArrangementContent::AutoTile(id) => format!("auto tile {id}"),
            ArrangementContent::Colider(colider) => format!("colider {}", colider.name()),
            ArrangementContent::None => "nothing".to_string(),
        }
    }
}

/// Value resolved for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum PaintItem {
    MapChip(MapChip),
    Colider(ColiderTypes),
    /// Clears whatever the cell holds in the current edit mode
    Empty,
}

/// A resolved cell
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementPaint {
    pub x: i32,
    pub y: i32,
    pub item: PaintItem,
}

impl ArrangementPaint {
    pub fn new(x: i32, y: i32, item: PaintItem) -> Self {
        Self { x, y, item }
    }
}

/// Available arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrangementKind {
    #[serde(rename = "DefaultArrangement")]
    Default,
    #[serde(rename = "AutoTileArrangement")]
    AutoTile,
    #[serde(rename = "ColiderArrangement")]
    Colider,
    #[serde(rename = "DefaultEraseArrangement")]
    Erase,
}

impl ArrangementKind {
    pub const ALL: [ArrangementKind; 4] = [
        ArrangementKind::Default,
        ArrangementKind::AutoTile,
        ArrangementKind::Colider,
        ArrangementKind::Erase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArrangementKind::Default => "DefaultArrangement",
            ArrangementKind::AutoTile => "AutoTileArrangement",
            ArrangementKind::Colider => "ColiderArrangement",
            ArrangementKind::Erase => "DefaultEraseArrangement",
        }
    }

    /// Create an unconfigured arrangement of this kind
    pub fn create(self) -> Arrangement {
        match self {
            ArrangementKind::Default => Arrangement::Default(DefaultArrangement::new()),
            ArrangementKind::AutoTile => Arrangement::AutoTile(AutoTileArrangement::new()),
            ArrangementKind::Colider => Arrangement::Colider(ColiderArrangement::new()),
            ArrangementKind::Erase => Arrangement::Erase(EraseArrangement::new()),
        }
    }

    /// Whether `content` is the shape this arrangement is configured with
    pub fn accepts(&self, content: &ArrangementContent) -> bool {
        match self {
            ArrangementKind::Default => matches!(content, ArrangementContent::Fragments(_)),
            ArrangementKind::AutoTile => matches!(content, ArrangementContent::AutoTile(_)),
            ArrangementKind::Colider => matches!(content, ArrangementContent::Colider(_)),
            ArrangementKind::Erase => true,
        }
    }
}

impl fmt::Display for ArrangementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrangementKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrangementKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EditorError::UnknownArrangement(s.to_string()))
    }
}

/// An arrangement of any kind
#[derive(Debug, Clone)]
pub enum Arrangement {
    Default(DefaultArrangement),
    AutoTile(AutoTileArrangement),
    Colider(ColiderArrangement),
    Erase(EraseArrangement),
}

impl Arrangement {
    pub fn kind(&self) -> ArrangementKind {
        match self {
            Arrangement::Default(_) => ArrangementKind::Default,
            Arrangement::AutoTile(_) => ArrangementKind::AutoTile,
            Arrangement::Colider(_) => ArrangementKind::Colider,
            Arrangement::Erase(_) => ArrangementKind::Erase,
        }
    }

    pub fn set_content(&mut self, content: ArrangementContent) -> Result<(), EditorError> {
        match self {
            Arrangement::Default(arrangement) => arrangement.set_content(content),
            Arrangement::AutoTile(arrangement) => arrangement.set_content(content),
            Arrangement::Colider(arrangement) => arrangement.set_content(content),
            Arrangement::Erase(arrangement) => arrangement.set_content(content),
        }
    }

    pub fn is_configured(&self) -> bool {
        match self {
            Arrangement::Default(arrangement) => arrangement.is_configured(),
            Arrangement::AutoTile(arrangement) => arrangement.is_configured(),
            Arrangement::Colider(arrangement) => arrangement.is_configured(),
            Arrangement::Erase(_) => true,
        }
    }

    /// Resolve brush positions into paints, without touching `map`
    pub fn apply(
        &self,
        paints: &[BrushPaint],
        map: &TiledMap,
    ) -> Result<Vec<ArrangementPaint>, EditorError> {
        match self {
            Arrangement::Default(arrangement) => arrangement.apply(paints),
            Arrangement::AutoTile(arrangement) => arrangement.apply(paints, map),
            Arrangement::Colider(arrangement) => arrangement.apply(paints),
            Arrangement::Erase(arrangement) => Ok(arrangement.apply(paints)),
        }
    }
}

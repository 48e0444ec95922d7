//! Collision flags painted per cell

use serde::{Deserialize, Serialize};

use crate::MapMatrix;

/// Collision state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColiderTypes {
    Colider,
    #[default]
    None,
}

impl ColiderTypes {
    /// Check if this cell blocks movement
    pub fn has_collision(&self) -> bool {
        matches!(self, ColiderTypes::Colider)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColiderTypes::Colider => "colider",
            ColiderTypes::None => "none",
        }
    }
}

/// Collision grid of a map
pub type ColiderMap = MapMatrix<ColiderTypes>;

impl ColiderMap {
    /// Create a collision grid with every cell set to [`ColiderTypes::None`]
    pub fn empty(width: u32, height: u32) -> Self {
        MapMatrix::new(width, height, ColiderTypes::None)
    }
}

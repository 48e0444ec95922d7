use pico_map_autotile::{compose_at, is_same_auto_tile};
use pico_map_core::MapError;
use std::collections::HashSet;

use super::{ArrangementContent, ArrangementPaint, PaintItem};
use crate::brush::BrushPaint;
use crate::project::TiledMap;
use crate::EditorError;

/// Paints an auto tile, composing each chip from its neighbors.
///
/// The painted cells count as occupied while composing, so a stroke joins up
/// with itself before it is written to the map.
#[derive(Debug, Clone, Default)]
pub struct AutoTileArrangement {
    auto_tile_id: Option<u32>,
}

impl AutoTileArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_tile_id(&self) -> Option<u32> {
        self.auto_tile_id
    }

    pub fn is_configured(&self) -> bool {
        self.auto_tile_id.is_some()
    }

    pub fn set_content(&mut self, content: ArrangementContent) -> Result<(), EditorError> {
        match content {
            ArrangementContent::AutoTile(id) => {
                self.auto_tile_id = Some(id);
                Ok(())
            }
            other => Err(EditorError::InvalidContent(format!(
                "AutoTileArrangement takes an auto tile id, got {}",
                other.describe()
            ))),
        }
    }

    pub fn apply(
        &self,
        paints: &[BrushPaint],
        map: &TiledMap,
    ) -> Result<Vec<ArrangementPaint>, EditorError> {
        let auto_tile_id = self
            .auto_tile_id
            .ok_or(EditorError::Uninitialized("AutoTileArrangement content"))?;
        let auto_tile = map
            .auto_tiles()
            .from_id(auto_tile_id)
            .ok_or(MapError::MissingAutoTile(auto_tile_id))?;

        let markers: HashSet<(i32, i32)> = paints.iter().map(|p| (p.x, p.y)).collect();
        let occupied = |x: i32, y: i32| {
            markers.contains(&(x, y)) || is_same_auto_tile(map.map_chips(), auto_tile_id, x, y)
        };

        Ok(paints
            .iter()
            .map(|paint| {
                let chip = compose_at(auto_tile, paint.x, paint.y, &occupied);
                ArrangementPaint::new(paint.x, paint.y, PaintItem::MapChip(chip))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_map_autotile::{compose, Neighborhood};
    use pico_map_core::{MapChip, RenderingArea};

    fn setup() -> (TiledMap, AutoTileArrangement) {
        let mut map = TiledMap::new(5, 5, 32, 32);
        let id = map.auto_tiles_mut().push(2, 0, 0).unwrap();
        let mut arrangement = AutoTileArrangement::new();
        arrangement
            .set_content(ArrangementContent::AutoTile(id))
            .unwrap();
        (map, arrangement)
    }

    fn chip(paint: &ArrangementPaint) -> &MapChip {
        match &paint.item {
            PaintItem::MapChip(chip) => chip,
            other => panic!("expected a map chip, got {other:?}"),
        }
    }

    #[test]
    fn test_single_cell_is_isolated() {
        let (map, arrangement) = setup();
        let paints = arrangement.apply(&[BrushPaint::new(2, 2)], &map).unwrap();

        let chip = chip(&paints[0]);
        assert_eq!(chip.auto_tile_id(), Some(1));
        assert_eq!(chip.len(), 1);
        assert_eq!(chip.items()[0].rendering_area(), RenderingArea::Full);
        assert_eq!(chip.items()[0].y(), 0);
    }

    #[test]
    fn test_stroke_cells_see_each_other() {
        let (map, arrangement) = setup();
        let paints = arrangement
            .apply(&[BrushPaint::new(1, 2), BrushPaint::new(2, 2)], &map)
            .unwrap();

        let left = chip(&paints[0]).auto_tile_attributes().unwrap();
        let right = chip(&paints[1]).auto_tile_attributes().unwrap();
        assert!(left.boundary.right && !left.boundary.left);
        assert!(right.boundary.left && !right.boundary.right);
    }

    #[test]
    fn test_existing_cells_count_as_neighbors() {
        let (mut map, arrangement) = setup();
        let auto_tile = map.auto_tiles().from_id(1).unwrap().clone();
        map.put_chip(compose(&auto_tile, Neighborhood::default()), 2, 1)
            .unwrap();

        let paints = arrangement.apply(&[BrushPaint::new(2, 2)], &map).unwrap();
        let attributes = chip(&paints[0]).auto_tile_attributes().unwrap();
        assert!(attributes.boundary.top);
        assert!(!attributes.boundary.bottom);

        // apply never writes the map
        assert!(map.map_chips().get(2, 2).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_auto_tile_is_a_missing_reference() {
        let (map, mut arrangement) = setup();
        arrangement
            .set_content(ArrangementContent::AutoTile(9))
            .unwrap();

        assert!(matches!(
            arrangement.apply(&[BrushPaint::new(0, 0)], &map),
            Err(EditorError::Map(MapError::MissingAutoTile(9)))
        ));
    }
}

use pico_map_core::ColiderTypes;

use super::{ArrangementContent, ArrangementPaint, PaintItem};
use crate::brush::BrushPaint;
use crate::EditorError;

/// Paints a collision value
#[derive(Debug, Clone, Default)]
pub struct ColiderArrangement {
    colider: Option<ColiderTypes>,
}

impl ColiderArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colider(&self) -> Option<ColiderTypes> {
        self.colider
    }

    pub fn is_configured(&self) -> bool {
        self.colider.is_some()
    }

    pub fn set_content(&mut self, content: ArrangementContent) -> Result<(), EditorError> {
        match content {
            ArrangementContent::Colider(colider) => {
                self.colider = Some(colider);
                Ok(())
            }
            other => Err(EditorError::InvalidContent(format!(
                "ColiderArrangement takes a colider type, got {}",
                other.describe()
            ))),
        }
    }

    pub fn apply(&self, paints: &[BrushPaint]) -> Result<Vec<ArrangementPaint>, EditorError> {
        let colider = self
            .colider
            .ok_or(EditorError::Uninitialized("ColiderArrangement content"))?;

        Ok(paints
            .iter()
            .map(|paint| ArrangementPaint::new(paint.x, paint.y, PaintItem::Colider(colider)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paints_configured_value() {
        let mut arrangement = ColiderArrangement::new();
        arrangement
            .set_content(ArrangementContent::Colider(ColiderTypes::Colider))
            .unwrap();

        let paints = arrangement
            .apply(&[BrushPaint::new(1, 1), BrushPaint::new(2, 1)])
            .unwrap();
        assert!(paints
            .iter()
            .all(|paint| paint.item == PaintItem::Colider(ColiderTypes::Colider)));
    }

    #[test]
    fn test_rejects_auto_tile_content() {
        let mut arrangement = ColiderArrangement::new();
        assert!(matches!(
            arrangement.set_content(ArrangementContent::AutoTile(1)),
            Err(EditorError::InvalidContent(_))
        ));
    }
}

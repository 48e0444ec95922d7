use super::{ArrangementContent, ArrangementPaint, PaintItem};
use crate::brush::BrushPaint;
use crate::EditorError;

/// Clears painted cells; content is ignored
#[derive(Debug, Clone, Default)]
pub struct EraseArrangement;

impl EraseArrangement {
    pub fn new() -> Self {
        Self
    }

    pub fn set_content(&mut self, _content: ArrangementContent) -> Result<(), EditorError> {
        Ok(())
    }

    pub fn apply(&self, paints: &[BrushPaint]) -> Vec<ArrangementPaint> {
        paints
            .iter()
            .map(|paint| ArrangementPaint::new(paint.x, paint.y, PaintItem::Empty))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_map_core::MapChipFragment;

    #[test]
    fn test_erase_ignores_content() {
        let mut arrangement = EraseArrangement::new();
        arrangement
            .set_content(ArrangementContent::Fragments(vec![MapChipFragment::new(0, 0, 1)]))
            .unwrap();

        let paints = arrangement.apply(&[BrushPaint::new(3, 2)]);
        assert_eq!(paints, vec![ArrangementPaint::new(3, 2, PaintItem::Empty)]);
    }
}

use pico_map_core::{MapChip, MapChipFragment};

use super::{ArrangementContent, ArrangementPaint, PaintItem};
use crate::brush::BrushPaint;
use crate::EditorError;

/// Paints one selected fragment as a plain chip
#[derive(Debug, Clone, Default)]
pub struct DefaultArrangement {
    fragment: Option<MapChipFragment>,
}

impl DefaultArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragment(&self) -> Option<&MapChipFragment> {
        self.fragment.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.fragment.is_some()
    }

    /// Accepts exactly one fragment
    pub fn set_content(&mut self, content: ArrangementContent) -> Result<(), EditorError> {
        match content {
            ArrangementContent::Fragments(fragments) if fragments.len() == 1 => {
                self.fragment = fragments.into_iter().next();
                Ok(())
            }
            other => Err(EditorError::InvalidContent(format!(
                "DefaultArrangement takes exactly one fragment, got {}",
                other.describe()
            ))),
        }
    }

    pub fn apply(&self, paints: &[BrushPaint]) -> Result<Vec<ArrangementPaint>, EditorError> {
        let fragment = self
            .fragment
            .as_ref()
            .ok_or(EditorError::Uninitialized("DefaultArrangement content"))?;

        Ok(paints
            .iter()
            .map(|paint| {
                ArrangementPaint::new(
                    paint.x,
                    paint.y,
                    PaintItem::MapChip(MapChip::new(vec![fragment.clone()])),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paints_selected_fragment() {
        let mut arrangement = DefaultArrangement::new();
        arrangement
            .set_content(ArrangementContent::Fragments(vec![MapChipFragment::new(2, 3, 1)]))
            .unwrap();

        let paints = arrangement
            .apply(&[BrushPaint::new(0, 0), BrushPaint::new(4, 1)])
            .unwrap();

        assert_eq!(paints.len(), 2);
        assert_eq!((paints[1].x, paints[1].y), (4, 1));
        let PaintItem::MapChip(chip) = &paints[1].item else {
            panic!("expected a map chip, got {:?}", paints[1].item);
        };
        assert_eq!(chip.items(), &[MapChipFragment::new(2, 3, 1)]);
        assert!(chip.auto_tile_attributes().is_none());
    }

    #[test]
    fn test_rejects_multiple_fragments() {
        let mut arrangement = DefaultArrangement::new();
        let result = arrangement.set_content(ArrangementContent::Fragments(vec![
            MapChipFragment::new(0, 0, 1),
            MapChipFragment::new(1, 0, 1),
        ]));

        assert!(matches!(result, Err(EditorError::InvalidContent(_))));
        assert!(!arrangement.is_configured());
        assert!(matches!(
            arrangement.apply(&[BrushPaint::new(0, 0)]),
            Err(EditorError::Uninitialized(_))
        ));
    }

    #[test]
    fn test_rejects_empty_selection() {
        let mut arrangement = DefaultArrangement::new();
        assert!(arrangement
            .set_content(ArrangementContent::Fragments(Vec::new()))
            .is_err());
    }
}

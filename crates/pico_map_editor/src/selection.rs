//! Selection events sent from pickers and toolbars to the canvas

use pico_map_autotile::AutoTileIndexLayout;
use pico_map_core::{ColiderTypes, MapChipFragment};
use std::collections::VecDeque;

use crate::arrangement::ArrangementKind;
use crate::brush::BrushKind;
use crate::canvas::EditMode;
use crate::project::TiledMap;

/// A user selection the canvas reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// Fragments picked from a chip image
    MapChipSelected(Vec<MapChipFragment>),
    AutoTileSelected { id: u32 },
    ColiderSelected(ColiderTypes),
    BrushSelected(BrushKind),
    ArrangementSelected(ArrangementKind),
    ModeSelected(EditMode),
}

impl SelectionEvent {
    /// Resolve a click on the auto tile index image into a selection
    pub fn auto_tile_at(
        layout: &AutoTileIndexLayout,
        map: &TiledMap,
        x: i32,
        y: i32,
    ) -> Option<SelectionEvent> {
        layout
            .auto_tile_at(map.auto_tiles(), x, y)
            .map(|auto_tile| SelectionEvent::AutoTileSelected { id: auto_tile.id })
    }
}

/// FIFO of pending selection events
#[derive(Debug, Clone, Default)]
pub struct EditorEvents {
    queue: VecDeque<SelectionEvent>,
}

impl EditorEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, event: SelectionEvent) {
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<SelectionEvent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_fifo() {
        let mut events = EditorEvents::new();
        events.send(SelectionEvent::BrushSelected(BrushKind::Rectangle));
        events.send(SelectionEvent::ColiderSelected(ColiderTypes::Colider));

        assert_eq!(events.len(), 2);
        assert_eq!(
            events.pop(),
            Some(SelectionEvent::BrushSelected(BrushKind::Rectangle))
        );
        assert_eq!(
            events.pop(),
            Some(SelectionEvent::ColiderSelected(ColiderTypes::Colider))
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_auto_tile_from_index_click() {
        let mut map = TiledMap::new(4, 4, 32, 32);
        for column in 0..3 {
            map.auto_tiles_mut().push(2, column, 0).unwrap();
        }
        // two columns per row
        let layout = AutoTileIndexLayout::new(64, 32, 32);

        assert_eq!(
            SelectionEvent::auto_tile_at(&layout, &map, 5, 40),
            Some(SelectionEvent::AutoTileSelected { id: 3 })
        );
        assert_eq!(SelectionEvent::auto_tile_at(&layout, &map, 40, 40), None);
    }
}

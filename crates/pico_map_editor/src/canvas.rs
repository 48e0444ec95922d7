//! The map canvas: pointer input in, paints out
//!
//! A [`MapCanvas`] routes pointer events through the active brush and
//! arrangement. Moves produce preview paints. Releasing the pointer writes
//! the paints into the project's map, recomposes the auto tiles around them
//! and reports everything that changed as committed paints.
//!
//! Canvases are created through [`MapCanvasBuilder`], which refuses to build
//! until a project is set and its chip images are loaded.

use pico_map_autotile::affected_cells;
use pico_map_core::{ColiderTypes, MapChip, MapChipFragment, MapError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::arrangement::{Arrangement, ArrangementContent, ArrangementKind, ArrangementPaint, PaintItem};
use crate::brush::{Brush, BrushKind, BrushPaint};
use crate::project::{Project, TiledMap};
use crate::render;
use crate::selection::{EditorEvents, SelectionEvent};
use crate::settings::EditorSettings;
use crate::EditorError;

/// Which grid the canvas edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    MapChip,
    Colider,
}

impl EditMode {
    pub fn name(&self) -> &'static str {
        match self {
            EditMode::MapChip => "MapChip",
            EditMode::Colider => "Colider",
        }
    }

    /// Whether `kind` can fill this mode's arrangement slot
    pub fn allows(&self, kind: ArrangementKind) -> bool {
        match self {
            EditMode::MapChip => matches!(
                kind,
                ArrangementKind::Default | ArrangementKind::AutoTile | ArrangementKind::Erase
            ),
            EditMode::Colider => matches!(kind, ArrangementKind::Colider | ArrangementKind::Erase),
        }
    }

    /// Arrangement a fresh canvas uses in this mode
    pub fn default_arrangement(&self) -> ArrangementKind {
        match self {
            EditMode::MapChip => ArrangementKind::Default,
            EditMode::Colider => ArrangementKind::Colider,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintTarget {
    /// Drawn over the map while dragging, not stored
    Preview,
    /// Written to the map
    Committed,
}

/// A cell to redraw
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasPaint {
    pub target: PaintTarget,
    pub x: i32,
    pub y: i32,
    pub item: PaintItem,
}

impl CanvasPaint {
    pub fn new(target: PaintTarget, x: i32, y: i32, item: PaintItem) -> Self {
        Self { target, x, y, item }
    }
}

/// Collects what a [`MapCanvas`] needs before it can take input
#[derive(Debug)]
pub struct MapCanvasBuilder {
    project: Option<Project>,
    brush: BrushKind,
    arrangement: Option<ArrangementKind>,
    /// Arrangement from the settings, used only when the mode allows it
    preferred_arrangement: Option<ArrangementKind>,
    mode: EditMode,
}

impl Default for MapCanvasBuilder {
    fn default() -> Self {
        Self {
            project: None,
            brush: BrushKind::Pen,
            arrangement: None,
            preferred_arrangement: None,
            mode: EditMode::MapChip,
        }
    }
}

impl MapCanvasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn brush(mut self, brush: BrushKind) -> Self {
        self.brush = brush;
        self
    }

    pub fn arrangement(mut self, arrangement: ArrangementKind) -> Self {
        self.arrangement = Some(arrangement);
        self
    }

    pub fn mode(mut self, mode: EditMode) -> Self {
        self.mode = mode;
        self
    }

    /// Take the default brush and arrangement from the settings.
    ///
    /// A settings arrangement the mode does not allow falls back to the mode's
    /// default; one set with [`Self::arrangement`] is rejected instead.
    pub fn settings(mut self, settings: &EditorSettings) -> Self {
        self.preferred_arrangement = Some(settings.default_arrangement);
        self.brush(settings.default_brush)
    }

    pub fn build(self) -> Result<MapCanvas, EditorError> {
        let project = self.project.ok_or(EditorError::Uninitialized("project"))?;

        let pending = project.tiled_map().chip_images().pending();
        if !pending.is_empty() {
            return Err(EditorError::ImagesNotReady(pending));
        }

        let selected_colider = ColiderTypes::Colider;
        let mut colider_arrangement = ArrangementKind::Colider.create();
        colider_arrangement.set_content(ArrangementContent::Colider(selected_colider))?;

        let mut canvas = MapCanvas {
            project,
            mode: self.mode,
            brush: self.brush.create(),
            map_arrangement: ArrangementKind::Default.create(),
            colider_arrangement,
            selected_fragments: Vec::new(),
            selected_auto_tile: None,
            selected_colider,
            last_position: None,
        };
        let arrangement = self.arrangement.unwrap_or_else(|| {
            self.preferred_arrangement
                .filter(|kind| self.mode.allows(*kind))
                .unwrap_or(self.mode.default_arrangement())
        });
        canvas.set_arrangement(arrangement)?;

        debug!(
            project = canvas.project.id(),
            mode = %canvas.mode,
            brush = %canvas.brush.kind(),
            "map canvas ready"
        );
        Ok(canvas)
    }
}

/// Editing surface over a project
#[derive(Debug)]
pub struct MapCanvas {
    project: Project,
    mode: EditMode,
    brush: Brush,
    map_arrangement: Arrangement,
    colider_arrangement: Arrangement,
    selected_fragments: Vec<MapChipFragment>,
    selected_auto_tile: Option<u32>,
    selected_colider: ColiderTypes,
    last_position: Option<(i32, i32)>,
}

impl MapCanvas {
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    pub fn tiled_map(&self) -> &TiledMap {
        self.project.tiled_map()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Arrangement of the current mode
    pub fn arrangement(&self) -> &Arrangement {
        match self.mode {
            EditMode::MapChip => &self.map_arrangement,
            EditMode::Colider => &self.colider_arrangement,
        }
    }

    fn arrangement_mut(&mut self) -> &mut Arrangement {
        match self.mode {
            EditMode::MapChip => &mut self.map_arrangement,
            EditMode::Colider => &mut self.colider_arrangement,
        }
    }

    pub fn selected_fragments(&self) -> &[MapChipFragment] {
        &self.selected_fragments
    }

    pub fn selected_auto_tile(&self) -> Option<u32> {
        self.selected_auto_tile
    }

    pub fn selected_colider(&self) -> ColiderTypes {
        self.selected_colider
    }

    /// Switch the edited grid; an unfinished gesture is dropped
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            self.cancel();
            self.mode = mode;
            debug!(%mode, arrangement = %self.arrangement().kind(), "edit mode changed");
        }
    }

    /// Replace the brush; an unfinished gesture is dropped
    pub fn set_brush(&mut self, kind: BrushKind) {
        self.last_position = None;
        self.brush = kind.create();
        debug!(brush = %kind, "brush changed");
    }

    /// Put a fresh arrangement in the current mode's slot, configured with the
    /// current selection when it fits.
    pub fn set_arrangement(&mut self, kind: ArrangementKind) -> Result<(), EditorError> {
        if !self.mode.allows(kind) {
            return Err(EditorError::UnsupportedArrangement {
                arrangement: kind.name(),
                mode: self.mode.name(),
            });
        }

        let mut arrangement = kind.create();
        if let Some(content) = self.selection_content(kind) {
            if let Err(err) = arrangement.set_content(content) {
                debug!(arrangement = %kind, %err, "selection does not fit, left unconfigured");
            }
        }
        *self.arrangement_mut() = arrangement;
        debug!(arrangement = %kind, mode = %self.mode, "arrangement changed");
        Ok(())
    }

    fn selection_content(&self, kind: ArrangementKind) -> Option<ArrangementContent> {
        match kind {
            ArrangementKind::Default if !self.selected_fragments.is_empty() => {
                Some(ArrangementContent::Fragments(self.selected_fragments.clone()))
            }
            ArrangementKind::Default => None,
            ArrangementKind::AutoTile => self.selected_auto_tile.map(ArrangementContent::AutoTile),
            ArrangementKind::Colider => Some(ArrangementContent::Colider(self.selected_colider)),
            ArrangementKind::Erase => Some(ArrangementContent::None),
        }
    }

    /// Hand `content` to `slot` if its arrangement takes that shape.
    /// A rejected content leaves the slot unconfigured.
    fn configure(slot: &mut Arrangement, content: ArrangementContent) -> Result<(), EditorError> {
        let kind = slot.kind();
        if kind == ArrangementKind::Erase || !kind.accepts(&content) {
            return Ok(());
        }
        if let Err(err) = slot.set_content(content) {
            *slot = kind.create();
            return Err(err);
        }
        Ok(())
    }

    pub fn select_map_chips(&mut self, fragments: Vec<MapChipFragment>) -> Result<(), EditorError> {
        self.selected_fragments = fragments.clone();
        Self::configure(&mut self.map_arrangement, ArrangementContent::Fragments(fragments))
    }

    pub fn select_auto_tile(&mut self, id: u32) -> Result<(), EditorError> {
        if self.tiled_map().auto_tiles().from_id(id).is_none() {
            return Err(MapError::MissingAutoTile(id).into());
        }
        self.selected_auto_tile = Some(id);
        Self::configure(&mut self.map_arrangement, ArrangementContent::AutoTile(id))
    }

    pub fn select_colider(&mut self, colider: ColiderTypes) -> Result<(), EditorError> {
        self.selected_colider = colider;
        Self::configure(&mut self.colider_arrangement, ArrangementContent::Colider(colider))
    }

    pub fn handle(&mut self, event: SelectionEvent) -> Result<(), EditorError> {
        debug!(?event, "selection event");
        match event {
            SelectionEvent::MapChipSelected(fragments) => self.select_map_chips(fragments),
            SelectionEvent::AutoTileSelected { id } => self.select_auto_tile(id),
            SelectionEvent::ColiderSelected(colider) => self.select_colider(colider),
            SelectionEvent::BrushSelected(kind) => {
                self.set_brush(kind);
                Ok(())
            }
            SelectionEvent::ArrangementSelected(kind) => self.set_arrangement(kind),
            SelectionEvent::ModeSelected(mode) => {
                self.set_mode(mode);
                Ok(())
            }
        }
    }

    /// Handle queued events in order, stopping at the first failure.
    ///
    /// The failing event is consumed; later ones stay queued.
    pub fn process_events(&mut self, events: &mut EditorEvents) -> Result<usize, EditorError> {
        let mut handled = 0;
        while let Some(event) = events.pop() {
            self.handle(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    pub fn mouse_down(&mut self, x: i32, y: i32) {
        self.last_position = Some((x, y));
        self.brush.mouse_down(x, y);
    }

    /// Preview paints for a pointer move; repeated positions yield nothing
    pub fn mouse_move(&mut self, x: i32, y: i32) -> Result<Vec<CanvasPaint>, EditorError> {
        if self.last_position == Some((x, y)) {
            return Ok(Vec::new());
        }
        self.last_position = Some((x, y));

        let paints = self.brush.mouse_move(x, y);
        Ok(self
            .resolve(&paints)?
            .into_iter()
            .map(|paint| self.canvas_paint(PaintTarget::Preview, paint))
            .collect())
    }

    /// Commit the gesture. The brush is cleaned up even when committing fails.
    pub fn mouse_up(&mut self, x: i32, y: i32) -> Result<Vec<CanvasPaint>, EditorError> {
        let paints = self.brush.mouse_up(x, y);
        let result = self
            .resolve(&paints)
            .map(|resolved| self.commit(resolved));
        self.cancel();
        result
    }

    /// Abandon the current gesture without writing anything
    pub fn cancel(&mut self) {
        self.brush.clean_up();
        self.last_position = None;
    }

    fn resolve(&self, paints: &[BrushPaint]) -> Result<Vec<ArrangementPaint>, EditorError> {
        if paints.is_empty() {
            return Ok(Vec::new());
        }
        match self.arrangement().apply(paints, self.tiled_map()) {
            Err(EditorError::Map(MapError::MissingAutoTile(auto_tile_id))) => {
                warn!(auto_tile_id, "auto tile not found, paint skipped");
                Ok(Vec::new())
            }
            result => result,
        }
    }

    /// Normalize an empty item to the current grid's empty value
    fn canvas_paint(&self, target: PaintTarget, paint: ArrangementPaint) -> CanvasPaint {
        let item = match (paint.item, self.mode) {
            (PaintItem::Empty, EditMode::MapChip) => PaintItem::MapChip(MapChip::empty()),
            (PaintItem::Empty, EditMode::Colider) => PaintItem::Colider(ColiderTypes::None),
            (item, _) => item,
        };
        CanvasPaint::new(target, paint.x, paint.y, item)
    }

    fn commit(&mut self, paints: Vec<ArrangementPaint>) -> Vec<CanvasPaint> {
        let mode = self.mode;
        let mut committed = Vec::with_capacity(paints.len());

        for paint in paints {
            let paint = self.canvas_paint(PaintTarget::Committed, paint);
            let map = self.project.tiled_map_mut();
            let written = match (&paint.item, mode) {
                (PaintItem::MapChip(chip), EditMode::MapChip) => {
                    map.put_chip(chip.clone(), paint.x, paint.y)
                }
                (PaintItem::Colider(colider), EditMode::Colider) => {
                    map.put_colider(*colider, paint.x, paint.y)
                }
                (item, _) => {
                    warn!(?item, %mode, "paint does not belong to the edited grid, skipped");
                    continue;
                }
            };
            match written {
                Ok(()) => committed.push(paint),
                Err(err) => warn!(x = paint.x, y = paint.y, %err, "paint skipped"),
            }
        }

        if mode == EditMode::MapChip && !committed.is_empty() {
            let cells = affected_cells(committed.iter().map(|paint| (paint.x, paint.y)));
            let refreshed = self.project.tiled_map_mut().refresh_auto_tiles(cells);
            committed.extend(refreshed.into_iter().map(|(x, y, chip)| {
                CanvasPaint::new(PaintTarget::Committed, x, y, PaintItem::MapChip(chip))
            }));
        }

        debug!(count = committed.len(), %mode, "committed paints");
        committed
    }

    /// Committed paints for every cell of both grids
    pub fn render_all(&self) -> Vec<CanvasPaint> {
        render::render_all(self.tiled_map())
    }
}

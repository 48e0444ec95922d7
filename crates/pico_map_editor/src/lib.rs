//! pico_map_editor - Painting pipeline for pico_map tile maps
//!
//! This crate provides the editing core of the map editor:
//! - Brushes turning pointer gestures into cells (Pen, Rectangle)
//! - Arrangements resolving cells into chips, auto tiles, coliders or erasure
//! - The [`MapCanvas`] that previews, commits and recomposes auto tiles
//! - Persisted map state ([`TiledMap`]) and editor settings
//! - Draw operations for whatever host renders the canvas
//!
//! # Usage
//!
//! ```rust,ignore
//! use pico_map_editor::{
//!     EditorSettings, MapCanvasBuilder, Project, SelectionEvent,
//! };
//! use pico_map_editor::pico_map_core::MapChipFragment;
//!
//! let settings = EditorSettings::load("settings.toml")?;
//! let project = Project::new(1, settings.new_map());
//! let mut canvas = MapCanvasBuilder::new()
//!     .project(project)
//!     .settings(&settings)
//!     .build()?;
//!
//! canvas.handle(SelectionEvent::MapChipSelected(vec![MapChipFragment::new(0, 0, 1)]))?;
//! canvas.mouse_down(2, 3);
//! for paint in canvas.mouse_up(2, 3)? {
//!     let operations = pico_map_editor::render::draw_operations(canvas.tiled_map(), &paint);
//!     // draw them
//! }
//! ```

pub mod arrangement;
pub mod brush;
pub mod canvas;
mod error;
pub mod project;
pub mod render;
pub mod selection;
pub mod settings;

// Re-export core types from pico_map_* crates
pub use pico_map_autotile;
pub use pico_map_core;

pub use arrangement::{Arrangement, ArrangementContent, ArrangementKind, ArrangementPaint, PaintItem};
pub use brush::{Brush, BrushKind, BrushPaint, BrushState};
pub use canvas::{CanvasPaint, EditMode, MapCanvas, MapCanvasBuilder, PaintTarget};
pub use error::EditorError;
pub use project::{Project, TiledMap, TiledMapProperties};
pub use render::DrawOperation;
pub use selection::{EditorEvents, SelectionEvent};
pub use settings::EditorSettings;

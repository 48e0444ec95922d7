//! Project management for the map editor
//!
//! A [`Project`] owns the [`TiledMap`] being edited and the listeners that
//! repaint it in full.

mod tiled_map;

pub use tiled_map::*;

use std::fmt;
use tracing::debug;

/// Listener called with the whole map when a full repaint is requested
pub type RenderAllCallback = Box<dyn FnMut(&TiledMap)>;

/// An editing session over one map
pub struct Project {
    id: u32,
    tiled_map: TiledMap,
    render_all_callbacks: Vec<RenderAllCallback>,
    dirty: bool,
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("tiled_map", &self.tiled_map)
            .field("render_all_callbacks", &self.render_all_callbacks.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Project {
    pub fn new(id: u32, tiled_map: TiledMap) -> Self {
        Self {
            id,
            tiled_map,
            render_all_callbacks: Vec::new(),
            dirty: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn tiled_map(&self) -> &TiledMap {
        &self.tiled_map
    }

    /// Get the map for editing, marking the project as modified
    pub fn tiled_map_mut(&mut self) -> &mut TiledMap {
        self.dirty = true;
        &mut self.tiled_map
    }

    /// Replace the whole map, e.g. after loading a file, and repaint
    pub fn replace_tiled_map(&mut self, tiled_map: TiledMap) {
        self.tiled_map = tiled_map;
        self.dirty = false;
        self.request_render_all();
    }

    /// Mark project as modified
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if project has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current state as saved
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn register_render_all_callback(&mut self, callback: impl FnMut(&TiledMap) + 'static) {
        self.render_all_callbacks.push(Box::new(callback));
    }

    /// Call every render-all listener, in registration order
    pub fn request_render_all(&mut self) {
        debug!(
            project = self.id,
            listeners = self.render_all_callbacks.len(),
            "render all requested"
        );
        for callback in &mut self.render_all_callbacks {
            callback(&self.tiled_map);
        }
    }
}

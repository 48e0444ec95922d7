//! Editor settings stored as TOML
//!
//! Every field has a default, so a settings file only needs the values it
//! changes.

use pico_map_autotile::AutoTileIndexLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::arrangement::ArrangementKind;
use crate::brush::BrushKind;
use crate::project::TiledMap;
use crate::EditorError;

/// Settings used when creating maps and canvases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Version for future migrations
    pub version: u32,

    // New map size
    pub chip_width: u32,
    pub chip_height: u32,
    pub chip_count_x: u32,
    pub chip_count_y: u32,

    /// Pixel width of the auto tile picker
    pub index_image_width: u32,

    // Initial tools
    pub default_brush: BrushKind,
    pub default_arrangement: ArrangementKind,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            version: 1,
            chip_width: 32,
            chip_height: 32,
            chip_count_x: 30,
            chip_count_y: 30,
            index_image_width: 192,
            default_brush: BrushKind::Pen,
            default_arrangement: ArrangementKind::Default,
        }
    }
}

impl EditorSettings {
    pub fn from_toml_str(source: &str) -> Result<Self, EditorError> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String, EditorError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from `path`, falling back to defaults when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let settings = Self::from_toml_str(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// An empty map with the configured size
    pub fn new_map(&self) -> TiledMap {
        TiledMap::new(
            self.chip_count_x,
            self.chip_count_y,
            self.chip_width,
            self.chip_height,
        )
    }

    /// Picker layout for the configured width and chip size
    pub fn index_layout(&self) -> AutoTileIndexLayout {
        AutoTileIndexLayout::new(self.index_image_width, self.chip_width, self.chip_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = EditorSettings::from_toml_str(
            r#"
            chip_width = 16
            default_brush = "RectangleBrush"
            default_arrangement = "AutoTileArrangement"
            "#,
        )
        .unwrap();

        assert_eq!(settings.chip_width, 16);
        assert_eq!(settings.chip_height, 32);
        assert_eq!(settings.chip_count_x, 30);
        assert_eq!(settings.default_brush, BrushKind::Rectangle);
        assert_eq!(settings.default_arrangement, ArrangementKind::AutoTile);
    }

    #[test]
    fn test_unknown_brush_is_rejected() {
        assert!(matches!(
            EditorSettings::from_toml_str(r#"default_brush = "Bucket""#),
            Err(EditorError::SettingsParse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.toml");

        let settings = EditorSettings {
            chip_count_x: 12,
            index_image_width: 256,
            ..Default::default()
        };
        settings.save(&path).unwrap();

        assert_eq!(EditorSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EditorSettings::load(dir.path().join("missing.toml")).unwrap();
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_new_map_and_layout() {
        let settings = EditorSettings::default();
        let map = settings.new_map();

        assert_eq!((map.chip_count_x(), map.chip_count_y()), (30, 30));
        assert_eq!((map.chip_width(), map.chip_height()), (32, 32));
        assert_eq!(settings.index_layout().columns(), 6);
    }
}

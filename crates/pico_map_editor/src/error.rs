//! Editor error type

use pico_map_core::MapError;
use thiserror::Error;

/// Errors raised while configuring or driving the editor
#[derive(Debug, Error)]
pub enum EditorError {
    /// Content handed to an arrangement does not fit it
    #[error("invalid arrangement content: {0}")]
    InvalidContent(String),
    /// Something was used before its setup step ran
    #[error("{0} is not set")]
    Uninitialized(&'static str),
    #[error("chip images are still loading: {0:?}")]
    ImagesNotReady(Vec<u32>),
    #[error("{arrangement} cannot be used in {mode} mode")]
    UnsupportedArrangement {
        arrangement: &'static str,
        mode: &'static str,
    },
    #[error("unknown brush: {0}")]
    UnknownBrush(String),
    #[error("unknown arrangement: {0}")]
    UnknownArrangement(String),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),
}

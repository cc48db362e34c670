use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or saving a canvas
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors that can occur while loading or persisting preferences
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to serialize preferences: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write preferences: {0}")]
    Write(#[from] std::io::Error),
}

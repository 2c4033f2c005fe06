//! Error types shared across Tomocard crates.

use std::path::PathBuf;

/// Top-level error type for Tomocard operations.
#[derive(Debug, thiserror::Error)]
pub enum TomocardError {
    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Capture error: {message}")]
    Capture { message: String },

    #[error("Assembly error: {message}")]
    Assembly { message: String },

    #[error("Roster error: {message}")]
    Roster { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No surface staged for card {card_id} side {side}")]
    SurfaceNotFound { card_id: String, side: String },

    #[error("Roster contains no employees; export job not started")]
    EmptyRoster,

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using TomocardError.
pub type TomocardResult<T> = Result<T, TomocardError>;

impl TomocardError {
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn assembly(msg: impl Into<String>) -> Self {
        Self::Assembly {
            message: msg.into(),
        }
    }

    pub fn roster(msg: impl Into<String>) -> Self {
        Self::Roster {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

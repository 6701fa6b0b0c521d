use std::path::PathBuf;
use thiserror::Error;

/// Failures that can happen before the game loop starts, or while talking to
/// the display. None of these are recovered from.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("screen {width}x{height} cannot fit a single {cell_size}px cell")]
    ScreenTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixel buffer: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Texture(#[from] pixels::TextureError),
}

pub type Result<T> = core::result::Result<T, SetupError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Window error: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("Frame buffer error: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error("Cannot load font {}: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;

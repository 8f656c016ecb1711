use crate::config::ConfigError;
use crate::editor::CaptureError;
use crate::model::PostId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocbaseError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to capture input: {0}")]
    Capture(#[from] CaptureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("post not found: {0}")]
    NotFound(PostId),

    #[error("{0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("failed to open browser: {0}")]
    Browser(String),
}

impl From<minijinja::Error> for DocbaseError {
    fn from(err: minijinja::Error) -> Self {
        DocbaseError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocbaseError>;

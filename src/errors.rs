use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no matching entry on disk: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("charset detection failed: {0}")]
    Detection(String),
}

impl PathError {
    pub fn code(&self) -> &'static str {
        match self {
            PathError::NotFound(_) => "NotFound",
            PathError::Io(_) => "Io",
            PathError::Detection(_) => "Detection",
        }
    }

    /// Maps an io error on `path` to `NotFound` when the kind says so.
    pub fn from_io(path: &std::path::Path, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            PathError::NotFound(path.to_path_buf())
        } else {
            PathError::Io(e)
        }
    }
}

pub type PathResult<T> = Result<T, PathError>;

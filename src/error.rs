use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end the invocation.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Path not found -> {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("failed to write {}", path.display())]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A directory that could not be listed. Rendered in place of its children.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Access Denied")]
    AccessDenied,
    #[error("Error: {0}")]
    Io(String),
}

impl From<io::Error> for ListError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ListError::AccessDenied,
            _ => ListError::Io(err.to_string()),
        }
    }
}

//! Error types for scanning and exporting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("permission denied: '{}'", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The only fatal condition: the root handed to the CLI is not a directory.
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("failed to export markdown to '{}': {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ScanError {
    /// Classify a listing failure, separating permission problems from other I/O errors.
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            ScanError::PermissionDenied { path, source }
        } else {
            ScanError::Access { path, source }
        }
    }
}

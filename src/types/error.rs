//! Error types for tunesweep

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for collection operations
#[derive(Debug, Error)]
pub enum CollectError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Destination directory could not be created
    #[error("Cannot create destination directory {}: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source root could not be opened at all
    #[error("Error accessing directory {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory below the source root could not be listed
    #[error("Error accessing directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single matched file failed to copy
    #[error("Error copying {file}: {source}")]
    Copy {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    /// Check if this error aborts the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CollectError::DestinationUnavailable { .. } | CollectError::Config(_)
        )
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        self.io_kind() == Some(ErrorKind::PermissionDenied)
    }

    fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            CollectError::DestinationUnavailable { source: e, .. }
            | CollectError::SourceUnavailable { source: e, .. }
            | CollectError::DirectoryUnreadable { source: e, .. }
            | CollectError::Copy { source: e, .. } => Some(e.kind()),
            CollectError::Config(_) => None,
        }
    }
}

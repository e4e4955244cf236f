//! Executor module for file operations

pub mod copy;
pub mod naming;

use crate::types::CollectError;
use std::fs;
use std::path::Path;

pub use copy::{copy_contents, copy_one};
pub use naming::resolve_destination_name;

/// Create the destination directory and any missing ancestors.
///
/// Succeeds silently when the directory already exists. Any failure is
/// fatal for the run.
pub fn ensure_destination(destination_root: &Path) -> Result<(), CollectError> {
    fs::create_dir_all(destination_root).map_err(|source| CollectError::DestinationUnavailable {
        path: destination_root.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_destination_creates_nested_dirs() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dest = temp_dir.path().join("a/b/c");

        ensure_destination(&dest).expect("should create destination");

        assert!(dest.is_dir());
    }

    #[test]
    fn test_ensure_destination_accepts_existing_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        ensure_destination(temp_dir.path()).expect("existing dir is fine");
        ensure_destination(temp_dir.path()).expect("and again");
    }

    #[test]
    fn test_ensure_destination_blocked_by_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("music");
        fs::write(&blocker, b"not a dir").expect("Failed to write");

        let err = ensure_destination(&blocker.join("out")).unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(err, CollectError::DestinationUnavailable { .. }));
    }
}

//! Source filesystem abstraction
//!
//! The walker and the copier only talk to the source tree through
//! [`SourceFs`], so a mounted device, a plain directory or a test double
//! can all serve as the source.

use std::fs::{self, File, Permissions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind of a directory entry as seen by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Something that can be opened and read
    File,
    /// A directory to descend into
    Directory,
    /// Anything else: symlinked directories, sockets, devices
    Other,
}

/// One entry returned by [`SourceFs::list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl SourceEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Metadata carried over to copies on a best-effort basis
#[derive(Debug, Clone, Default)]
pub struct SourceMetadata {
    pub modified: Option<SystemTime>,
    pub permissions: Option<Permissions>,
}

/// Read-only access to a source tree
pub trait SourceFs {
    /// List the immediate children of `dir`
    fn list(&self, dir: &Path) -> io::Result<Vec<SourceEntry>>;

    /// Open a file for streaming its contents
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Timestamps and permissions of `path`, if the backend knows them
    fn metadata(&self, _path: &Path) -> io::Result<SourceMetadata> {
        Ok(SourceMetadata::default())
    }
}

/// [`SourceFs`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    fn classify(entry: &fs::DirEntry) -> io::Result<EntryKind> {
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            return Ok(EntryKind::Directory);
        }
        if file_type.is_file() {
            return Ok(EntryKind::File);
        }
        if file_type.is_symlink() {
            // Follow links to files, never into directories. A dangling link
            // stays a file so a matching one fails loudly at copy time.
            return Ok(match fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => EntryKind::Other,
                Ok(target) if target.is_file() => EntryKind::File,
                Ok(_) => EntryKind::Other,
                Err(_) => EntryKind::File,
            });
        }
        Ok(EntryKind::Other)
    }
}

impl SourceFs for LocalFs {
    fn list(&self, dir: &Path) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Failed to read an entry of {}: {}", dir.display(), e);
                    continue;
                }
            };
            let kind = match Self::classify(&entry) {
                Ok(kind) => kind,
                Err(e) => {
                    log::warn!(
                        "Failed to read file type for {}: {}. Entry will be skipped.",
                        entry.path().display(),
                        e
                    );
                    continue;
                }
            };
            entries.push(SourceEntry::new(entry.path(), kind));
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(path)?))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn metadata(&self, path: &Path) -> io::Result<SourceMetadata> {
        let metadata = fs::metadata(path)?;
        Ok(SourceMetadata {
            modified: metadata.modified().ok(),
            permissions: Some(metadata.permissions()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_classifies_and_sorts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("b_dir")).expect("Failed to create dir");
        fs::write(root.join("c.mp3"), b"c").expect("Failed to write");
        fs::write(root.join("a.txt"), b"a").expect("Failed to write");

        let entries = LocalFs.list(root).expect("list should succeed");

        assert_eq!(
            entries,
            vec![
                SourceEntry::new(root.join("a.txt"), EntryKind::File),
                SourceEntry::new(root.join("b_dir"), EntryKind::Directory),
                SourceEntry::new(root.join("c.mp3"), EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = LocalFs.list(&temp_dir.path().join("missing"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_to_files_are_files_and_to_dirs_are_not_followed() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("real")).expect("Failed to create dir");
        fs::write(root.join("real/track.mp3"), b"x").expect("Failed to write");
        std::os::unix::fs::symlink(root.join("real"), root.join("loop"))
            .expect("Failed to create dir symlink");
        std::os::unix::fs::symlink(root.join("real/track.mp3"), root.join("link.mp3"))
            .expect("Failed to create file symlink");
        std::os::unix::fs::symlink(root.join("nowhere.mp3"), root.join("dangling.mp3"))
            .expect("Failed to create dangling symlink");

        let entries = LocalFs.list(root).expect("list should succeed");
        let kind_of = |name: &str| {
            entries
                .iter()
                .find(|e| e.path == root.join(name))
                .map(|e| e.kind)
        };

        assert_eq!(kind_of("loop"), Some(EntryKind::Other));
        assert_eq!(kind_of("link.mp3"), Some(EntryKind::File));
        assert_eq!(kind_of("dangling.mp3"), Some(EntryKind::File));
    }

    #[test]
    fn test_open_exists_and_metadata() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("song.mp3");
        fs::write(&path, b"ID3 data").expect("Failed to write");

        assert!(LocalFs.exists(&path));
        assert!(!LocalFs.exists(&temp_dir.path().join("nope.mp3")));

        let mut contents = Vec::new();
        LocalFs
            .open(&path)
            .expect("open should succeed")
            .read_to_end(&mut contents)
            .expect("read should succeed");
        assert_eq!(contents, b"ID3 data");

        let metadata = LocalFs.metadata(&path).expect("metadata should succeed");
        assert!(metadata.modified.is_some());
        assert!(metadata.permissions.is_some());
    }
}

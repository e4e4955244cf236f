//! CandidateFile - A matched file discovered during traversal

use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A regular file found below the source root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateFile {
    /// Full path used to open the file
    pub absolute_path: PathBuf,

    /// Path relative to the source root
    pub relative_path: PathBuf,

    /// File name exactly as stored on the source, not necessarily UTF-8
    pub file_name: OsString,

    /// File name without its extension, lossily decoded for display
    pub base_name: String,

    /// Extension including the leading dot, empty if none
    pub extension: String,
}

impl CandidateFile {
    /// Build a candidate from its location below `source_root`.
    ///
    /// Returns `None` when `absolute_path` has no file name.
    pub fn new(source_root: &Path, absolute_path: PathBuf) -> Option<Self> {
        let file_name = absolute_path.file_name()?.to_os_string();
        let relative_path = absolute_path
            .strip_prefix(source_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(&file_name));

        let name = Path::new(&file_name);
        let base_name = name
            .file_stem()
            .unwrap_or(&file_name)
            .to_string_lossy()
            .into_owned();
        let extension = name
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Some(Self {
            absolute_path,
            relative_path,
            file_name,
            base_name,
            extension,
        })
    }

    /// Raw file name, used to name the copy
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// File name for matching and messages; invalid UTF-8 is replaced
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

//! Lazy depth-first directory walker

use crate::source::{EntryKind, SourceEntry, SourceFs};
use crate::types::{CandidateFile, CollectError};
use std::path::{Path, PathBuf};

/// Walk the tree below `root`, yielding every file found.
///
/// Each call starts a fresh walk; nothing is cached between calls.
pub fn traverse<'a, F: SourceFs + ?Sized>(fs: &'a F, root: &Path) -> Walker<'a, F> {
    Walker::new(fs, root)
}

/// Depth-first iterator over the files of a source tree
///
/// Yields `Ok(CandidateFile)` for every file and `Err` for each directory
/// that could not be listed. An unreadable subdirectory does not end the
/// walk; its siblings are still visited. When the root itself cannot be
/// listed, the walk yields exactly one [`CollectError::SourceUnavailable`]
/// and then ends.
///
/// Entries of a directory come out in path order, files before the
/// contents of subdirectories.
pub struct Walker<'a, F: SourceFs + ?Sized> {
    fs: &'a F,
    root: PathBuf,
    prune: Option<PathBuf>,
    started: bool,
    pending_dirs: Vec<PathBuf>,
    current: std::vec::IntoIter<SourceEntry>,
}

impl<'a, F: SourceFs + ?Sized> Walker<'a, F> {
    pub fn new(fs: &'a F, root: &Path) -> Self {
        Self {
            fs,
            root: root.to_path_buf(),
            prune: None,
            started: false,
            pending_dirs: Vec::new(),
            current: Vec::new().into_iter(),
        }
    }

    /// Skip the subtree at `dir` entirely
    pub fn prune(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prune = Some(dir.into());
        self
    }

    fn is_pruned(&self, dir: &Path) -> bool {
        self.prune.as_deref() == Some(dir)
    }

    fn enqueue(&mut self, entries: Vec<SourceEntry>) {
        let (dirs, others): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|e| e.kind == EntryKind::Directory);

        // Stack: push in reverse so the first subdirectory is popped first
        for dir in dirs.into_iter().rev() {
            if self.is_pruned(&dir.path) {
                log::debug!("Skipping destination directory {}", dir.path.display());
                continue;
            }
            self.pending_dirs.push(dir.path);
        }
        self.current = others.into_iter();
    }
}

impl<F: SourceFs + ?Sized> Iterator for Walker<'_, F> {
    type Item = Result<CandidateFile, CollectError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            match self.fs.list(&self.root) {
                Ok(entries) => self.enqueue(entries),
                Err(source) => {
                    self.pending_dirs.clear();
                    return Some(Err(CollectError::SourceUnavailable {
                        path: self.root.clone(),
                        source,
                    }));
                }
            }
        }

        loop {
            for entry in self.current.by_ref() {
                if entry.kind != EntryKind::File {
                    continue;
                }
                if let Some(candidate) = CandidateFile::new(&self.root, entry.path) {
                    return Some(Ok(candidate));
                }
            }

            let dir = self.pending_dirs.pop()?;
            log::debug!("Listing {}", dir.display());
            match self.fs.list(&dir) {
                Ok(entries) => self.enqueue(entries),
                Err(source) => {
                    return Some(Err(CollectError::DirectoryUnreadable { path: dir, source }));
                }
            }
        }
    }
}

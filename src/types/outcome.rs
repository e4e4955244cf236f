//! Per-file outcomes and the aggregate run report

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source and destination roots for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRequest {
    /// Directory whose subtree is searched
    pub source_root: PathBuf,

    /// Flat directory receiving all matches
    pub destination_root: PathBuf,
}

impl TraversalRequest {
    pub fn new(source_root: impl Into<PathBuf>, destination_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
        }
    }
}

/// Result of copying a single matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// File landed at `destination_path`
    Success {
        source_path: PathBuf,
        destination_path: PathBuf,
    },

    /// File was not copied
    Failure { source_path: PathBuf, reason: String },
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Success { .. })
    }

    pub fn source_path(&self) -> &PathBuf {
        match self {
            CopyOutcome::Success { source_path, .. } | CopyOutcome::Failure { source_path, .. } => {
                source_path
            }
        }
    }
}

/// Aggregate report of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Number of files written into the destination
    pub copied_count: usize,

    /// Human-readable error messages, in the order they occurred
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one copy outcome into the report
    pub fn record(&mut self, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::Success { .. } => self.copied_count += 1,
            CopyOutcome::Failure { reason, .. } => self.errors.push(reason.clone()),
        }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

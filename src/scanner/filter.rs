//! Extension filter for candidate files

use crate::types::{CandidateFile, CollectError};
use globset::{GlobBuilder, GlobMatcher};

/// Matches file names ending in a given extension, ignoring case
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    matcher: GlobMatcher,
}

impl ExtensionFilter {
    pub fn new(extension: &str) -> Result<Self, CollectError> {
        let pattern = format!("*{}", escape_glob(extension));
        let glob = GlobBuilder::new(&pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                CollectError::Config(format!("Invalid extension '{}': {}", extension, e))
            })?;

        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// Whether the candidate's file name carries the target extension
    pub fn matches(&self, candidate: &CandidateFile) -> bool {
        self.matches_name(&candidate.display_name())
    }

    pub fn matches_name(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

/// Escape glob metacharacters so `s` matches literally
fn escape_glob(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '*' | '?' | '[' | ']' | '{' | '}' | '!' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

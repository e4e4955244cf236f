//! # tunesweep - Gather scattered audio files into one folder
//!
//! Walks a source tree (a music library, a mounted phone) and copies every
//! file with the target extension into a single flat directory. Name
//! clashes are resolved with a numeric suffix (`song.mp3`, `song_1.mp3`,
//! ...) so nothing already in the destination is ever overwritten.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod scanner;
pub mod source;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use commands::collect::{collect, run};
pub use config::Config;
pub use source::{LocalFs, SourceFs};
pub use types::{CandidateFile, CollectError, CopyOutcome, RunResult, TraversalRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

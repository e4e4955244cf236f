//! Core type definitions for tunesweep

mod candidate;
mod error;
mod outcome;

pub use candidate::CandidateFile;
pub use error::CollectError;
pub use outcome::{CopyOutcome, RunResult, TraversalRequest};

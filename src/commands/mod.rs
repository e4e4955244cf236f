//! Top-level commands

pub mod collect;

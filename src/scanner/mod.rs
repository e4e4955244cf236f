//! Source tree traversal and filtering

mod filter;
mod walker;

pub use filter::ExtensionFilter;
pub use walker::{traverse, Walker};

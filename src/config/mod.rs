//! Configuration management

use crate::types::CollectError;

/// Extension collected when nothing else is configured
pub const DEFAULT_EXTENSION: &str = ".mp3";

/// Settings for a collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File name suffix to collect, matched case-insensitively
    pub extension: String,

    /// Carry mtime and permissions over to copies (best effort)
    pub preserve_metadata: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            preserve_metadata: true,
        }
    }
}

impl Config {
    /// Config collecting a different extension, e.g. `".flac"`
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Self::default()
        }
    }

    /// Validate configuration, returning a normalized copy.
    ///
    /// A missing leading dot is added (`"mp3"` becomes `".mp3"`).
    pub fn validate(&self) -> Result<Config, CollectError> {
        let trimmed = self.extension.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Err(CollectError::Config(
                "Target extension must not be empty".to_string(),
            ));
        }

        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(CollectError::Config(format!(
                "Target extension must not contain a path separator: {:?}",
                self.extension
            )));
        }

        let extension = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{}", trimmed)
        };

        Ok(Config {
            extension,
            ..self.clone()
        })
    }
}

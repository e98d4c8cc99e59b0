//! Configuration error types

use std::path::PathBuf;

/// Error loading a [`crate::FormConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The reset delay must be greater than zero.
    #[error("Reset delay must be greater than zero")]
    InvalidDelay,
}

impl ConfigError {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

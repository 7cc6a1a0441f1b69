//! Error types for the VulRule core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for VulRule.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested locale is not one of the supported locales.
    #[error("Unsupported locale '{0}' (expected one of: en, zh)")]
    UnsupportedLocale(String),

    /// Dataset file could not be read or decoded.
    #[error("Dataset error in {path}: {message}")]
    Dataset { path: PathBuf, message: String },

    /// Dataset decoded to an empty rule list.
    #[error("No data found in {0}")]
    EmptyDataset(PathBuf),

    /// A rule is missing a field the generator dereferences.
    #[error("Invalid rule #{index} ({api_name}): {message}")]
    InvalidRule {
        index: usize,
        api_name: String,
        message: String,
    },

    /// A name would produce an unusable path segment.
    #[error("Unsafe {kind} name '{name}' in rule #{index}: {reason}")]
    UnsafeName {
        index: usize,
        kind: &'static str,
        name: String,
        reason: &'static str,
    },

    /// Two or more rules map to the same documentation page.
    #[error("Page {path} is produced by {count} rules")]
    Collision { path: String, count: usize },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new dataset error.
    pub fn dataset(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Dataset {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid rule error.
    pub fn invalid_rule(
        index: usize,
        api_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRule {
            index,
            api_name: api_name.into(),
            message: message.into(),
        }
    }
}

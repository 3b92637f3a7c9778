//! Error types for experiment manifest loading.
//!
//! These cover only the I/O-facing edge of the crate. Validation itself
//! reports through [`crate::result::Violation`] values and never fails.

use thiserror::Error;

/// Errors that can occur while loading an experiment manifest.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest is not well-formed YAML.
    #[error("failed to parse YAML experiment manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The manifest is not well-formed JSON.
    #[error("failed to parse JSON experiment manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for manifest loading.
pub type Result<T> = std::result::Result<T, Error>;

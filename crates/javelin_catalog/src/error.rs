//! Error types for catalog literal resolution.

use thiserror::Error;

/// Errors produced when resolving wire literals against the catalog enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The target literal matches no known integration point.
    #[error("unknown JVM chaos target: {0}")]
    UnknownTarget(String),

    /// The action literal matches no known fault kind.
    #[error("unknown JVM chaos action: {0}")]
    UnknownAction(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the persistence stores

use thiserror::Error;

/// Errors from the launch-history and usage-log stores
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error (wrapped)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization failed
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

//! Error types for manifest-core

/// Result type for manifest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reconciliation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error while hashing the manifest directory
    #[error(transparent)]
    Fs(#[from] manifest_fs::Error),

    /// The external management tool failed
    #[error(transparent)]
    Kubectl(#[from] manifest_kubectl::Error),

    /// The query response could not be parsed as the expected structure
    #[error("Failed to parse query response: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for manifest-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from manifest-core
    #[error(transparent)]
    Core(#[from] manifest_core::Error),

    /// Error from manifest-fs
    #[error(transparent)]
    Fs(#[from] manifest_fs::Error),

    /// Error from manifest-kubectl
    #[error(transparent)]
    Kubectl(#[from] manifest_kubectl::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! Error types for manifest-kubectl
//!
//! Every subprocess failure carries the rendered command line and the
//! captured stderr verbatim, so callers can surface the underlying tool's
//! own diagnostics without re-formatting.

/// Result type for manifest-kubectl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the external management tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The subprocess could not be started at all
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// `apply` exited with a nonzero status
    #[error("Apply failed (`{command}`, exit code {exit_code:?}): {stderr}")]
    Apply {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// `delete` exited with a nonzero status
    #[error("Delete failed (`{command}`, exit code {exit_code:?}): {stderr}")]
    Delete {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// `get` exited with a nonzero status
    #[error("Query failed (`{command}`, exit code {exit_code:?}): {stderr}")]
    Query {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

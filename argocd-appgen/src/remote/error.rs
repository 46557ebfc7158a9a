//! Remote URL resolution error types.

use thiserror::Error;

/// Errors that can occur while reading the configured remote URL.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The git executable could not be started.
    #[error("Failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// git succeeded but reported nothing usable.
    #[error("git remote {remote} URL is empty")]
    EmptyUrl { remote: String },
}

//! Path resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving the project layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The current working directory could not be determined.
    #[error("Failed to get working directory: {source}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },

    /// The requested working directory does not resolve to a directory.
    #[error("Failed to resolve working directory '{path}': {source}")]
    InvalidWorkdir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Neither chart candidate exists.
    #[error("chart directory does not exist: {primary} or {fallback}")]
    ChartNotFound { primary: String, fallback: String },

    /// The template file is missing at the derived path.
    #[error("template file not found: {path}")]
    TemplateNotFound { path: String },

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    CreateOutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

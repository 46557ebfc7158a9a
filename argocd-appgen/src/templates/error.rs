//! Template rendering error types.

use thiserror::Error;

/// Errors that can occur while loading a template or writing a manifest.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("Failed to read template '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The template has a syntax error.
    #[error("Failed to parse template '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: handlebars::TemplateError,
    },

    /// Substituting the record into the template failed.
    #[error("Failed to render template '{path}': {source}")]
    Render {
        path: String,
        #[source]
        source: handlebars::RenderError,
    },

    /// The output file could not be created.
    #[error("Failed to create output file '{path}': {source}")]
    CreateOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Flushing rendered output to disk failed.
    #[error("Failed to write output file '{path}': {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

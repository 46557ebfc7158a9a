//! Runner error types.

/// Errors that can abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid positional arguments.
    #[error(transparent)]
    Args(#[from] crate::args::ArgsError),

    /// Config file loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Remote URL lookup errors.
    #[error(transparent)]
    Remote(#[from] crate::remote::RemoteError),

    /// Chart, template and output path errors.
    #[error(transparent)]
    Layout(#[from] crate::layout::LayoutError),

    /// Template parsing, rendering and output file errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}

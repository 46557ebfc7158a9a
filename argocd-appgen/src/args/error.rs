//! Argument validation error types.

use thiserror::Error;

/// Errors raised while validating the positional arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// A required argument was supplied as an empty string.
    #[error("{field} cannot be empty")]
    EmptyArgument { field: &'static str },

    /// The app name can't be used as a file name inside the output directory.
    #[error("appName must be a plain file name, got '{value}'")]
    InvalidAppName { value: String },
}

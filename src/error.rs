//! Error handling for the compgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for compgen operations.
///
/// Lower layers only ever return these; the process is terminated in one place,
/// [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// The component name input was empty or whitespace only
    #[error("Name of component may not be empty!")]
    EmptyInput,

    /// The same component name was given more than once
    #[error("Duplicates not allowed!")]
    DuplicateName,

    /// A component with this name already exists under the output directory
    #[error("Component already exists: '{name}'")]
    NameCollision { name: String },

    /// Exclusive create refused to overwrite an existing file
    #[error("An unexpected error occurred while writing the files. File already exists: '{}'", path.display())]
    FileAlreadyExists { path: PathBuf },

    /// Any other failure while creating or writing a generated file
    #[error("An unexpected error occurred while writing the files. {source}")]
    WriteError { path: PathBuf, source: io::Error },

    /// Represents errors raised by the terminal prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The user aborted an interactive prompt
    #[error("Operation cancelled by user.")]
    Cancelled,
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// A cancelled prompt exits silently; every other error is printed to stderr.
/// Always exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    match err {
        Error::Cancelled => log::debug!("{err}"),
        _ => eprintln!("{}", console::style(err.to_string()).red().bold()),
    }
    std::process::exit(1);
}

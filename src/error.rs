//! Error handling for the application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for scaffolding operations.
///
/// This enum represents all possible errors that can occur while staging
/// the template or materializing a project. It implements the standard
/// Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while reading or rewriting package.json
    #[error("Manifest error: {0}.")]
    ManifestError(#[from] serde_json::Error),

    /// Represents errors that occur while locating or copying the template
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The target directory for a new project is already taken
    #[error("Directory '{project_name}' already exists.")]
    ProjectExistsError { project_name: String },

    /// The user declined to answer the required project-name question
    #[error("Project creation cancelled.")]
    CancelledError,

    /// Represents errors raised by the interactive prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A subprocess (install, git) finished unsuccessfully
    #[error("Command error: {0}.")]
    CommandError(String),
}

/// Convenience type alias for Results with this crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}

//! Error handling for the Carver application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Carver operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A template reference did not resolve to an existing file
    #[error("Template '{template}' does not exist")]
    TemplateNotFoundError { template: String },

    /// The raw template source could not be read or decoded,
    /// or a directive payload had an unusable shape
    #[error("Failed to decode template '{template}': {reason}")]
    DecodeError { template: String, reason: String },

    /// A source entry used a directive outside of file, dir and link
    #[error("Unknown directive '{directive}'")]
    UnknownDirectiveError { directive: String },

    /// A link chain revisited a template already being expanded
    #[error("Recursive link: template '{template}' is already being resolved")]
    RecursionError { template: String },

    /// A materialization target already exists
    #[error("Path conflict: '{path}' already exists")]
    PathConflictError { path: String },

    /// Label placeholder pattern failed to compile
    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    /// Interactive confirmation failed
    #[error("Prompt error: {0}")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}

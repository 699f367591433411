//! Error handling for zero.
//! Defines the error type and result alias used throughout the crate.

use crate::reporter::Reporter;
use std::io;
use thiserror::Error;

/// Errors that can occur while generating a project.
///
/// Everything except `ExternalProcessFailure` aborts the generation pipeline.
/// That one only comes from the post-generation steps, which the generator
/// downgrades to warnings.
#[derive(Error, Debug)]
pub enum Error {
    /// The project name does not match `^[a-z0-9-]+$`.
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidName { name: String, reason: String },

    /// The destination directory is already there.
    #[error("Folder '{path}' already exists. Choose another project name or remove it.")]
    DestinationExists { path: String },

    /// No template directory matches the requested options.
    #[error("Template '{descriptor}' not found at '{path}'{available}.")]
    TemplateNotFound {
        descriptor: String,
        path: String,
        available: String,
    },

    /// Filesystem read, write or copy failure.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Directory traversal failure while walking a template.
    #[error("Template walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The package manifest could not be parsed or updated.
    #[error("Manifest error in '{path}': {reason}.")]
    ManifestError { path: String, reason: String },

    /// Interactive prompt failed (closed stdin, not a terminal...).
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Ignore pattern failed to compile.
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),

    /// A post-generation step (`git init`, package install) failed or could
    /// not be started.
    #[error("'{command}' failed: {reason}.")]
    ExternalProcessFailure { command: String, reason: String },
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the error and exits the program.
///
/// The message goes through `reporter` at error level, then the process
/// exits with status code 1.
pub fn default_error_handler(reporter: &dyn Reporter, err: Error) -> ! {
    reporter.error(&err.to_string());
    std::process::exit(1);
}

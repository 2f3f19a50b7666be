/*!
 * Error types for the nbsync application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when reading or writing notebook files
#[derive(Error, Debug)]
pub enum NotebookError {
    /// Error when reading a notebook file from disk
    #[error("Failed to read notebook: {0}")]
    ReadFailed(String),

    /// Error when the file content is not valid notebook JSON
    #[error("Failed to parse notebook: {0}")]
    ParseFailed(String),

    /// Error when writing a notebook file back to disk
    #[error("Failed to write notebook: {0}")]
    WriteFailed(String),
}

/// Errors that can occur while running validation checks
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A single check raised an internal error
    #[error("Check '{check}' failed internally: {message}")]
    CheckFailed {
        /// Name of the check that raised
        check: String,
        /// Error message from the check
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from notebook IO
    #[error("Notebook error: {0}")]
    Notebook(#[from] NotebookError),

    /// Error from validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

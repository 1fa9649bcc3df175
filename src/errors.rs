/*!
 * Error types for the subfreq application.
 *
 * This module contains the application error type, using the thiserror
 * crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input path does not exist or is not a readable file
    #[error("Input file not found or unreadable: {0}")]
    InputNotFound(PathBuf),

    /// Input file is not an SRT or ASS subtitle
    #[error("Unsupported subtitle format: {0} (expected .srt or .ass)")]
    UnsupportedFormat(PathBuf),

    /// Output destination cannot be written
    #[error("Cannot write output: {0}")]
    OutputWrite(String),

    /// Interactive picker dismissed without a selection
    #[error("Cancelled by user")]
    UserCancelled,
}

impl AppError {
    /// Process exit code for this error. Dismissing the picker is a clean
    /// exit, not a failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UserCancelled => 0,
            _ => 1,
        }
    }
}

//! Picker error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file selection
#[derive(Debug, Error)]
pub enum PickerError {
    /// IO error during scanning or prompting
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Selection aborted by the user
    ///
    /// Only produced under [`CancelBehavior::Fail`](super::CancelBehavior);
    /// the default behavior reports cancellation as an empty selection.
    #[error("Selection cancelled by user")]
    Cancelled,

    /// Nothing under the scan root passed the accepted-entries filter
    #[error("No selectable files under {}", root.display())]
    NoCandidates {
        /// Directory the scan started from
        root: PathBuf,
    },

    /// An accepted-entries filter entry could not be compiled
    #[error("Invalid filter entry '{entry}': {reason}")]
    InvalidFilter {
        /// The offending entry
        entry: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

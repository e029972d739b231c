//! Pickup - interactive file selection, reading and uploading
//!
//! This library lets a user choose one or more local files through a
//! terminal prompt, read the chosen files as UTF-8 text, and upload files
//! to an HTTP endpoint as a multipart form.
//!
//! The three concerns live in separate modules:
//!
//! - [`picker`] - candidate discovery and the interactive prompt
//! - [`content`] - decoding selected files as UTF-8 text
//! - [`upload`] - multipart form assembly and HTTP submission

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod picker;
pub mod upload;

#[cfg(test)]
pub mod testing;

pub use content::FileText;
pub use picker::{CancelBehavior, FilePicker, PickerConfig, SelectedFile};
pub use upload::{RequestOptions, UploadMethod, UploadSource};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickupError {
    /// File selection error
    #[error("Picker error: {0}")]
    Picker(#[from] picker::PickerError),
    /// Text extraction error
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
    /// Upload error
    #[error("Upload error: {0}")]
    Upload(#[from] upload::UploadError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

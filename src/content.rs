//! UTF-8 text extraction from selected files
//!
//! Single and batch reads, plus the combined select-and-read operations.
//! Batch reads fan out across the rayon pool; every file gets its own
//! independent read and the first failure in input order rejects the
//! whole batch.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use rayon::prelude::*;
use thiserror::Error;

use crate::picker::{FilePicker, PickerConfig, PickerError, SelectedFile};

/// Errors that can occur while extracting text
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file's bytes are not valid UTF-8
    #[error("Not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        /// The file that failed to decode
        path: PathBuf,
    },

    /// IO error while reading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The selection step failed
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// A selected file's metadata together with its decoded text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileText {
    /// The file the content was read from
    pub file: SelectedFile,
    /// The file's full text, decoded as UTF-8
    pub content: String,
}

/// Read a selected file's bytes as UTF-8 text
///
/// # Errors
///
/// Returns [`ContentError::InvalidUtf8`] when the bytes do not decode,
/// or [`ContentError::Io`] for any other read failure.
pub fn read_text(file: &SelectedFile) -> Result<FileText> {
    let content = fs::read_to_string(&file.path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            ContentError::InvalidUtf8 {
                path: file.path.clone(),
            }
        } else {
            ContentError::Io(e)
        }
    })?;

    Ok(FileText {
        file: file.clone(),
        content,
    })
}

/// Read every selected file as UTF-8 text, preserving input order
///
/// Reads run concurrently on the rayon pool. All-or-nothing: if any file
/// fails to decode the whole batch fails with the first error in input
/// order, and the sibling results are discarded.
///
/// # Errors
///
/// Same failure modes as [`read_text`], for the first failing file.
pub fn read_text_batch(files: &[SelectedFile]) -> Result<Vec<FileText>> {
    let results: Vec<Result<FileText>> = files.par_iter().map(read_text).collect();
    results.into_iter().collect()
}

/// Select a single file and read it as UTF-8 text
///
/// Returns `Ok(None)` when the user cancels under the default
/// cancellation behavior.
///
/// # Errors
///
/// Returns [`ContentError::Picker`] if selection fails, or a decode
/// error for the chosen file.
pub fn pick_one_text<P: FilePicker>(
    picker: &P,
    config: &PickerConfig,
) -> Result<Option<FileText>> {
    match picker.pick_one(config)? {
        Some(file) => Ok(Some(read_text(&file)?)),
        None => Ok(None),
    }
}

/// Select any number of files and read them all as UTF-8 text
///
/// Selection order is preserved in the result. Cancellation yields an
/// empty vector under the default behavior.
///
/// # Errors
///
/// Returns [`ContentError::Picker`] if selection fails, or the batch's
/// first decode error.
pub fn pick_many_text<P: FilePicker>(
    picker: &P,
    config: &PickerConfig,
) -> Result<Vec<FileText>> {
    let files = picker.pick_many(config)?;
    read_text_batch(&files)
}

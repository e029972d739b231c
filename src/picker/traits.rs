//! Core trait and configuration for file selection backends

use std::path::PathBuf;

use super::error::Result;
use super::types::{CancelBehavior, SelectedFile};

/// Configuration for a single picker invocation
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// File-type filter entries
    ///
    /// An entry beginning with `.` matches a file extension
    /// (case-insensitive); any other entry is treated as a glob pattern
    /// matched against the file name. Empty means no restriction.
    pub accepted: Vec<String>,
    /// Directory the candidate scan starts from
    pub root: PathBuf,
    /// Recursion cap for the scan (`None` = unlimited, `Some(0)` = root only)
    pub max_depth: Option<usize>,
    /// Prompt text
    pub prompt: String,
    /// What a user cancellation produces
    pub on_cancel: CancelBehavior,
}

impl PickerConfig {
    /// Create a configuration scanning from the given directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            accepted: Vec::new(),
            root: root.into(),
            max_depth: None,
            prompt: "Select file".to_string(),
            on_cancel: CancelBehavior::default(),
        }
    }

    /// Restrict selectable files to the given filter entries
    #[must_use]
    pub fn with_accepted(mut self, accepted: Vec<String>) -> Self {
        self.accepted = accepted;
        self
    }

    /// Cap scan recursion depth
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the prompt text
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the cancellation behavior
    #[must_use]
    pub const fn with_on_cancel(mut self, behavior: CancelBehavior) -> Self {
        self.on_cancel = behavior;
        self
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Trait for file selection backends
///
/// Abstracts the interactive prompt so the terminal implementation can be
/// swapped for a mock in tests. Every invocation is independent: the
/// backend scans afresh and owns its prompt session for the duration of
/// the call.
pub trait FilePicker {
    /// Select a single file
    ///
    /// Returns `Ok(None)` when the user cancels and the configuration
    /// keeps the default [`CancelBehavior::Empty`].
    ///
    /// # Errors
    ///
    /// Returns an error if the scan or the prompt fails, if nothing under
    /// the root passes the filter, or on cancellation under
    /// [`CancelBehavior::Fail`].
    fn pick_one(&self, config: &PickerConfig) -> Result<Option<SelectedFile>>;

    /// Select any number of files
    ///
    /// Confirmed selections are returned in listing order. Cancellation
    /// yields an empty vector under the default behavior.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FilePicker::pick_one`].
    fn pick_many(&self, config: &PickerConfig) -> Result<Vec<SelectedFile>>;
}

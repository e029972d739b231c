//! Terminal prompt backend using dialoguer
//!
//! Presents the scanned candidate listing as a fuzzy single-select or a
//! multi-select. Esc cancels; dialoguer restores the terminal on every
//! exit path, so a failed or cancelled interaction leaves no state
//! behind.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, MultiSelect};

use super::error::{PickerError, Result};
use super::scan::scan;
use super::traits::{FilePicker, PickerConfig};
use super::types::{CancelBehavior, SelectedFile};

/// Interactive picker backed by a terminal prompt
pub struct PromptPicker {
    theme: ColorfulTheme,
}

impl PromptPicker {
    /// Create a new prompt-backed picker
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn candidates(config: &PickerConfig) -> Result<Vec<SelectedFile>> {
        let candidates = scan(config)?;
        if candidates.is_empty() {
            return Err(PickerError::NoCandidates {
                root: config.root.clone(),
            });
        }
        Ok(candidates)
    }

    fn cancelled<T>(config: &PickerConfig, empty: T) -> Result<T> {
        match config.on_cancel {
            CancelBehavior::Empty => Ok(empty),
            CancelBehavior::Fail => Err(PickerError::Cancelled),
        }
    }
}

impl Default for PromptPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePicker for PromptPicker {
    fn pick_one(&self, config: &PickerConfig) -> Result<Option<SelectedFile>> {
        let mut candidates = Self::candidates(config)?;
        let labels: Vec<String> = candidates.iter().map(SelectedFile::display_label).collect();

        let choice = FuzzySelect::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| PickerError::Io(io::Error::other(e)))?;

        match choice {
            Some(index) => Ok(Some(candidates.swap_remove(index))),
            None => Self::cancelled(config, None),
        }
    }

    fn pick_many(&self, config: &PickerConfig) -> Result<Vec<SelectedFile>> {
        let candidates = Self::candidates(config)?;
        let labels: Vec<String> = candidates.iter().map(SelectedFile::display_label).collect();

        let choice = MultiSelect::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .items(&labels)
            .interact_opt()
            .map_err(|e| PickerError::Io(io::Error::other(e)))?;

        match choice {
            Some(indices) => {
                // MultiSelect reports indices in listing order
                let mut picked: Vec<Option<SelectedFile>> =
                    candidates.into_iter().map(Some).collect();
                Ok(indices
                    .into_iter()
                    .filter_map(|i| picked.get_mut(i).and_then(Option::take))
                    .collect())
            }
            None => Self::cancelled(config, Vec::new()),
        }
    }
}

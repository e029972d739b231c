//! Mock picker for testing

use std::path::PathBuf;

use super::error::{PickerError, Result};
use super::traits::{FilePicker, PickerConfig};
use super::types::{CancelBehavior, SelectedFile};

/// Mock picker that returns predetermined selections
///
/// Useful for testing without requiring user interaction. The configured
/// paths must exist, since their metadata is read just like the real
/// backend would.
#[derive(Debug, Clone)]
pub struct MockPicker {
    /// Paths to return as selected, in order
    pub predetermined_selection: Vec<PathBuf>,
    /// Whether to simulate user cancellation
    pub should_cancel: bool,
}

impl MockPicker {
    /// Create a new mock picker with predetermined selections
    #[must_use]
    pub fn new(selections: Vec<PathBuf>) -> Self {
        Self {
            predetermined_selection: selections,
            should_cancel: false,
        }
    }

    /// Create a mock picker that simulates user cancellation
    #[must_use]
    pub fn cancelled() -> Self {
        Self {
            predetermined_selection: Vec::new(),
            should_cancel: true,
        }
    }
}

impl Default for MockPicker {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FilePicker for MockPicker {
    fn pick_one(&self, config: &PickerConfig) -> Result<Option<SelectedFile>> {
        if self.should_cancel {
            return match config.on_cancel {
                CancelBehavior::Empty => Ok(None),
                CancelBehavior::Fail => Err(PickerError::Cancelled),
            };
        }

        match self.predetermined_selection.first() {
            Some(path) => Ok(Some(SelectedFile::from_path(path, Some(&config.root))?)),
            None => Ok(None),
        }
    }

    fn pick_many(&self, config: &PickerConfig) -> Result<Vec<SelectedFile>> {
        if self.should_cancel {
            return match config.on_cancel {
                CancelBehavior::Empty => Ok(Vec::new()),
                CancelBehavior::Fail => Err(PickerError::Cancelled),
            };
        }

        self.predetermined_selection
            .iter()
            .map(|path| Ok(SelectedFile::from_path(path, Some(&config.root))?))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_mock_picker_single_selection() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "one.txt", "1");

        let picker = MockPicker::new(vec![path]);
        let config = PickerConfig::new(dir.path());
        let file = picker.pick_one(&config).unwrap().unwrap();
        assert_eq!(file.name, "one.txt");
    }

    #[test]
    fn test_mock_picker_preserves_selection_order() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "a");
        let b = write_file(dir.path(), "b.txt", "b");
        let c = write_file(dir.path(), "c.txt", "c");

        let picker = MockPicker::new(vec![c, a, b]);
        let config = PickerConfig::new(dir.path());
        let files = picker.pick_many(&config).unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0].name, "c.txt");
        assert_eq!(files[1].name, "a.txt");
        assert_eq!(files[2].name, "b.txt");
    }

    #[test]
    fn test_mock_picker_cancelled_resolves_empty() {
        let dir = tempdir().unwrap();
        let picker = MockPicker::cancelled();
        let config = PickerConfig::new(dir.path());

        assert!(picker.pick_one(&config).unwrap().is_none());
        assert!(picker.pick_many(&config).unwrap().is_empty());
    }

    #[test]
    fn test_mock_picker_cancelled_fails_when_configured() {
        let dir = tempdir().unwrap();
        let picker = MockPicker::cancelled();
        let config = PickerConfig::new(dir.path()).with_on_cancel(CancelBehavior::Fail);

        assert!(matches!(
            picker.pick_one(&config),
            Err(PickerError::Cancelled)
        ));
        assert!(matches!(
            picker.pick_many(&config),
            Err(PickerError::Cancelled)
        ));
    }

    #[test]
    fn test_mock_picker_empty_selection() {
        let dir = tempdir().unwrap();
        let picker = MockPicker::default();
        let config = PickerConfig::new(dir.path());

        assert!(picker.pick_one(&config).unwrap().is_none());
        assert!(picker.pick_many(&config).unwrap().is_empty());
    }
}

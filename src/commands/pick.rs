//! Pick command - select files and print their paths

use byte_unit::{Byte, UnitType};
use chrono::DateTime;

use crate::PickupError;
use crate::picker::{FilePicker, PickerConfig, SelectedFile};

type Result<T> = std::result::Result<T, PickupError>;

/// Execute the pick command - select files and print them
///
/// Quiet mode prints bare paths; normal mode adds size and modified
/// time. A cancelled selection prints a note and exits cleanly.
///
/// # Errors
/// Returns an error if the scan or the prompt fails.
pub fn execute<P: FilePicker>(
    picker: &P,
    config: &PickerConfig,
    multi: bool,
    quiet: bool,
) -> Result<()> {
    let files: Vec<SelectedFile> = if multi {
        picker.pick_many(config)?
    } else {
        picker.pick_one(config)?.into_iter().collect()
    };

    if files.is_empty() {
        if !quiet {
            println!("Selection cancelled.");
        }
        return Ok(());
    }

    for file in &files {
        if quiet {
            println!("{}", file.path.display());
        } else {
            println!("{}", describe(file));
        }
    }
    Ok(())
}

fn describe(file: &SelectedFile) -> String {
    let size = Byte::from_u64(file.size)
        .get_appropriate_unit(UnitType::Binary)
        .to_string();
    let modified = DateTime::from_timestamp_millis(file.modified_ms)
        .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());
    format!("{}  {}  {}", file.path.display(), size, modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::MockPicker;
    use crate::testing::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_execute_single_selection() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "a.txt", "a");

        let picker = MockPicker::new(vec![path]);
        let config = PickerConfig::new(dir.path());
        assert!(execute(&picker, &config, false, true).is_ok());
    }

    #[test]
    fn test_execute_multi_selection() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "a");
        let b = write_file(dir.path(), "b.txt", "b");

        let picker = MockPicker::new(vec![a, b]);
        let config = PickerConfig::new(dir.path());
        assert!(execute(&picker, &config, true, false).is_ok());
    }

    #[test]
    fn test_execute_cancelled_is_ok() {
        let dir = tempdir().unwrap();
        let picker = MockPicker::cancelled();
        let config = PickerConfig::new(dir.path());
        assert!(execute(&picker, &config, false, true).is_ok());
        assert!(execute(&picker, &config, true, true).is_ok());
    }

    #[test]
    fn test_describe_contains_path_and_size() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "sized.txt", &"x".repeat(4096));
        let file = SelectedFile::from_path(&path, None).unwrap();

        let line = describe(&file);
        assert!(line.contains("sized.txt"));
        assert!(line.contains("KiB"));
    }
}

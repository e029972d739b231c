//! Testing utilities for pickup
//!
//! Helper functions for writing tests that need real files on disk.
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};

/// Create a text file inside `dir`, returning its path
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Create a file with raw bytes inside `dir`, returning its path
///
/// Useful for fixtures that must not be valid UTF-8.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_bytes(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "note.txt", "content");

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_bytes_round_trip() {
        let dir = tempdir().unwrap();
        let data = [0u8, 159, 146, 150];
        let path = write_bytes(dir.path(), "raw.bin", &data);

        assert_eq!(fs::read(&path).unwrap(), data);
    }
}

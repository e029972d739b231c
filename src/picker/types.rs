//! Common types for the file selection layer

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use byte_unit::{Byte, UnitType};
use serde::{Deserialize, Serialize};

/// What a user cancellation of the prompt produces
///
/// The picker can either treat cancellation as a normal, empty outcome or
/// surface it as an error. The default reports an empty selection
/// (`Ok(None)` / `Ok(vec![])`), which keeps cancellation out of the error
/// path for callers that expect it as routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CancelBehavior {
    /// Cancellation resolves to an empty selection
    #[default]
    Empty,
    /// Cancellation is reported as `PickerError::Cancelled`
    Fail,
}

impl CancelBehavior {
    /// String form used in the configuration file
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fail => "fail",
        }
    }
}

/// Handle to a user-chosen file
///
/// Plain data with no cross-call identity; every picker invocation
/// produces fresh instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Absolute path of the chosen file
    pub path: PathBuf,
    /// File name without directory components
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type derived from the extension, empty when unknown
    pub media_type: String,
    /// Last modification time in epoch milliseconds, 0 when unavailable
    pub modified_ms: i64,
    /// Path relative to the scan root, `None` for directly supplied paths
    pub relative_path: Option<PathBuf>,
}

impl SelectedFile {
    /// Build a `SelectedFile` from a filesystem path
    ///
    /// When `root` is given and is a prefix of `path`, the stripped
    /// remainder becomes `relative_path`.
    ///
    /// # Errors
    /// Returns an `io::Error` if the file's metadata cannot be read.
    pub fn from_path(path: impl AsRef<Path>, root: Option<&Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let modified_ms = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map_or(0, |d| d.as_millis() as i64);

        let relative_path = root
            .and_then(|r| path.strip_prefix(r).ok())
            .map(Path::to_path_buf);

        Ok(Self {
            media_type: media_type_for(path).to_string(),
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            modified_ms,
            relative_path,
        })
    }

    /// Label shown in the prompt listing: relative path plus size
    #[must_use]
    pub fn display_label(&self) -> String {
        let shown = self
            .relative_path
            .as_deref()
            .map_or_else(|| self.name.clone(), |p| p.display().to_string());
        let size = Byte::from_u64(self.size)
            .get_appropriate_unit(UnitType::Binary)
            .to_string();
        format!("{shown} ({size})")
    }
}

/// MIME type for a path, derived from its extension
///
/// Returns an empty string for unknown or missing extensions.
#[must_use]
pub fn media_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };

    match ext.to_ascii_lowercase().as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "toml" => "application/toml",
        "yaml" | "yml" => "application/yaml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_cancel_behavior_default_is_empty() {
        assert_eq!(CancelBehavior::default(), CancelBehavior::Empty);
        assert_eq!(CancelBehavior::Empty.as_str(), "empty");
        assert_eq!(CancelBehavior::Fail.as_str(), "fail");
    }

    #[test]
    fn test_selected_file_from_path() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "notes.txt", "hello");

        let file = SelectedFile::from_path(&path, Some(dir.path())).unwrap();
        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.size, 5);
        assert_eq!(file.media_type, "text/plain");
        assert_eq!(file.relative_path, Some(PathBuf::from("notes.txt")));
        assert!(file.modified_ms > 0);
    }

    #[test]
    fn test_selected_file_without_root() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "data.bin", "x");

        let file = SelectedFile::from_path(&path, None).unwrap();
        assert!(file.relative_path.is_none());
        assert_eq!(file.media_type, "");
    }

    #[test]
    fn test_selected_file_nested_relative_path() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let path = write_file(&dir.path().join("sub"), "a.md", "# a");

        let file = SelectedFile::from_path(&path, Some(dir.path())).unwrap();
        assert_eq!(file.relative_path, Some(PathBuf::from("sub").join("a.md")));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SelectedFile::from_path("/nonexistent/file.txt", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_media_type_known_extensions() {
        assert_eq!(media_type_for(Path::new("a.json")), "application/json");
        assert_eq!(media_type_for(Path::new("b.PNG")), "image/png");
        assert_eq!(media_type_for(Path::new("c.tar")), "application/x-tar");
    }

    #[test]
    fn test_media_type_unknown_is_empty() {
        assert_eq!(media_type_for(Path::new("a.xyz")), "");
        assert_eq!(media_type_for(Path::new("no_extension")), "");
    }

    #[test]
    fn test_display_label_uses_relative_path() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "big.log", &"x".repeat(2048));

        let file = SelectedFile::from_path(&path, Some(dir.path())).unwrap();
        let label = file.display_label();
        assert!(label.starts_with("big.log ("));
        assert!(label.contains("KiB"));
    }
}

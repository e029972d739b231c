//! Multipart form assembly
//!
//! Splitting assembly from submission keeps the field-naming rules a
//! pure, testable step: [`FormSpec::from_source`] decides field names and
//! order, [`FormSpec::into_form`] materializes the reqwest form.

use std::path::PathBuf;

use reqwest::blocking::multipart::Form;

use super::error::{Result, UploadError};

/// Files to include in an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// One file, bound to the synthetic field name `file0`
    Single(PathBuf),
    /// An ordered sequence, bound to `file0`, `file1`, ... in order
    Ordered(Vec<PathBuf>),
    /// Caller-named fields, used verbatim in pair order
    Named(Vec<(String, PathBuf)>),
}

impl UploadSource {
    /// Build a source from a list of paths
    ///
    /// One path becomes [`UploadSource::Single`]; anything else becomes
    /// [`UploadSource::Ordered`].
    #[must_use]
    pub fn from_paths(mut paths: Vec<PathBuf>) -> Self {
        if paths.len() == 1 {
            Self::Single(paths.remove(0))
        } else {
            Self::Ordered(paths)
        }
    }
}

/// One part of a multipart form: a field name bound to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Field name as it appears in the form
    pub field: String,
    /// File backing the part
    pub path: PathBuf,
}

/// Ordered description of a multipart form, prior to materialization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSpec {
    parts: Vec<FormPart>,
}

impl FormSpec {
    /// Derive the form's parts from an upload source
    #[must_use]
    pub fn from_source(source: &UploadSource) -> Self {
        let parts = match source {
            UploadSource::Single(path) => vec![FormPart {
                field: "file0".to_string(),
                path: path.clone(),
            }],
            UploadSource::Ordered(paths) => paths
                .iter()
                .enumerate()
                .map(|(i, path)| FormPart {
                    field: format!("file{i}"),
                    path: path.clone(),
                })
                .collect(),
            UploadSource::Named(pairs) => pairs
                .iter()
                .map(|(field, path)| FormPart {
                    field: field.clone(),
                    path: path.clone(),
                })
                .collect(),
        };
        Self { parts }
    }

    /// The ordered parts of the form
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Materialize the multipart form
    ///
    /// Each part's file name and MIME type come from its path; unknown
    /// types fall back to `application/octet-stream`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Form`] naming the first part whose file
    /// cannot be read.
    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for part in self.parts {
            form = form
                .file(part.field, &part.path)
                .map_err(|source| UploadError::Form {
                    path: part.path,
                    source,
                })?;
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use tempfile::tempdir;

    fn fields(spec: &FormSpec) -> Vec<&str> {
        spec.parts().iter().map(|p| p.field.as_str()).collect()
    }

    #[test]
    fn test_single_file_is_file0() {
        let source = UploadSource::Single(PathBuf::from("a.txt"));
        let spec = FormSpec::from_source(&source);

        assert_eq!(fields(&spec), vec!["file0"]);
        assert_eq!(spec.parts()[0].path, PathBuf::from("a.txt"));
    }

    #[test]
    fn test_ordered_sequence_field_names() {
        let source = UploadSource::Ordered(vec![
            PathBuf::from("first.txt"),
            PathBuf::from("second.txt"),
            PathBuf::from("third.txt"),
        ]);
        let spec = FormSpec::from_source(&source);

        assert_eq!(fields(&spec), vec!["file0", "file1", "file2"]);
        assert_eq!(spec.parts()[1].path, PathBuf::from("second.txt"));
    }

    #[test]
    fn test_named_fields_used_verbatim() {
        let source = UploadSource::Named(vec![
            ("avatar".to_string(), PathBuf::from("me.png")),
            ("resume".to_string(), PathBuf::from("cv.pdf")),
        ]);
        let spec = FormSpec::from_source(&source);

        assert_eq!(fields(&spec), vec!["avatar", "resume"]);
        assert_eq!(spec.parts()[0].path, PathBuf::from("me.png"));
        assert_eq!(spec.parts()[1].path, PathBuf::from("cv.pdf"));
    }

    #[test]
    fn test_empty_sequence_yields_empty_spec() {
        let spec = FormSpec::from_source(&UploadSource::Ordered(Vec::new()));
        assert!(spec.parts().is_empty());
    }

    #[test]
    fn test_from_paths_single_vs_ordered() {
        let one = UploadSource::from_paths(vec![PathBuf::from("a")]);
        assert_eq!(one, UploadSource::Single(PathBuf::from("a")));

        let two = UploadSource::from_paths(vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(matches!(two, UploadSource::Ordered(ref v) if v.len() == 2));
    }

    #[test]
    fn test_into_form_with_real_files() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "aaa");
        let b = write_file(dir.path(), "b.txt", "bbb");

        let spec = FormSpec::from_source(&UploadSource::Ordered(vec![a, b]));
        assert!(spec.into_form().is_ok());
    }

    #[test]
    fn test_into_form_missing_file_names_the_part() {
        let missing = PathBuf::from("/nonexistent/part.txt");
        let spec = FormSpec::from_source(&UploadSource::Single(missing.clone()));

        let result = spec.into_form();
        assert!(matches!(
            result,
            Err(UploadError::Form { path, .. }) if path == missing
        ));
    }
}

//! Candidate discovery for the picker
//!
//! Walks the configured root directory, applies the accepted-entries
//! filter and produces the ordered listing the prompt presents. Hidden
//! files and directories (names starting with `.`) are skipped.

use std::fs;
use std::path::Path;

use glob::Pattern as GlobPattern;

use super::error::{PickerError, Result};
use super::traits::PickerConfig;
use super::types::SelectedFile;

/// Compiled accepted-entries filter
///
/// Entries beginning with `.` are collected as case-insensitive extension
/// matches; everything else is compiled as a glob pattern against the
/// file name. An empty filter matches every file.
struct AcceptFilter {
    extensions: Vec<String>,
    patterns: Vec<GlobPattern>,
}

impl AcceptFilter {
    fn new(entries: &[String]) -> Result<Self> {
        let mut extensions = Vec::new();
        let mut patterns = Vec::new();

        for entry in entries {
            if entry.is_empty() {
                continue;
            }
            if let Some(ext) = entry.strip_prefix('.') {
                extensions.push(ext.to_ascii_lowercase());
            } else {
                let pattern =
                    GlobPattern::new(entry).map_err(|e| PickerError::InvalidFilter {
                        entry: entry.clone(),
                        reason: e.to_string(),
                    })?;
                patterns.push(pattern);
            }
        }

        Ok(Self {
            extensions,
            patterns,
        })
    }

    fn matches(&self, name: &str) -> bool {
        if self.extensions.is_empty() && self.patterns.is_empty() {
            return true;
        }

        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        if let Some(ext) = ext
            && self.extensions.iter().any(|e| *e == ext)
        {
            return true;
        }

        self.patterns.iter().any(|p| p.matches(name))
    }
}

/// Scan for selectable files under the configured root
///
/// Returns candidates sorted by path for a deterministic listing. An
/// empty result is not an error here; the prompt backends turn it into
/// [`PickerError::NoCandidates`].
///
/// # Errors
///
/// Returns an error if a filter entry cannot be compiled or the walk
/// hits an I/O failure.
pub fn scan(config: &PickerConfig) -> Result<Vec<SelectedFile>> {
    let filter = AcceptFilter::new(&config.accepted)?;
    let mut found = Vec::new();
    walk(&config.root, config, &filter, 0, &mut found)?;
    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

fn walk(
    dir: &Path,
    config: &PickerConfig,
    filter: &AcceptFilter,
    depth: usize,
    found: &mut Vec<SelectedFile>,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            if config.max_depth.is_none_or(|max| depth < max) {
                walk(&path, config, filter, depth + 1, found)?;
            }
        } else if path.is_file() && filter.matches(name) {
            found.push(SelectedFile::from_path(&path, Some(&config.root))?);
        }
    }
    Ok(())
}

//! Content discovery for a single directory level.
//!
//! The scanner lists one directory and classifies its children into content
//! files (leaves) and subdirectories (branches). It never recurses: the
//! builder drives the walk and decides what to do with each level.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NavError;

/// Index stem that always sorts first within its level.
pub(crate) const INDEX_STEM: &str = "index";

/// Kind of a discovered filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// Content file.
    Leaf,
    /// Directory that may contain content.
    Branch,
}

/// A filesystem entry discovered during a scan.
#[derive(Debug, Clone)]
pub(crate) struct ContentNode {
    /// File stem for leaves, directory name for branches.
    pub name: String,
    /// Full file name, used as the sort key.
    pub file_name: String,
    /// Location on disk.
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// Options controlling which entries count as content.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extension (without the dot) that marks a content file.
    pub extension: String,
    /// Whether to ignore dot-prefixed files and directories.
    pub skip_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "md".to_owned(),
            skip_hidden: false,
        }
    }
}

/// Children of one directory, already sorted for navigation.
#[derive(Debug, Default)]
pub(crate) struct DirectoryLevel {
    /// Content files: index first, then by file name.
    pub files: Vec<ContentNode>,
    /// Subdirectories by name.
    pub dirs: Vec<ContentNode>,
}

/// Lists directory levels according to [`ScanOptions`].
pub(crate) struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Read the direct children of `dir_path`.
    ///
    /// Symbolic links are followed. Entries whose metadata cannot be read
    /// (e.g. dangling links) are skipped. Content files and directories must
    /// have UTF-8 names, since their names end up in the navigation output.
    pub fn scan_level(&self, dir_path: &Path) -> Result<DirectoryLevel, NavError> {
        let entries = fs::read_dir(dir_path).map_err(|source| NavError::ReadDir {
            path: dir_path.to_path_buf(),
            source,
        })?;

        let mut level = DirectoryLevel::default();

        for entry in entries {
            let entry = entry.map_err(|source| NavError::ReadDir {
                path: dir_path.to_path_buf(),
                source,
            })?;
            let raw_name = entry.file_name();

            if self.options.skip_hidden && raw_name.as_encoded_bytes().starts_with(b".") {
                continue;
            }

            let path = entry.path();
            // fs::metadata follows symlinks, DirEntry::file_type does not
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable entry"
                    );
                    continue;
                }
            };

            if metadata.is_dir() {
                let file_name = utf8_name(raw_name, &path)?;
                level.dirs.push(ContentNode {
                    name: file_name.clone(),
                    file_name,
                    path,
                    kind: NodeKind::Branch,
                });
            } else if metadata.is_file() && self.is_content_file(&path) {
                let file_name = utf8_name(raw_name, &path)?;
                let name = file_name
                    .rsplit_once('.')
                    .map_or(file_name.as_str(), |(stem, _)| stem)
                    .to_owned();
                level.files.push(ContentNode {
                    name,
                    file_name,
                    path,
                    kind: NodeKind::Leaf,
                });
            }
        }

        level.files.sort_by(|a, b| {
            (a.name != INDEX_STEM, &a.file_name).cmp(&(b.name != INDEX_STEM, &b.file_name))
        });
        level.dirs.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Ok(level)
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.options.extension.as_str())
    }
}

/// Require a UTF-8 entry name.
fn utf8_name(name: OsString, path: &Path) -> Result<String, NavError> {
    name.into_string()
        .map_err(|_| NavError::NonUtf8Path(path.to_path_buf()))
}

/// Convert a path under `root` to a `/`-separated relative path.
///
/// Examples (root `/docs`):
/// - `/docs/index.md` -> `"index.md"`
/// - `/docs/guides/setup.md` -> `"guides/setup.md"`
pub(crate) fn relative_url_path(root: &Path, path: &Path) -> Result<String, NavError> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let segments = relative
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
                .ok_or_else(|| NavError::NonUtf8Path(path.to_path_buf()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(segments.join("/"))
}

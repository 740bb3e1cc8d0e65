//! Recursive navigation builder.

use std::path::{Path, PathBuf};

use crate::entry::NavEntry;
use crate::error::NavError;
use crate::scanner::{ContentNode, NodeKind, ScanOptions, Scanner, relative_url_path};
use crate::title::title_from_name;

/// Builds a navigation tree from a content root directory.
///
/// Each directory level yields its content files (index first, then by
/// name) followed by its non-empty subdirectories (by name). Directories
/// without any content below them are omitted.
///
/// # Example
///
/// ```no_run
/// use mkconf_nav::NavBuilder;
///
/// let nav = NavBuilder::new("docs").build()?;
/// for entry in &nav {
///     println!("{}", entry.title());
/// }
/// # Ok::<(), mkconf_nav::NavError>(())
/// ```
pub struct NavBuilder {
    root: PathBuf,
    scanner: Scanner,
}

impl NavBuilder {
    /// Create a builder for `root` with default [`ScanOptions`].
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    /// Create a builder for `root` with custom scan options.
    #[must_use]
    pub fn with_options(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            scanner: Scanner::new(options),
        }
    }

    /// Scan the content root and build the navigation tree.
    ///
    /// An empty root yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::RootNotFound`] or [`NavError::NotADirectory`] for a
    /// bad root, [`NavError::ReadDir`] if any directory cannot be listed, and
    /// [`NavError::NonUtf8Path`] if a content file or directory name is not
    /// valid UTF-8.
    pub fn build(&self) -> Result<Vec<NavEntry>, NavError> {
        if !self.root.exists() {
            return Err(NavError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(NavError::NotADirectory(self.root.clone()));
        }

        let nav = self.build_level(&self.root)?;
        tracing::debug!(
            root = %self.root.display(),
            entries = nav.len(),
            "Built navigation"
        );
        Ok(nav)
    }

    /// Build entries for one directory: files first, then subdirectories.
    fn build_level(&self, dir_path: &Path) -> Result<Vec<NavEntry>, NavError> {
        let level = self.scanner.scan_level(dir_path)?;

        let mut entries = Vec::with_capacity(level.files.len() + level.dirs.len());
        for node in level.files.iter().chain(&level.dirs) {
            if let Some(entry) = self.entry_for(node)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    fn entry_for(&self, node: &ContentNode) -> Result<Option<NavEntry>, NavError> {
        let title = title_from_name(&node.name);
        match node.kind {
            NodeKind::Leaf => Ok(Some(NavEntry::Page {
                title,
                path: relative_url_path(&self.root, &node.path)?,
            })),
            NodeKind::Branch => {
                let children = self.build_level(&node.path)?;
                if children.is_empty() {
                    tracing::debug!(
                        path = %node.path.display(),
                        "Pruning directory without content"
                    );
                    return Ok(None);
                }
                Ok(Some(NavEntry::Section { title, children }))
            }
        }
    }
}

/// Build the navigation tree for `root` with default options.
///
/// # Errors
///
/// See [`NavBuilder::build`].
pub fn build_nav(root: impl Into<PathBuf>) -> Result<Vec<NavEntry>, NavError> {
    NavBuilder::new(root).build()
}

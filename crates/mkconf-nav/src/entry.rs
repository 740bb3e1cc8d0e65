//! Navigation entry model.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One navigation item: a title paired with a page path or nested entries.
///
/// Serializes as a single-key map, the layout `mkdocs.yml` expects:
///
/// ```yaml
/// - Home: index.md
/// - Guides:
///   - Setup: guides/setup.md
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    /// A content file.
    Page {
        /// Display title.
        title: String,
        /// Path relative to the content root, `/`-separated.
        path: String,
    },
    /// A directory with at least one page somewhere below it.
    Section {
        /// Display title.
        title: String,
        /// Child entries, never empty.
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Display title of this entry.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Page { title, .. } | Self::Section { title, .. } => title,
        }
    }

    /// Collect every page path in this subtree, depth-first.
    #[must_use]
    pub fn page_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        self.collect_paths(&mut paths);
        paths
    }

    /// Number of pages in this subtree.
    #[must_use]
    pub fn page_count(&self) -> usize {
        match self {
            Self::Page { .. } => 1,
            Self::Section { children, .. } => children.iter().map(Self::page_count).sum(),
        }
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Page { path, .. } => out.push(path),
            Self::Section { children, .. } => {
                for child in children {
                    child.collect_paths(out);
                }
            }
        }
    }
}

impl Serialize for NavEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Page { title, path } => map.serialize_entry(title, path)?,
            Self::Section { title, children } => map.serialize_entry(title, children)?,
        }
        map.end()
    }
}

//! Navigation tree discovery for mkconf.
//!
//! Walks a documentation content root and produces the ordered, nested
//! `nav` structure of an `mkdocs.yml` file:
//!
//! - Content files become pages titled from their stem (`index` is "Home")
//! - Subdirectories with content become sections
//! - Within a level: index first, other files by name, then sections by name
//!
//! # Example
//!
//! ```no_run
//! use mkconf_nav::build_nav;
//!
//! let nav = build_nav("docs")?;
//! let yaml = serde_yaml::to_string(&nav).unwrap();
//! # Ok::<(), mkconf_nav::NavError>(())
//! ```

mod builder;
mod entry;
mod error;
mod scanner;
mod title;

pub use builder::{NavBuilder, build_nav};
pub use entry::NavEntry;
pub use error::NavError;
pub use scanner::ScanOptions;
pub use title::title_from_name;

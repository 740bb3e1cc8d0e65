//! Output document assembly.
//!
//! Combines site settings with the navigation tree and writes the result as
//! YAML. Keys follow the conventional `mkdocs.yml` layout rather than
//! alphabetical order.

use std::fs;
use std::path::Path;

use mkconf_config::SiteSettings;
use mkconf_nav::NavEntry;
use serde::Serialize;

use crate::error::CliError;

/// The generated `mkdocs.yml` document.
///
/// Field order is the output key order.
#[derive(Debug, Serialize)]
pub(crate) struct MkdocsDocument<'a> {
    #[serde(flatten)]
    site: &'a SiteSettings,
    nav: &'a [NavEntry],
}

impl<'a> MkdocsDocument<'a> {
    pub(crate) fn new(site: &'a SiteSettings, nav: &'a [NavEntry]) -> Self {
        Self { site, nav }
    }

    /// Render the document as YAML.
    pub(crate) fn render(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Render and write the document, replacing any existing file.
    pub(crate) fn write_to(&self, path: &Path) -> Result<(), CliError> {
        let yaml = self.render()?;
        fs::write(path, yaml).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Wrote configuration");
        Ok(())
    }
}

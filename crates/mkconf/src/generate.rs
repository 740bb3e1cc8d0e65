//! Configuration generation.

use std::path::PathBuf;

use clap::Args;
use mkconf_config::{CliSettings, Config};
use mkconf_nav::{NavBuilder, NavEntry, ScanOptions};

use crate::document::MkdocsDocument;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for generating the configuration file.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Documentation content directory (default: docs).
    #[arg(short, long, env = "MKCONF_DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Output file (default: mkdocs.yml).
    #[arg(short, long, env = "MKCONF_OUTPUT")]
    output: Option<PathBuf>,

    /// Environment file with site settings (default: .env if present).
    #[arg(short, long)]
    env_file: Option<PathBuf>,

    /// Leave dot-prefixed files and directories out of navigation.
    #[arg(long)]
    skip_hidden: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Build navigation and write the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded, the content directory
    /// cannot be scanned, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            docs_dir: self.docs_dir,
            output_path: self.output,
            skip_hidden: self.skip_hidden.then_some(true),
        };
        let config = Config::load(self.env_file.as_deref(), Some(&cli_settings))?;

        output.inputs(&config);

        let nav = build_navigation(&config)?;
        if nav.is_empty() {
            output.no_content(&config.docs_dir);
        }

        MkdocsDocument::new(&config.site, &nav).write_to(&config.output_path)?;

        let pages = nav.iter().map(NavEntry::page_count).sum();
        output.generated(&config.output_path, pages);
        Ok(())
    }
}

/// Scan the configured content directory.
fn build_navigation(config: &Config) -> Result<Vec<NavEntry>, CliError> {
    let options = ScanOptions {
        skip_hidden: config.skip_hidden,
        ..ScanOptions::default()
    };
    let nav = NavBuilder::with_options(&config.docs_dir, options).build()?;
    Ok(nav)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn args_for(root: &std::path::Path) -> GenerateArgs {
        let env_file = root.join("site.env");
        fs::write(&env_file, "").unwrap();
        GenerateArgs {
            docs_dir: Some(root.join("docs")),
            output: Some(root.join("mkdocs.yml")),
            env_file: Some(env_file),
            skip_hidden: false,
            verbose: false,
        }
    }

    #[test]
    fn test_execute_writes_nav() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("guides")).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(docs.join("about.md"), "# About").unwrap();
        fs::write(docs.join("guides/setup.md"), "# Setup").unwrap();

        args_for(temp_dir.path()).execute().unwrap();

        let written = fs::read_to_string(temp_dir.path().join("mkdocs.yml")).unwrap();
        let nav_section = &written[written.find("nav:").unwrap()..];
        assert_eq!(
            nav_section,
            "\
nav:
- Home: index.md
- About: about.md
- Guides:
  - Setup: guides/setup.md
"
        );
    }

    #[test]
    fn test_execute_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("b")).unwrap();
        fs::write(docs.join("z.md"), "# Z").unwrap();
        fs::write(docs.join("b/index.md"), "# B").unwrap();
        let output = temp_dir.path().join("mkdocs.yml");

        args_for(temp_dir.path()).execute().unwrap();
        let first = fs::read_to_string(&output).unwrap();
        args_for(temp_dir.path()).execute().unwrap();
        let second = fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_execute_missing_docs_dir_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = args_for(temp_dir.path()).execute().unwrap_err();

        assert!(matches!(err, CliError::Nav(_)), "got {err:?}");
        assert!(!temp_dir.path().join("mkdocs.yml").exists());
    }
}

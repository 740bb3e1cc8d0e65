//! Configuration management for mkconf.
//!
//! Site settings come from environment variables, optionally backed by a
//! dotenv file (`.env` in the working directory by default). Process
//! variables override values from the file.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variables
//!
//! String settings (unset means `null` in the output):
//! - `SITE_NAME`, `SITE_URL`, `REPO_URL`
//! - `THEME_NAME`, `THEME_LANGUAGE`
//!
//! Comma-separated list settings (unset means an empty list):
//! - `THEME_FEATURES`
//! - `MARKDOWN_EXTENSIONS`
//! - `PLUGINS`

mod env;

use std::path::{Path, PathBuf};

use serde::Serialize;

use env::{EnvSource, ProcessLookup, process_var};

pub const SITE_NAME: &str = "SITE_NAME";
pub const SITE_URL: &str = "SITE_URL";
pub const REPO_URL: &str = "REPO_URL";
pub const THEME_NAME: &str = "THEME_NAME";
pub const THEME_LANGUAGE: &str = "THEME_LANGUAGE";
pub const THEME_FEATURES: &str = "THEME_FEATURES";
pub const MARKDOWN_EXTENSIONS: &str = "MARKDOWN_EXTENSIONS";
pub const PLUGINS: &str = "PLUGINS";

/// Dotenv filename looked up in the working directory.
const ENV_FILENAME: &str = ".env";

/// Separator for list-valued settings.
const LIST_SEPARATOR: char = ',';

/// CLI settings that override defaults.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content root directory.
    pub docs_dir: Option<PathBuf>,
    /// Override output file path.
    pub output_path: Option<PathBuf>,
    /// Override hidden entry handling.
    pub skip_hidden: Option<bool>,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    /// Settings written to the output document.
    pub site: SiteSettings,
    /// Content root scanned for navigation.
    pub docs_dir: PathBuf,
    /// Output document path.
    pub output_path: PathBuf,
    /// Whether dot-prefixed entries are left out of navigation.
    pub skip_hidden: bool,
    /// Dotenv file that was loaded, if any.
    pub env_file: Option<PathBuf>,
}

/// Site settings in output document order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    pub site_name: Option<String>,
    pub site_url: Option<String>,
    pub repo_url: Option<String>,
    pub theme: ThemeSettings,
    pub markdown_extensions: Vec<String>,
    pub plugins: Vec<String>,
}

/// Theme section of the output document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSettings {
    pub name: Option<String>,
    pub language: Option<String>,
    pub features: Vec<String>,
}

impl SiteSettings {
    /// Collect settings through a variable lookup function.
    ///
    /// The lookup returns `Ok(None)` for unset variables.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let list = |name| lookup(name).map(|value| split_list(value.as_deref()));

        Ok(Self {
            site_name: lookup(SITE_NAME)?,
            site_url: lookup(SITE_URL)?,
            repo_url: lookup(REPO_URL)?,
            theme: ThemeSettings {
                name: lookup(THEME_NAME)?,
                language: lookup(THEME_LANGUAGE)?,
                features: list(THEME_FEATURES)?,
            },
            markdown_extensions: list(MARKDOWN_EXTENSIONS)?,
            plugins: list(PLUGINS)?,
        })
    }
}

/// Split a comma-separated setting.
///
/// Entries are kept verbatim: no trimming, and stray separators produce
/// empty entries, so a set but empty value yields one empty entry. Only an
/// unset value yields an empty list.
fn split_list(value: Option<&str>) -> Vec<String> {
    value.map_or_else(Vec::new, |value| {
        value.split(LIST_SEPARATOR).map(str::to_owned).collect()
    })
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly requested env file does not exist.
    #[error("Environment file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Env file could not be read or parsed.
    #[error("Failed to load environment file {}: {source}", path.display())]
    EnvFile {
        /// Env file path.
        path: PathBuf,
        /// Underlying dotenv error.
        source: dotenvy::Error,
    },
    /// Environment variable could not be read.
    #[error("Environment variable error in {name}: {message}")]
    EnvVar {
        /// Variable name (e.g., "`SITE_NAME`").
        name: String,
        /// Error message.
        message: String,
    },
}

impl Config {
    /// Load configuration from the environment with optional CLI settings.
    ///
    /// If `env_file` is provided, it must exist. Otherwise `.env` in the
    /// current directory is loaded when present.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `env_file` doesn't exist, the env file
    /// is malformed, or a variable is not valid UTF-8.
    pub fn load(
        env_file: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::load_with_base(&cwd, env_file, cli_settings, process_var)
    }

    fn load_with_base(
        base: &Path,
        env_file: Option<&Path>,
        cli_settings: Option<&CliSettings>,
        process: ProcessLookup,
    ) -> Result<Self, ConfigError> {
        let env_file = match env_file {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Some(base.join(ENV_FILENAME)).filter(|path| path.exists()),
        };

        let source = match &env_file {
            Some(path) => EnvSource::from_dotenv(path, process)?,
            None => EnvSource::new(process),
        };

        let mut config = Self::default_with_base(base);
        config.site = SiteSettings::from_lookup(|name| source.get(name))?;
        config.env_file = env_file;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_dir) = &settings.docs_dir {
            self.docs_dir.clone_from(docs_dir);
        }
        if let Some(output_path) = &settings.output_path {
            self.output_path.clone_from(output_path);
        }
        if let Some(skip_hidden) = settings.skip_hidden {
            self.skip_hidden = skip_hidden;
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSettings::default(),
            docs_dir: base.join("docs"),
            output_path: base.join("mkdocs.yml"),
            skip_hidden: false,
            env_file: None,
        }
    }
}

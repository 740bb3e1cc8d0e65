//! Layered environment lookup.
//!
//! Process environment variables take precedence over values read from a
//! dotenv file, so exported variables can override a checked-in `.env`.

use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use crate::ConfigError;

/// Reads one process environment variable.
pub(crate) type ProcessLookup = fn(&str) -> Result<String, VarError>;

/// Process lookup backed by [`std::env::var`].
pub(crate) fn process_var(name: &str) -> Result<String, VarError> {
    std::env::var(name)
}

/// Environment variables from the process and an optional dotenv file.
pub(crate) struct EnvSource {
    file_vars: HashMap<String, String>,
    process: ProcessLookup,
}

impl EnvSource {
    /// Source with no dotenv file.
    pub fn new(process: ProcessLookup) -> Self {
        Self {
            file_vars: HashMap::new(),
            process,
        }
    }

    /// Read variables from a dotenv file without touching the process environment.
    pub fn from_dotenv(path: &Path, process: ProcessLookup) -> Result<Self, ConfigError> {
        let env_file_error = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut file_vars = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
            let (key, value) = item.map_err(env_file_error)?;
            file_vars.insert(key, value);
        }

        tracing::debug!(path = %path.display(), vars = file_vars.len(), "Loaded env file");
        Ok(Self { file_vars, process })
    }

    /// Look up a variable, preferring the process environment.
    pub fn get(&self, name: &str) -> Result<Option<String>, ConfigError> {
        match (self.process)(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(self.file_vars.get(name).cloned()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::EnvVar {
                name: name.to_owned(),
                message: "value is not valid UTF-8".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_process(name: &str) -> Result<String, VarError> {
        match name {
            "SITE_NAME" => Ok("From Process".to_owned()),
            "BAD_VALUE" => Err(VarError::NotUnicode("caf\u{FFFD}".into())),
            _ => Err(VarError::NotPresent),
        }
    }

    #[test]
    fn test_from_dotenv_reads_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(
            &path,
            "MKCONF_TEST_DOTENV_NAME=\"My Docs\"\n# comment\nMKCONF_TEST_DOTENV_LIST=a,b\n",
        )
        .unwrap();

        let source = EnvSource::from_dotenv(&path, fake_process).unwrap();

        assert_eq!(
            source.get("MKCONF_TEST_DOTENV_NAME").unwrap(),
            Some("My Docs".to_owned())
        );
        assert_eq!(
            source.get("MKCONF_TEST_DOTENV_LIST").unwrap(),
            Some("a,b".to_owned())
        );
        assert_eq!(source.get("MKCONF_TEST_DOTENV_UNSET").unwrap(), None);
    }

    #[test]
    fn test_process_env_wins_over_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "SITE_NAME=From File\nREPO_URL=https://example.com\n").unwrap();

        let source = EnvSource::from_dotenv(&path, fake_process).unwrap();

        assert_eq!(
            source.get("SITE_NAME").unwrap(),
            Some("From Process".to_owned())
        );
        assert_eq!(
            source.get("REPO_URL").unwrap(),
            Some("https://example.com".to_owned())
        );
    }

    #[test]
    fn test_non_unicode_process_value_is_error() {
        let source = EnvSource::new(fake_process);

        let err = source.get("BAD_VALUE").unwrap_err();

        assert!(
            matches!(&err, ConfigError::EnvVar { name, .. } if name == "BAD_VALUE"),
            "Expected ConfigError::EnvVar, got {err:?}"
        );
    }

    #[test]
    fn test_from_dotenv_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = EnvSource::from_dotenv(&temp_dir.path().join("missing.env"), fake_process);

        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }
}

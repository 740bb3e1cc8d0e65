//! Run reporting on stderr.
//!
//! Stdout stays clean; every message about a run goes to stderr, colored
//! when the terminal supports it.

use std::path::Path;

use console::{Style, Term};
use mkconf_config::Config;

use crate::error::CliError;

/// Reports the inputs and outcome of a generation run.
pub(crate) struct Output {
    term: Term,
    done: Style,
    notice: Style,
    failure: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            done: Style::new().green(),
            notice: Style::new().yellow(),
            failure: Style::new().red(),
        }
    }

    /// Report where settings and content are read from.
    pub(crate) fn inputs(&self, config: &Config) {
        if let Some(env_file) = &config.env_file {
            self.write(None, &format!("Settings: {}", env_file.display()));
        }
        self.write(None, &format!("Source: {}", config.docs_dir.display()));
    }

    /// Warn that the content root produced an empty `nav`.
    pub(crate) fn no_content(&self, docs_dir: &Path) {
        self.write(Some(&self.notice), &no_content_message(docs_dir));
    }

    /// Report the written document.
    pub(crate) fn generated(&self, path: &Path, pages: usize) {
        self.write(Some(&self.done), &generated_message(path, pages));
    }

    /// Report a failed run.
    pub(crate) fn failed(&self, err: &CliError) {
        self.write(Some(&self.failure), &format!("Error: {err}"));
    }

    // Reporting is best effort: a closed stderr must not fail the run.
    fn write(&self, style: Option<&Style>, msg: &str) {
        let line = match style {
            Some(style) => style.apply_to(msg).to_string(),
            None => msg.to_owned(),
        };
        self.term.write_line(&line).ok();
    }
}

fn no_content_message(docs_dir: &Path) -> String {
    format!(
        "No content files found in {}, nav will be empty",
        docs_dir.display()
    )
}

fn generated_message(path: &Path, pages: usize) -> String {
    let noun = if pages == 1 { "page" } else { "pages" };
    format!("Wrote {} ({pages} {noun} in nav)", path.display())
}

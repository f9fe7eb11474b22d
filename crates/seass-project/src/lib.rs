//! Project-level runs of the seass linter.
//!
//! This crate owns everything that touches the filesystem: the `seass.toml`
//! configuration, walking the project tree for stylesheets and reading them.
//! The linting itself lives in [`seass_lint`].
//!
//! A run is all-or-nothing. If any file cannot be read, no findings are
//! reported.
//!
//! ```no_run
//! use std::path::Path;
//! use seass_project::{LintOptions, lint_project};
//!
//! let report = lint_project(Path::new("styles"), &LintOptions::default())?;
//! for line in report.lines() {
//!     eprintln!("{line}");
//! }
//! # Ok::<(), seass_project::ProjectError>(())
//! ```

use std::path::{Path, PathBuf};

use seass_lint::{Diagnostic, LintSession};

/// The `seass.toml` configuration file.
pub mod config;
/// Walking the project tree.
pub mod discovery;
/// Fatal run errors.
pub mod error;

pub use config::{CONFIG_FILE_NAME, Config};
pub use discovery::{STYLESHEET_SUFFIX, collect_stylesheets, read_stylesheet};
pub use error::ProjectError;

/// Options for [`lint_project`].
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Configuration file to use instead of `<root>/seass.toml`.
    pub config_path: Option<PathBuf>,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    /// Findings, sorted by rendered line and free of duplicates.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of stylesheets linted.
    pub files: usize,
}

impl LintReport {
    /// Whether the run produced no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The rendered finding lines, in report order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Lint every stylesheet under `root` that the configuration does not ignore.
///
/// # Errors
///
/// Fails if the configuration cannot be loaded, the tree cannot be walked or
/// a stylesheet cannot be read.
pub fn lint_project(root: &Path, options: &LintOptions) -> Result<LintReport, ProjectError> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
    let config = Config::load(&config_path)?;
    let stylesheets = collect_stylesheets(root, &config)?;
    log::debug!("found {} stylesheet(s) under {}", stylesheets.len(), root.display());
    lint_files(root, &stylesheets)
}

/// Lint `files`, given relative to `root`, without consulting any
/// configuration. Findings name each file exactly as given.
///
/// # Errors
///
/// Returns [`ProjectError::FileRead`] for the first file that cannot be read.
pub fn lint_files<S: AsRef<str>>(root: &Path, files: &[S]) -> Result<LintReport, ProjectError> {
    let mut session = LintSession::new();
    for file in files {
        let file = file.as_ref();
        let source = read_stylesheet(&root.join(file))?;
        log::debug!("linting {file} ({} bytes)", source.len());
        session.lint_source(file, &source);
    }
    let files = session.files();
    Ok(LintReport {
        diagnostics: session.finish(),
        files,
    })
}

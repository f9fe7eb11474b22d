//! The `seass.toml` configuration file.
//!
//! ```toml
//! ignore = ["node_modules", "vendor/reset.css"]
//! ```
//!
//! Ignore entries are paths relative to the linted root, written with forward
//! slashes. An entry naming a directory prunes everything below it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ProjectError;

/// Name of the configuration file looked up in the linted root.
pub const CONFIG_FILE_NAME: &str = "seass.toml";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root-relative paths excluded from linting.
    #[serde(default, alias = "Ignore")]
    pub ignore: Vec<String>,
}

impl Config {
    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::ConfigRead`] if the file cannot be read and
    /// [`ProjectError::ConfigParse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let contents = fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ProjectError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} with {} ignore entr{}",
            path.display(),
            config.ignore.len(),
            if config.ignore.len() == 1 { "y" } else { "ies" }
        );
        Ok(config)
    }

    /// Parse configuration text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if `contents` is not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Whether `relative` (root-relative, `/`-separated) is listed verbatim.
    #[must_use]
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.ignore.iter().any(|entry| entry == relative)
    }
}

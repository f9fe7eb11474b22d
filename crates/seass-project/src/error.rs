//! Failures that abort a project run.

use std::io;
use std::path::PathBuf;

/// Error type for a project run.
///
/// Every variant is fatal: a run that hits one reports no findings at all.
/// Malformed CSS is never an error.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has an unexpected shape.
    #[error("failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The directory tree could not be walked.
    #[error("failed to walk directory '{}': {source}", root.display())]
    Walk {
        /// Root of the walk.
        root: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// A stylesheet could not be read.
    #[error("failed to read css file '{}': {source}", path.display())]
    FileRead {
        /// Path of the stylesheet.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

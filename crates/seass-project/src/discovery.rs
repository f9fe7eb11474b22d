//! Stylesheet discovery under a project root.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::ProjectError;

/// File extension of linted stylesheets, including the dot.
pub const STYLESHEET_SUFFIX: &str = ".css";

/// Walk `root` and return the root-relative paths of every regular `.css`
/// file that is not ignored, in file-name order.
///
/// Paths use `/` as separator on every platform. A directory listed in
/// `config.ignore` is not descended into.
///
/// # Errors
///
/// Returns [`ProjectError::Walk`] if any directory cannot be read.
pub fn collect_stylesheets(root: &Path, config: &Config) -> Result<Vec<String>, ProjectError> {
    let mut stylesheets = Vec::new();
    let mut matched: HashSet<&str> = HashSet::new();

    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|source| ProjectError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let Some(relative) = relative_path(root, entry.path()) else {
            continue;
        };

        if let Some(entry_name) = config.ignore.iter().find(|ignored| **ignored == relative) {
            let _ = matched.insert(entry_name.as_str());
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            log::debug!("ignoring {relative}");
            continue;
        }

        if entry.file_type().is_file() && relative.ends_with(STYLESHEET_SUFFIX) {
            stylesheets.push(relative);
        }
    }

    for unused in config.ignore.iter().filter(|entry| !matched.contains(entry.as_str())) {
        log::warn!("ignore entry '{unused}' did not match any path");
    }

    Ok(stylesheets)
}

/// `path` relative to `root`, joined with `/`. `None` for the root itself.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Read a stylesheet, replacing invalid UTF-8 with U+FFFD.
///
/// # Errors
///
/// Returns [`ProjectError::FileRead`] if the file cannot be read.
pub fn read_stylesheet(path: &Path) -> Result<String, ProjectError> {
    let bytes = fs::read(path).map_err(|source| ProjectError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

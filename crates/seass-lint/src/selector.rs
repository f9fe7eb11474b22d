//! Classification of atomic selectors and cross-file duplicate tracking.

use std::collections::HashMap;

use strum_macros::Display;

use crate::diagnostic::Diagnostic;

/// Shape of a selector fragment that survived combinator splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SelectorKind {
    /// Contains `#` anywhere, e.g. `#main` or `.a#b`.
    Id,
    /// Starts with `.`, e.g. `.btn` or the compound `.btn.primary`.
    Class,
    /// Starts with `:`, e.g. `:root`.
    PseudoClass,
    /// Anything else, e.g. `div` or `*`.
    Element,
}

/// A selector fragment with no combinator left in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicSelector {
    /// The fragment as written.
    pub text: String,
    /// Its classification.
    pub kind: SelectorKind,
}

impl AtomicSelector {
    /// Classify a trimmed fragment.
    ///
    /// An id anywhere wins over a leading class, so `.a#b` is an id selector.
    /// Compounds are not taken apart: `.a.b` is the single class `.a.b`.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let kind = if text.contains('#') {
            SelectorKind::Id
        } else if text.starts_with('.') {
            SelectorKind::Class
        } else if text.starts_with(':') {
            SelectorKind::PseudoClass
        } else {
            SelectorKind::Element
        };
        Self {
            text: text.to_string(),
            kind,
        }
    }
}

/// Remembers the latest occurrence of every class selector in a run.
///
/// Each class maps to the duplicate finding built for its most recent
/// occurrence, so a third occurrence pairs with the second rather than the
/// first.
#[derive(Debug, Default, Clone)]
pub struct DuplicateTracker {
    latest: HashMap<String, Diagnostic>,
}

impl DuplicateTracker {
    /// An empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `selector`, returning the previous occurrence
    /// if there was one.
    pub fn record(&mut self, selector: &str, occurrence: Diagnostic) -> Option<Diagnostic> {
        self.latest.insert(selector.to_string(), occurrence)
    }
}

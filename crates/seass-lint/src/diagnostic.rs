//! Lint findings and the run-wide set that collects them.
//!
//! A [`Diagnostic`] renders to the line format consumed by editors and
//! fixture files:
//!
//! ```text
//! <file>:<startLine>:<startColumn>-<endLine>:<endColumn> - <message>
//! ```
//!
//! Two diagnostics are the same finding exactly when their rendered lines are
//! equal, which is how [`DiagnosticSet`] deduplicates them.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::position::SourcePosition;

/// The region of a stylesheet a finding points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceSpan {
    /// Path of the stylesheet, relative to the linted root.
    pub file: String,
    /// Where the prelude starts.
    pub start: SourcePosition,
    /// Where the prelude ends.
    pub end: SourcePosition,
}

impl SourceSpan {
    /// Create a span inside `file`.
    #[must_use]
    pub fn new(file: impl Into<String>, start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.file, self.start, self.end)
    }
}

/// What is wrong with a selector.
///
/// The rendered texts are part of the output format and keep their historical
/// spellings ("sibiling", "decendant"); downstream tooling matches on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Message {
    /// `a[href]`
    AttributeSelector,
    /// `.a, .b`
    SelectorList,
    /// `.a > .b`
    ChildSelector,
    /// `.a + .b`
    AdjacentSiblingSelector,
    /// `.a ~ .b`
    GeneralSiblingSelector,
    /// `.a .b`
    DescendantSelector,
    /// `#main`
    IdSelector,
    /// A class selector defined more than once; carries the selector text.
    DuplicateSelector(String),
    /// `div`
    ElementSelector,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeSelector => f.write_str("attribute selector not allowed"),
            Self::SelectorList => f.write_str("selector list not allowed"),
            Self::ChildSelector => f.write_str("child selector '>' not allowed"),
            Self::AdjacentSiblingSelector => {
                f.write_str("adjacent sibiling selector '+' not allowed")
            }
            Self::GeneralSiblingSelector => f.write_str("general sibiling selector '~' not allowed"),
            Self::DescendantSelector => f.write_str("decendant selector ' ' not allowed"),
            Self::IdSelector => f.write_str("id selector '#' not allowed"),
            Self::DuplicateSelector(selector) => write!(f, "duplicate selector '{selector}'"),
            Self::ElementSelector => f.write_str("element selector not allowed"),
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// The prelude the finding belongs to.
    pub span: SourceSpan,
    /// The finding itself.
    pub message: Message,
}

impl Diagnostic {
    /// Create a finding for `span`.
    #[must_use]
    pub const fn new(span: SourceSpan, message: Message) -> Self {
        Self { span, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.span, self.message)
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diagnostic", 5)?;
        state.serialize_field("file", &self.span.file)?;
        state.serialize_field("start", &self.span.start)?;
        state.serialize_field("end", &self.span.end)?;
        state.serialize_field("message", &self.message.to_string())?;
        state.serialize_field("rendered", &self.to_string())?;
        state.end()
    }
}

/// Deduplicating collection of every finding of one linting run.
///
/// Findings are keyed by their rendered line, so inserting the same finding
/// twice is a no-op and iteration is in plain string order.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticSet {
    entries: BTreeMap<String, Diagnostic>,
}

impl DiagnosticSet {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a finding. Returns `false` if an identical line was already present.
    pub fn insert(&mut self, diagnostic: Diagnostic) -> bool {
        let rendered = diagnostic.to_string();
        if self.entries.contains_key(&rendered) {
            return false;
        }
        let _ = self.entries.insert(rendered, diagnostic);
        true
    }

    /// Number of distinct findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the set, yielding findings sorted by rendered line.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        self.entries.into_values().collect()
    }
}

//! A linting run over any number of stylesheets.

use crate::combinator::split_combinators;
use crate::diagnostic::{Diagnostic, DiagnosticSet, Message, SourceSpan};
use crate::prelude::{Prelude, decompose};
use crate::scanner::Scanner;
use crate::selector::{AtomicSelector, DuplicateTracker, SelectorKind};

/// State shared by every stylesheet of one run: the duplicate tracker and
/// the collected findings.
///
/// Duplicate pairing depends on the order stylesheets are fed in; the
/// final list is sorted regardless. Create a fresh session per run.
#[derive(Debug, Default)]
pub struct LintSession {
    duplicates: DuplicateTracker,
    diagnostics: DiagnosticSet,
    files: usize,
    preludes: usize,
}

impl LintSession {
    /// A session with nothing seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lint one stylesheet held in memory.
    pub fn lint_source(&mut self, file: &str, source: &str) {
        self.lint_chars(file, source.chars());
    }

    /// Lint one stylesheet given as a character stream.
    pub fn lint_chars<I: Iterator<Item = char>>(&mut self, file: &str, chars: I) {
        log::debug!("scanning {file}");
        self.files += 1;
        for prelude in Scanner::new(file, chars) {
            self.lint_prelude(&prelude);
        }
    }

    /// Check a single prelude.
    pub fn lint_prelude(&mut self, prelude: &Prelude) {
        self.preludes += 1;
        let span = &prelude.span;

        let decomposition = decompose(&prelude.text);
        if decomposition.has_attribute_selector() {
            self.report(span, Message::AttributeSelector);
        }

        let split = split_combinators(&decomposition.text);
        for separator in &split.separators {
            log::trace!("{span}: {separator} combinator in {:?}", prelude.text);
            self.report(span, separator.message());
        }

        for fragment in &split.fragments {
            let selector = AtomicSelector::classify(fragment);
            log::trace!("{span}: {} is a {} selector", selector.text, selector.kind);
            self.check_selector(&selector, span);
        }
    }

    fn check_selector(&mut self, selector: &AtomicSelector, span: &SourceSpan) {
        match selector.kind {
            SelectorKind::Id => self.report(span, Message::IdSelector),
            SelectorKind::Class => {
                let occurrence = Diagnostic::new(
                    span.clone(),
                    Message::DuplicateSelector(selector.text.clone()),
                );
                if let Some(previous) = self.duplicates.record(&selector.text, occurrence.clone())
                {
                    log::trace!("{} redefined at {span}", selector.text);
                    let _ = self.diagnostics.insert(previous);
                    let _ = self.diagnostics.insert(occurrence);
                }
            }
            SelectorKind::PseudoClass => {}
            SelectorKind::Element => self.report(span, Message::ElementSelector),
        }
    }

    fn report(&mut self, span: &SourceSpan, message: Message) {
        let _ = self
            .diagnostics
            .insert(Diagnostic::new(span.clone(), message));
    }

    /// Number of stylesheets scanned.
    #[must_use]
    pub const fn files(&self) -> usize {
        self.files
    }

    /// End the run, returning findings sorted by their rendered line.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        log::debug!(
            "{} finding(s) in {} prelude(s) across {} file(s)",
            self.diagnostics.len(),
            self.preludes,
            self.files
        );
        self.diagnostics.into_sorted()
    }
}

/// Lint `(path, source)` pairs in order with a fresh session.
#[must_use]
pub fn lint_sources<'a, S>(sources: S) -> Vec<Diagnostic>
where
    S: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut session = LintSession::new();
    for (file, source) in sources {
        session.lint_source(file, source);
    }
    session.finish()
}

//! Selector linting for the seass stylesheet convention.
//!
//! # Scope
//!
//! The convention allows exactly one class per rule:
//! - no selector lists, no combinators (`>`, `+`, `~`, descendant space)
//! - no id, element or attribute selectors
//! - no class defined more than once across all linted stylesheets
//!
//! Pseudo-classes on their own (`:root`) and pseudo-class arguments are
//! allowed.
//!
//! This crate implements the pipeline, leaves first:
//! - **Position tracking** ([`position`]) - line/column counters
//! - **Scanning** ([`scanner`]) - finds rule preludes, skipping strings,
//!   comments and at-rules
//! - **Decomposition** ([`prelude`]) - strips `[...]` and `(...)` parts
//! - **Combinator splitting** ([`combinator`])
//! - **Classification** ([`selector`]) - id / class / pseudo-class / element,
//!   plus duplicate tracking
//! - **Aggregation** ([`diagnostic`]) - deduplicated, sorted findings
//!
//! [`LintSession`] ties these together for one run.
//!
//! # Not Implemented
//!
//! - Declarations, values and at-rule bodies are never validated
//! - No specificity or cascade analysis; only selector shapes are checked
//! - Rules nested inside `@media`/`@document` are scanned as if they were top
//!   level; the closing brace of the block is skipped
//! - A rule with an empty body (`.a {}`) leaves that body open, so the rule
//!   that follows it is not checked

/// Selector separators and the splitting pass.
pub mod combinator;
/// Findings and the deduplicating set they are collected in.
pub mod diagnostic;
/// Line/column bookkeeping.
pub mod position;
/// Rule preludes and their decomposition.
pub mod prelude;
/// The lexical scanner.
pub mod scanner;
/// Atomic selector classification and duplicate tracking.
pub mod selector;
/// A linting run.
pub mod session;

// Re-exports for convenience
pub use combinator::{CombinatorSplit, Separator, split_combinators};
pub use diagnostic::{Diagnostic, DiagnosticSet, Message, SourceSpan};
pub use position::{PositionTracker, SourcePosition};
pub use prelude::{Decomposition, Prelude, decompose};
pub use scanner::{ScanMachine, Scanner, ScannerState, scan};
pub use selector::{AtomicSelector, DuplicateTracker, SelectorKind};
pub use session::{LintSession, lint_sources};

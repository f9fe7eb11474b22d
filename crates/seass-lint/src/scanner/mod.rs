//! Character-level scanner that finds rule preludes in a stylesheet.
//!
//! This is not a CSS tokenizer. The scanner accumulates characters into a
//! token and, one character at a time, decides which lexical context it is in
//! (see [`ScannerState`]). Strings, comments, at-statements, at-rule headers,
//! definition blocks and keyframes blocks are skipped; whenever a token ends
//! in `{` outside all of those, the text in front of the brace is handed out
//! as a [`Prelude`].
//!
//! # Spans
//!
//! A prelude's span starts at the position recorded when its token began (the
//! character that ended the previous token) and ends two columns before the
//! opening brace, using the column accounting of [`PositionTracker`]. On the
//! first line of a file this matches the selector's own columns; on later
//! lines the end lands one column past the selector.
//!
//! # Leniency
//!
//! Unterminated strings, comments and blocks are not reported. The scanner
//! simply stops producing preludes when the input runs out.
//!
//! A close brace standing alone as a token is discarded in every state. An
//! empty rule body (`.a {}` or `.a { }`) therefore stays open, and the rule
//! written after it is consumed as body text.

mod state;

pub use state::ScannerState;
use state::at_rule_state;

use crate::diagnostic::SourceSpan;
use crate::position::{PositionTracker, SourcePosition};
use crate::prelude::Prelude;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// The scanner's state machine: current context, accumulated token and
/// position counters, advanced one character at a time.
#[derive(Debug, Clone)]
pub struct ScanMachine {
    /// Path reported in prelude spans.
    file: String,
    /// Contexts above the implicit `Normal` bottom.
    stack: Vec<ScannerState>,
    /// Characters accumulated since the last token boundary.
    token: String,
    /// Position of the last consumed character.
    position: PositionTracker,
    /// Position recorded at the last token boundary.
    token_start: SourcePosition,
}

impl ScanMachine {
    /// A machine at the start of `file`.
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            stack: Vec::new(),
            token: String::new(),
            position: PositionTracker::new(),
            token_start: SourcePosition::new(1, 1),
        }
    }

    /// The innermost lexical context.
    #[must_use]
    pub fn state(&self) -> ScannerState {
        self.stack.last().copied().unwrap_or(ScannerState::Normal)
    }

    /// Consume one character, returning a prelude if `c` opened a rule body.
    pub fn advance(&mut self, c: char) -> Option<Prelude> {
        self.position.advance(c);
        self.token.push(c);

        match self.state() {
            ScannerState::InString { quote } => {
                if c == quote && !self.is_escaped(c) {
                    self.leave();
                }
                return None;
            }
            ScannerState::InComment { start } => {
                // The closer must come after the opener: `/*/` is still open.
                if self.token[start + COMMENT_OPEN.len()..].ends_with(COMMENT_CLOSE) {
                    self.token.truncate(start);
                    self.leave();
                }
                return None;
            }
            _ => {}
        }

        if c == '"' || c == '\'' {
            self.enter(ScannerState::InString { quote: c });
            return None;
        }
        if self.token.ends_with(COMMENT_OPEN) {
            let start = self.token.len() - COMMENT_OPEN.len();
            self.enter(ScannerState::InComment { start });
            return None;
        }

        // Whitespace between tokens is insignificant.
        if c.is_whitespace() && self.token.len() == c.len_utf8() {
            self.next_token();
            return None;
        }
        // A lone `}` is dropped without changing state. This tolerates the
        // close of an at-block whose contents were scanned as ordinary rules,
        // but it also leaves an empty rule body (`{}` or `{ }`) open until the
        // next token ending in `}`, so the rule after it goes unchecked.
        if self.token == "}" {
            self.next_token();
            return None;
        }

        match self.state() {
            ScannerState::InAtStatement => {
                if c == ';' {
                    self.end_at_rule();
                }
            }
            ScannerState::InAtBlock => {
                if c == '{' {
                    self.end_at_rule();
                }
            }
            ScannerState::InAtDefinitionBlock => {
                if c == '}' {
                    self.end_at_rule();
                }
            }
            ScannerState::InKeyframesBlock { opened, closed } => {
                let opened = opened + usize::from(c == '{');
                let closed = closed + usize::from(c == '}');
                if opened > 0 && opened == closed {
                    self.end_at_rule();
                } else {
                    self.replace(ScannerState::InKeyframesBlock { opened, closed });
                }
            }
            state @ (ScannerState::Normal | ScannerState::InRuleBody) => {
                if let Some(at_rule) = at_rule_state(&self.token) {
                    self.enter(at_rule);
                } else if state == ScannerState::InRuleBody {
                    if c == '}' {
                        self.leave();
                        self.next_token();
                    }
                } else if c == '{' {
                    return Some(self.open_rule_body());
                }
            }
            ScannerState::InString { .. } | ScannerState::InComment { .. } => {}
        }

        None
    }

    /// Whether the character just pushed is preceded by a backslash.
    fn is_escaped(&self, c: char) -> bool {
        self.token[..self.token.len() - c.len_utf8()].ends_with('\\')
    }

    /// Emit the prelude in front of the `{` just consumed and enter its body.
    fn open_rule_body(&mut self) -> Prelude {
        let position = self.position.position();
        let end = SourcePosition::new(position.line, position.column.saturating_sub(2));
        let text = self.token[..self.token.len() - 1].trim();
        let prelude = Prelude::new(
            text,
            SourceSpan::new(self.file.as_str(), self.token_start, end),
        );
        log::trace!("{}: prelude {:?} at {}", self.file, prelude.text, prelude.span);

        self.enter(ScannerState::InRuleBody);
        self.next_token();
        prelude
    }

    fn end_at_rule(&mut self) {
        debug_assert!(self.state().is_at_rule());
        log::trace!("{}: skipped {} {:?}", self.file, self.state(), self.token);
        self.leave();
        self.next_token();
    }

    fn next_token(&mut self) {
        self.token.clear();
        self.token_start = self.position.position();
    }

    fn enter(&mut self, state: ScannerState) {
        self.stack.push(state);
    }

    fn leave(&mut self) {
        let _ = self.stack.pop();
    }

    fn replace(&mut self, state: ScannerState) {
        if let Some(top) = self.stack.last_mut() {
            *top = state;
        }
    }
}

/// Lazily yields the preludes of one stylesheet.
///
/// # Example
/// ```
/// use seass_lint::scanner::Scanner;
///
/// let preludes: Vec<_> = Scanner::new("a.css", ".a { color: red; } .b {}".chars()).collect();
/// assert_eq!(preludes.len(), 2);
/// assert_eq!(preludes[1].text, ".b");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<I> {
    chars: I,
    machine: ScanMachine,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scan `chars`, reporting spans against `file`.
    #[must_use]
    pub fn new(file: impl Into<String>, chars: I) -> Self {
        Self {
            chars,
            machine: ScanMachine::new(file),
        }
    }

}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Prelude;

    fn next(&mut self) -> Option<Prelude> {
        for c in self.chars.by_ref() {
            if let Some(prelude) = self.machine.advance(c) {
                return Some(prelude);
            }
        }
        None
    }
}

/// Scan a whole stylesheet held in memory.
#[must_use]
pub fn scan(file: impl Into<String>, source: &str) -> Scanner<core::str::Chars<'_>> {
    Scanner::new(file, source.chars())
}

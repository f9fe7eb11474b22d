//! Line and column bookkeeping for the scanner.

use core::fmt;

use serde::Serialize;

/// A line/column location inside a stylesheet.
///
/// Both counters are 1-based for display purposes. See [`PositionTracker`]
/// for how columns are counted after a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourcePosition {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl SourcePosition {
    /// Create a position from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tracks the position of the most recently consumed character.
///
/// The column counter starts at 0 and is incremented before each character is
/// looked at, so the first character of the file sits at column 1. Consuming a
/// newline moves to the next line and sets the column to 1, which means the
/// first character of every following line reports column 2. Prelude spans
/// are built on top of this accounting (see [`crate::scanner`]), so it must
/// not be "corrected" in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTracker {
    line: usize,
    column: usize,
}

impl PositionTracker {
    /// A tracker positioned before the first character.
    #[must_use]
    pub const fn new() -> Self {
        Self { line: 1, column: 0 }
    }

    /// Account for one consumed character.
    pub const fn advance(&mut self, c: char) {
        self.column += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        }
    }

    /// Position of the most recently consumed character.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

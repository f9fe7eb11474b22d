//! Rule preludes and the removal of bracketed selector parts.

use crate::diagnostic::SourceSpan;

/// The raw selector text in front of a rule's opening brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prelude {
    /// Selector text, trimmed of surrounding whitespace.
    pub text: String,
    /// Where the prelude sits in its stylesheet.
    pub span: SourceSpan,
}

impl Prelude {
    /// Create a prelude.
    #[must_use]
    pub fn new(text: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A prelude with attribute selectors and pseudo-class arguments cut out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    /// What is left for combinator splitting.
    pub text: String,
    /// Number of `[` that opened an attribute selector.
    pub attribute_selectors: usize,
}

impl Decomposition {
    /// Whether any attribute selector was removed.
    #[must_use]
    pub const fn has_attribute_selector(&self) -> bool {
        self.attribute_selectors > 0
    }
}

/// Strip `[...]` and `(...)` contents and quoted text from `prelude`.
///
/// Arguments such as `:nth-child(2)` are allowed and dropped silently; every
/// `[` is counted as an attribute selector. Tracking is flat: a `]` or `)`
/// always closes the innermost open bracket of its kind, so `:not(:is(a))`
/// leaves a stray `)` behind. Quotes are honored everywhere, with backslash
/// escapes inside them.
#[must_use]
pub fn decompose(prelude: &str) -> Decomposition {
    let mut result = Decomposition::default();
    let mut quote: Option<char> = None;
    let mut escaping = false;
    let mut in_square = false;
    let mut in_parens = false;

    for c in prelude.chars() {
        if let Some(open) = quote {
            if escaping {
                escaping = false;
            } else if c == '\\' {
                escaping = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
            continue;
        }

        if in_square {
            if c == ']' {
                in_square = false;
            }
            continue;
        }
        if c == '[' {
            in_square = true;
            result.attribute_selectors += 1;
            continue;
        }

        if in_parens {
            if c == ')' {
                in_parens = false;
            }
            continue;
        }
        if c == '(' {
            in_parens = true;
            continue;
        }

        result.text.push(c);
    }

    result
}

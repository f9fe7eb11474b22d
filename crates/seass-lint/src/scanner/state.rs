use strum_macros::Display;

/// Lexical context of the scanner.
///
/// The scanner keeps these on a stack: strings and comments return to
/// whatever context they interrupted, and at-rules opened inside a rule body
/// return to that body once they end. `Normal` is the implicit bottom of the
/// stack and is never pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScannerState {
    /// Top level, between rules. Text accumulates into a potential prelude.
    Normal,
    /// Inside a quoted string opened by `quote`.
    InString {
        /// The quote character that opened the string.
        quote: char,
    },
    /// Inside a `/* ... */` comment.
    InComment {
        /// Byte offset of the comment opener within the current token.
        start: usize,
    },
    /// `@charset`, `@import` or `@namespace`, skipped up to the `;`.
    InAtStatement,
    /// `@document` or `@media`, skipped up to the opening `{`.
    InAtBlock,
    /// `@font-face` or `@page`, skipped up to the first `}`.
    InAtDefinitionBlock,
    /// `@keyframes`, skipped until its braces balance.
    InKeyframesBlock {
        /// `{` seen so far.
        opened: usize,
        /// `}` seen so far.
        closed: usize,
    },
    /// Inside the declaration block of a qualified rule.
    InRuleBody,
}

impl ScannerState {
    /// Whether this state skips an at-rule.
    #[must_use]
    pub const fn is_at_rule(self) -> bool {
        matches!(
            self,
            Self::InAtStatement
                | Self::InAtBlock
                | Self::InAtDefinitionBlock
                | Self::InKeyframesBlock { .. }
        )
    }
}

/// At-rules terminated by a semicolon.
const AT_STATEMENTS: [&str; 3] = ["@charset", "@import", "@namespace"];

/// At-rules whose header is skipped up to the block opener.
const AT_BLOCKS: [&str; 2] = ["@document", "@media"];

/// At-rules whose single block is skipped up to its closing brace.
const AT_DEFINITION_BLOCKS: [&str; 2] = ["@font-face", "@page"];

const AT_KEYFRAMES: &str = "@keyframes";

/// The at-rule state a token switches to, if it starts with a known at-keyword.
pub(crate) fn at_rule_state(token: &str) -> Option<ScannerState> {
    if !token.starts_with('@') {
        return None;
    }
    if AT_STATEMENTS.iter().any(|keyword| token.starts_with(keyword)) {
        Some(ScannerState::InAtStatement)
    } else if AT_BLOCKS.iter().any(|keyword| token.starts_with(keyword)) {
        Some(ScannerState::InAtBlock)
    } else if AT_DEFINITION_BLOCKS
        .iter()
        .any(|keyword| token.starts_with(keyword))
    {
        Some(ScannerState::InAtDefinitionBlock)
    } else if token.starts_with(AT_KEYFRAMES) {
        Some(ScannerState::InKeyframesBlock {
            opened: 0,
            closed: 0,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_keyword_is_not_an_at_rule() {
        assert_eq!(at_rule_state("@med"), None);
        assert_eq!(at_rule_state("@"), None);
        assert_eq!(at_rule_state("media"), None);
    }

    #[test]
    fn test_keyword_families() {
        assert_eq!(at_rule_state("@import"), Some(ScannerState::InAtStatement));
        assert_eq!(at_rule_state("@namespace svg"), Some(ScannerState::InAtStatement));
        assert_eq!(at_rule_state("@media"), Some(ScannerState::InAtBlock));
        assert_eq!(at_rule_state("@document"), Some(ScannerState::InAtBlock));
        assert_eq!(at_rule_state("@font-face"), Some(ScannerState::InAtDefinitionBlock));
        assert_eq!(at_rule_state("@page"), Some(ScannerState::InAtDefinitionBlock));
        assert_eq!(
            at_rule_state("@keyframes"),
            Some(ScannerState::InKeyframesBlock {
                opened: 0,
                closed: 0
            })
        );
    }

    #[test]
    fn test_unknown_at_rule_is_left_to_the_rule_scanner() {
        assert_eq!(at_rule_state("@supports"), None);
        assert_eq!(at_rule_state("@-webkit-keyframes"), None);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(ScannerState::InRuleBody.to_string(), "InRuleBody");
        assert!(ScannerState::InAtBlock.is_at_rule());
        assert!(!ScannerState::InRuleBody.is_at_rule());
    }
}

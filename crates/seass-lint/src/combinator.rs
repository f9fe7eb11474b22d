//! Splitting a decomposed prelude on selector separators.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::diagnostic::Message;

/// Characters that separate selectors, in the order they are split on.
///
/// The order decides which finding fires for a prelude: `.a > .b .c` is
/// split on `>` before the descendant space is looked at, so both kinds are
/// reported against the same prelude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Separator {
    /// `,`
    #[strum(serialize = "selector list")]
    SelectorList,
    /// `>`
    #[strum(serialize = "child")]
    Child,
    /// `+`
    #[strum(serialize = "adjacent sibling")]
    AdjacentSibling,
    /// `~`
    #[strum(serialize = "general sibling")]
    GeneralSibling,
    /// A single space.
    #[strum(serialize = "descendant")]
    Descendant,
}

impl Separator {
    /// The character split on.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::SelectorList => ',',
            Self::Child => '>',
            Self::AdjacentSibling => '+',
            Self::GeneralSibling => '~',
            Self::Descendant => ' ',
        }
    }

    /// The finding reported when this separator is present.
    #[must_use]
    pub const fn message(self) -> Message {
        match self {
            Self::SelectorList => Message::SelectorList,
            Self::Child => Message::ChildSelector,
            Self::AdjacentSibling => Message::AdjacentSiblingSelector,
            Self::GeneralSibling => Message::GeneralSiblingSelector,
            Self::Descendant => Message::DescendantSelector,
        }
    }
}

/// Result of splitting a prelude on every [`Separator`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombinatorSplit {
    /// Non-empty, trimmed selector fragments, in source order.
    pub fragments: Vec<String>,
    /// Separators that actually split something, in priority order.
    pub separators: Vec<Separator>,
}

/// Split `text` on each separator in turn, trimming fragments between passes.
///
/// Only a literal space counts as a descendant combinator; tabs and newlines
/// inside a selector are kept as part of the fragment.
#[must_use]
pub fn split_combinators(text: &str) -> CombinatorSplit {
    let mut separators = Vec::new();
    let fragments = Separator::iter().fold(vec![text.to_string()], |fragments, separator| {
        let mut next = Vec::with_capacity(fragments.len());
        let mut found = false;
        for fragment in fragments {
            let parts: Vec<&str> = fragment.trim().split(separator.symbol()).collect();
            found |= parts.len() > 1;
            next.extend(parts.into_iter().map(str::to_string));
        }
        if found {
            separators.push(separator);
        }
        next
    });

    CombinatorSplit {
        fragments: fragments
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect(),
        separators,
    }
}

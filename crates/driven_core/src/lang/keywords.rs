//! Define the block keyword vocabulary for driven-script.
//!
//! Block keywords open and close the nesting structure of a script:
//! `MODULE` → `RULESET` → `RULE`, each terminated by `END`. This module is the single source of
//! truth for their spellings and documentation; the lexer and the completion provider both
//! resolve against this registry.
//!
//! ## Notes
//! - Lookup via [`from_word`] is **case-insensitive** (`module`, `Module`, and `MODULE` all
//!   resolve). Expression keywords are the opposite; see [`crate::lang::expressions`].
//! - This registry is intentionally **pure** (no token types/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use driven_core::lang::keywords::{self, BlockKeywordId};
//!
//! assert_eq!(keywords::from_word("ruleset"), Some(BlockKeywordId::Ruleset));
//! assert_eq!(keywords::as_str(BlockKeywordId::End), "END");
//! ```

use super::registry::{Example, Stability};

/// Stable identifier for every block keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKeywordId {
    Module,
    Ruleset,
    Rule,
    End,
}

/// Metadata for a block keyword.
///
/// ## Notes
/// - `canonical` is the preferred (uppercase) spelling for docs and templates; any casing is
///   accepted in source text.
/// - `opens_block` distinguishes the three openers from `END`.
#[derive(Debug, Clone, Copy)]
pub struct BlockKeywordInfo {
    pub id: BlockKeywordId,
    pub canonical: &'static str,
    pub description: &'static str,
    pub opens_block: bool,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all block keywords, outermost first.
pub const BLOCK_KEYWORDS: &[BlockKeywordInfo] = &[
    BlockKeywordInfo {
        id: BlockKeywordId::Module,
        canonical: "MODULE",
        description: "Open a module, the top-level container for rulesets.",
        opens_block: true,
        stability: Stability::Stable,
        examples: &[Example {
            code: "MODULE [Orchard]:\n    ...\nEND",
            note: Some("Module names are bracket-delimited."),
        }],
    },
    BlockKeywordInfo {
        id: BlockKeywordId::Ruleset,
        canonical: "RULESET",
        description: "Open a ruleset, a named group of rules inside a module.",
        opens_block: true,
        stability: Stability::Stable,
        examples: &[Example {
            code: "RULESET [Baseline]:\n    ...\nEND",
            note: None,
        }],
    },
    BlockKeywordInfo {
        id: BlockKeywordId::Rule,
        canonical: "RULE",
        description: "Open a rule; its body is a single `= <expression>`.",
        opens_block: true,
        stability: Stability::Stable,
        examples: &[Example {
            code: "RULE [QuietHours]:\n    = TIME >= 2100\nEND",
            note: None,
        }],
    },
    BlockKeywordInfo {
        id: BlockKeywordId::End,
        canonical: "END",
        description: "Close the innermost open block.",
        opens_block: false,
        stability: Stability::Stable,
        examples: &[],
    },
];

/// Canonical (uppercase) spelling.
pub fn as_str(id: BlockKeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BlockKeywordId) -> &'static BlockKeywordInfo {
    BLOCK_KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("block keyword info missing")
}

/// Lookup by spelling, **case-insensitively**.
///
/// ## Returns
/// - `Some(BlockKeywordId)` if `word` is a block keyword in any casing.
/// - `None` otherwise.
pub fn from_word(word: &str) -> Option<BlockKeywordId> {
    BLOCK_KEYWORDS
        .iter()
        .find(|k| word.eq_ignore_ascii_case(k.canonical))
        .map(|k| k.id)
}

//! Completion snippet registry.
//!
//! One snippet per block-opening keyword. Each template is a complete, well-formed block ending
//! in `END`, ready to be inserted verbatim at the cursor. The completion provider in
//! `driven_syntax` decides *which* of these are offered at a given cursor position; this
//! registry only describes them.

use super::keywords::BlockKeywordId;

/// A static completion suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    /// The keyword this snippet inserts (also its completion label).
    pub block: BlockKeywordId,
    pub label: &'static str,
    /// Multi-line insertion text; always a balanced block ending in `END`.
    pub insert_template: &'static str,
    pub documentation: &'static str,
}

/// Registry of all snippets, outermost block first.
pub const SNIPPETS: &[Snippet] = &[
    Snippet {
        block: BlockKeywordId::Module,
        label: "MODULE",
        insert_template: "MODULE [name]:\n    \nEND",
        documentation: "Insert a module block. Modules are the top-level containers of a script and hold rulesets.",
    },
    Snippet {
        block: BlockKeywordId::Ruleset,
        label: "RULESET",
        insert_template: "RULESET [name]:\n    \nEND",
        documentation: "Insert a ruleset block. Rulesets group related rules inside a module.",
    },
    Snippet {
        block: BlockKeywordId::Rule,
        label: "RULE",
        insert_template: "RULE [name]:\n    = TRUE\nEND",
        documentation: "Insert a rule block. The body after `=` is the rule expression.",
    },
];

/// Snippet for a block-opening keyword, if one exists (`END` has none).
pub fn for_block(block: BlockKeywordId) -> Option<&'static Snippet> {
    SNIPPETS.iter().find(|s| s.block == block)
}

//! Context-aware completion for driven-script.
//!
//! Suggestions come from the static snippet registry in `driven_core`; this module decides
//! which of them are valid at the cursor by consulting the lexer's mode stack. Only the block
//! that can open in the cursor's mode is offered: `MODULE` at the top level, `RULESET` inside
//! a module, `RULE` inside a ruleset, and nothing inside rule bodies, comments, or strings.

use crate::lexer::{self, Mode};
use driven_core::lang::keywords::BlockKeywordId;
use driven_core::lang::snippets::{self, Snippet};

/// Snippets valid at `offset` in `source`.
///
/// Offsets past the end of the source are clamped; an empty source offers `MODULE`.
pub fn completions(source: &str, offset: usize) -> Vec<&'static Snippet> {
    let block = match lexer::mode_at(source, offset) {
        Mode::Root => BlockKeywordId::Module,
        Mode::Module => BlockKeywordId::Ruleset,
        Mode::Ruleset => BlockKeywordId::Rule,
        // Nothing opens inside a rule header, an expression, a comment, or a string.
        Mode::Rule | Mode::RuleExpression | Mode::MultiLineComment | Mode::Str { .. } => {
            return Vec::new();
        }
    };
    snippets::for_block(block).into_iter().collect()
}

/// The full, mode-independent snippet registry.
///
/// This mirrors the original editor widget, which offered every suggestion regardless of
/// cursor position. Prefer [`completions`] for new integrations.
pub fn all_snippets() -> &'static [Snippet] {
    snippets::SNIPPETS
}

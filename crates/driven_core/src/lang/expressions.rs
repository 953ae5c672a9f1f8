//! Define the expression keyword vocabulary for driven-script.
//!
//! These keywords appear inside rule bodies (the `= <expression>` sub-language): literals,
//! logical connectives, conditionals, and presence checks.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `TRUE` is a keyword, `true` is an ordinary
//!   identifier. Block keywords are the opposite; see [`crate::lang::keywords`]. The asymmetry
//!   is part of the grammar and must not be normalized away.
//! - This registry is intentionally **pure** (no token types/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use driven_core::lang::expressions::{self, ExprKeywordId};
//!
//! assert_eq!(expressions::from_str("DEFINED"), Some(ExprKeywordId::Defined));
//! assert_eq!(expressions::from_str("defined"), None);
//! ```

use super::registry::Stability;

/// Stable identifier for every expression keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKeywordId {
    // Literals
    True,
    False,
    Null,
    // Built-in values
    Time,
    // Conditionals
    If,
    Else,
    // Logical connectives
    And,
    Or,
    Not,
    // Presence checks
    Defined,
    Undefined,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKeywordCategory {
    Literal,
    Builtin,
    Conditional,
    Connective,
    Presence,
}

/// Metadata for an expression keyword.
#[derive(Debug, Clone, Copy)]
pub struct ExprKeywordInfo {
    pub id: ExprKeywordId,
    pub canonical: &'static str,
    pub category: ExprKeywordCategory,
    pub description: &'static str,
    pub stability: Stability,
}

const fn info(
    id: ExprKeywordId,
    canonical: &'static str,
    category: ExprKeywordCategory,
    description: &'static str,
) -> ExprKeywordInfo {
    ExprKeywordInfo {
        id,
        canonical,
        category,
        description,
        stability: Stability::Stable,
    }
}

/// Registry of all expression keywords.
pub const EXPR_KEYWORDS: &[ExprKeywordInfo] = &[
    info(
        ExprKeywordId::True,
        "TRUE",
        ExprKeywordCategory::Literal,
        "Boolean true literal.",
    ),
    info(
        ExprKeywordId::False,
        "FALSE",
        ExprKeywordCategory::Literal,
        "Boolean false literal.",
    ),
    info(
        ExprKeywordId::Null,
        "NULL",
        ExprKeywordCategory::Literal,
        "Absent-value literal.",
    ),
    info(
        ExprKeywordId::Time,
        "TIME",
        ExprKeywordCategory::Builtin,
        "Current evaluation time, comparable with numeric literals.",
    ),
    info(
        ExprKeywordId::If,
        "IF",
        ExprKeywordCategory::Conditional,
        "Conditional selector inside a rule expression.",
    ),
    info(
        ExprKeywordId::Else,
        "ELSE",
        ExprKeywordCategory::Conditional,
        "Fallback branch of an IF.",
    ),
    info(
        ExprKeywordId::And,
        "AND",
        ExprKeywordCategory::Connective,
        "Logical conjunction.",
    ),
    info(
        ExprKeywordId::Or,
        "OR",
        ExprKeywordCategory::Connective,
        "Logical disjunction.",
    ),
    info(
        ExprKeywordId::Not,
        "NOT",
        ExprKeywordCategory::Connective,
        "Logical negation.",
    ),
    info(
        ExprKeywordId::Defined,
        "DEFINED",
        ExprKeywordCategory::Presence,
        "True when the named field carries a value.",
    ),
    info(
        ExprKeywordId::Undefined,
        "UNDEFINED",
        ExprKeywordCategory::Presence,
        "True when the named field carries no value.",
    ),
];

/// Canonical spelling.
pub fn as_str(id: ExprKeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ExprKeywordId) -> &'static ExprKeywordInfo {
    EXPR_KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("expression keyword info missing")
}

/// Lookup by spelling, **case-sensitively**.
pub fn from_str(s: &str) -> Option<ExprKeywordId> {
    EXPR_KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

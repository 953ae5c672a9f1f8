//! Abstract Syntax Tree definitions for driven-script.
//!
//! The AST mirrors the block structure of a script: a [`Script`] holds modules, a [`Module`]
//! holds rulesets, a [`Ruleset`] holds rules, and a [`Rule`] holds one opaque expression.
//! Rule expressions are deliberately *not* parsed further; their runtime semantics belong to
//! the external rule engine, and the expression sub-language is only classified lexically.

use std::fmt;

/// Source location span (byte offsets, half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A bracket-delimited block name (`[Name]`), with the brackets stripped.
///
/// The text between the brackets is opaque: driven-script does not constrain it beyond "no `]`
/// and no newline", so it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub text: String,
    /// Span of the full bracketed lexeme, brackets included.
    pub span: Span,
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.text)
    }
}

/// A parsed script: the sequence of top-level modules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    pub modules: Vec<Module>,
}

impl Script {
    /// Total number of rules across all modules and rulesets.
    pub fn rule_count(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|m| &m.rulesets)
            .map(|rs| rs.rules.len())
            .sum()
    }
}

/// A `MODULE ... END` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: Option<Name>,
    pub rulesets: Vec<Ruleset>,
    pub span: Span,
}

/// A `RULESET ... END` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    pub name: Option<Name>,
    pub rules: Vec<Rule>,
    pub span: Span,
}

/// A `RULE ... END` block with its `= <expression>` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: Option<Name>,
    pub expression: Option<Expression>,
    pub span: Span,
}

/// An opaque rule expression: the token range after `=`, kept as a source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub span: Span,
}

impl Expression {
    /// The raw expression text, as written (surrounding whitespace trimmed by the span).
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.start..self.span.end]
    }
}

//! Token types for the driven-script lexer.

use crate::ast::Span;

/// Classification of a lexed span.
///
/// Every character of the input belongs to exactly one token; unrecognized input is represented
/// by the `Invalid` family rather than by a lexer failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Line comment (`-- ...`) or any part of a `=== ... ===` block comment.
    Comment,
    /// Block keyword: `MODULE`, `RULESET`, `RULE`, `END` (any casing).
    Keyword,
    /// Expression keyword: `TRUE`, `IF`, `AND`, ... (exact casing).
    KeywordControl,
    /// A bracketed block name (`[Name]`) or an expression identifier.
    Identifier,
    /// Operator character, and the `=` that opens a rule body.
    Operator,
    /// Expression delimiter: `( ) { } [ ] , ; :`.
    Delimiter,
    /// String delimiter or a run of ordinary string content.
    Str,
    /// A recognized escape sequence inside a string.
    StringEscape,
    /// A backslash sequence that is not a recognized escape.
    StringEscapeInvalid,
    /// A string opener with no closing quote before the end of the line.
    StringInvalid,
    /// Integer literal.
    NumberInteger,
    /// Float literal (`3.14`, `.5`, `1.0e-3`).
    NumberFloat,
    /// Hex literal (`0x1F`).
    NumberHex,
    /// Whitespace, and any permissive-mode content with no more specific class.
    Text,
    /// A character no rule of the active mode recognizes.
    Invalid,
}

impl TokenKind {
    /// All kinds, in declaration order (used by the theme table and the LSP legend).
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Comment,
        TokenKind::Keyword,
        TokenKind::KeywordControl,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::Str,
        TokenKind::StringEscape,
        TokenKind::StringEscapeInvalid,
        TokenKind::StringInvalid,
        TokenKind::NumberInteger,
        TokenKind::NumberFloat,
        TokenKind::NumberHex,
        TokenKind::Text,
        TokenKind::Invalid,
    ];

    /// Stable wire name, as used by the reference grammar and the JSON token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Keyword => "keyword",
            TokenKind::KeywordControl => "keywordControl",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Str => "string",
            TokenKind::StringEscape => "stringEscape",
            TokenKind::StringEscapeInvalid => "stringEscapeInvalid",
            TokenKind::StringInvalid => "stringInvalid",
            TokenKind::NumberInteger => "numberInteger",
            TokenKind::NumberFloat => "numberFloat",
            TokenKind::NumberHex => "numberHex",
            TokenKind::Text => "text",
            TokenKind::Invalid => "invalid",
        }
    }

    /// Check whether this kind signals a lexical problem.
    pub fn is_invalid(&self) -> bool {
        matches!(
            self,
            TokenKind::Invalid | TokenKind::StringInvalid | TokenKind::StringEscapeInvalid
        )
    }

    /// Check whether this kind is insignificant to the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Text)
    }
}

/// A token: classification plus the exact source text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }
}

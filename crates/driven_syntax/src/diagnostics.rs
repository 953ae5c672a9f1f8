//! Diagnostics for driven-script syntax analysis.
//!
//! The lexer itself never fails: unrecognized input degrades to `invalid`-class tokens so a
//! best-effort stream is always available for highlighting. This module turns those tokens
//! into positioned diagnostics, and provides the error type the parser reports structural
//! problems with.

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};
use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Derived from an `invalid`-class token.
    Lexical,
    /// Reported by the parser: unbalanced or incomplete block structure.
    Structure,
}

/// A syntax diagnostic with a source span.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
pub struct ScriptError {
    pub message: String,
    pub kind: ErrorKind,
    #[label("{message}")]
    pub span: Span,
    #[help]
    pub help: Option<String>,
}

impl ScriptError {
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Lexical,
            span,
            help: None,
        }
    }

    pub fn structure(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Structure,
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Derive diagnostics from the `invalid`-class tokens of a stream.
///
/// One diagnostic per token, in source order. A clean stream yields an empty vector.
pub fn lexical_diagnostics(tokens: &[Token<'_>]) -> Vec<ScriptError> {
    tokens
        .iter()
        .filter_map(|token| match token.kind {
            TokenKind::Invalid => Some(ScriptError::lexical(
                format!("`{}` is not valid here", token.lexeme),
                token.span,
            )),
            TokenKind::StringInvalid => Some(
                ScriptError::lexical("unterminated string literal", token.span)
                    .with_help("add a closing quote before the line ends"),
            ),
            TokenKind::StringEscapeInvalid => Some(
                ScriptError::lexical(
                    format!("invalid escape sequence `{}`", token.lexeme),
                    token.span,
                )
                .with_help(
                    "valid escapes: \\a \\b \\f \\n \\r \\t \\v \\\\ \\\" \\' \\xHH \\uHHHH \\UHHHHHHHH",
                ),
            ),
            _ => None,
        })
        .collect()
}

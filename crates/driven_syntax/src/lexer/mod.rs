//! Lexer for the driven-script rule language.
//!
//! Handles tokenization including:
//! - Block structure keywords (`MODULE`, `RULESET`, `RULE`, `END`, case-insensitive)
//! - Bracketed block names (`[Name]`)
//! - Rule expressions (keywords, identifiers, numbers, strings, operators, delimiters)
//! - Line comments (`-- ...`) and `=== ... ===` block comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types ([`TokenKind`], [`Token`])
//! - `mode` - Lexical modes and the mode stack
//! - `expression` - Rule-expression scanning (keywords, numbers, string entry)
//! - `strings` - String-content and escape-sequence scanning

mod expression;
mod mode;
mod strings;
pub mod tokens;

pub use mode::{DEFAULT_MAX_DEPTH, Mode, ModeStack};
pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use driven_core::lang::keywords::{self, BlockKeywordId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Mode transitions (simplified):
//
// [root] --MODULE--> [module] --RULESET--> [ruleset] --RULE--> [rule]
//                                                                 |
//                         [ruleExpression] <----------------- '=' |
//                               |  '"' / '\''
//                               v
//                            [string]
//
// END pops one level; `===` pushes/pops a comment mode from anywhere outside
// strings. Inside a rule expression, a block keyword pops back out to the mode
// that recognizes it before being re-scanned there.
// ============================================================================

/// Lexer for driven-script source text.
///
/// A single left-to-right scan over the full input. At each position the rules of the active
/// (top-of-stack) mode are tried in declared order and the first match wins; input no rule
/// recognizes degrades to `invalid`-class tokens, one character at a time. The lexer never
/// fails and never skips input: concatenating the lexemes of the produced stream reproduces
/// the source exactly.
///
/// The lexer is an [`Iterator`]; use [`lex`] to collect the whole stream.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    modes: ModeStack,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with the default nesting-depth cap.
    pub fn new(source: &'src str) -> Self {
        Self::with_max_depth(source, DEFAULT_MAX_DEPTH)
    }

    /// Create a lexer with an explicit nesting-depth cap. Block or string openers that would
    /// exceed the cap are emitted as [`TokenKind::Invalid`] instead of pushing a mode.
    pub fn with_max_depth(source: &'src str, max_depth: usize) -> Self {
        Self {
            source,
            pos: 0,
            modes: ModeStack::with_max_depth(max_depth),
        }
    }

    /// The source text this lexer scans.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The current mode stack.
    pub fn modes(&self) -> &ModeStack {
        &self.modes
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance over `bytes` bytes; callers only pass lengths measured on `rest()`.
    fn advance_by(&mut self, bytes: usize) {
        self.pos += bytes;
    }

    fn eat_str(&mut self, pat: &str) -> bool {
        if self.rest().starts_with(pat) {
            self.pos += pat.len();
            true
        } else {
            false
        }
    }

    /// Consume to just before the next newline (or end of input).
    fn eat_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn at_word_boundary(&self) -> bool {
        match self.source[..self.pos].chars().next_back() {
            Some(c) => !is_word_continue(c),
            None => true,
        }
    }

    /// The word starting at the current position, if one starts here on a word boundary.
    /// Used for keyword matching; plain identifiers do not require the boundary.
    fn keyword_word(&self) -> Option<&'src str> {
        if !self.at_word_boundary() {
            return None;
        }
        let first = self.peek()?;
        if !is_word_start(first) {
            return None;
        }
        let end = self
            .rest()
            .find(|c: char| !is_word_continue(c))
            .unwrap_or(self.rest().len());
        Some(&self.rest()[..end])
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        Token::new(kind, &self.source[start..self.pos], Span::new(start, self.pos))
    }

    // ========================================================================
    // Root mode
    // ========================================================================

    fn scan_root(&mut self) -> Option<Token<'src>> {
        let start = self.pos;

        if self.eat_str("===") {
            return Some(self.open_block_comment(start));
        }
        if self.rest().starts_with("--") {
            self.eat_line();
            return Some(self.token(TokenKind::Comment, start));
        }

        if let Some(word) = self.keyword_word() {
            if word.eq_ignore_ascii_case(keywords::as_str(BlockKeywordId::Module)) {
                self.advance_by(word.len());
                return Some(self.push_or_invalid(Mode::Module, TokenKind::Keyword, start));
            }
        }

        match self.peek()? {
            c if c.is_whitespace() => {
                while self.peek().is_some_and(char::is_whitespace) {
                    self.bump();
                }
                Some(self.token(TokenKind::Text, start))
            }
            // Root is strict: anything else is a single invalid character.
            _ => {
                self.bump();
                Some(self.token(TokenKind::Invalid, start))
            }
        }
    }

    // ========================================================================
    // Block comments
    // ========================================================================

    /// Called with the opening `===` already consumed.
    fn open_block_comment(&mut self, start: usize) -> Token<'src> {
        if self.modes.push(Mode::MultiLineComment) {
            self.token(TokenKind::Comment, start)
        } else {
            self.token(TokenKind::Invalid, start)
        }
    }

    fn scan_block_comment(&mut self) -> Option<Token<'src>> {
        let start = self.pos;
        if self.eat_str("===") {
            self.modes.pop();
            return Some(self.token(TokenKind::Comment, start));
        }

        // Chunk comment text up to the next closing delimiter or end of input.
        while self.bump().is_some() {
            if self.rest().starts_with("===") {
                break;
            }
        }
        Some(self.token(TokenKind::Comment, start))
    }

    // ========================================================================
    // Block modes (module / ruleset / rule)
    // ========================================================================

    fn scan_block(&mut self, mode: Mode) -> Option<Token<'src>> {
        let start = self.pos;

        if self.eat_str("===") {
            return Some(self.open_block_comment(start));
        }
        if self.rest().starts_with("--") {
            self.eat_line();
            return Some(self.token(TokenKind::Comment, start));
        }

        if let Some(word) = self.keyword_word() {
            if word.eq_ignore_ascii_case(keywords::as_str(BlockKeywordId::End)) {
                self.advance_by(word.len());
                self.modes.pop();
                return Some(self.token(TokenKind::Keyword, start));
            }
            let child = match mode {
                Mode::Module => Some((BlockKeywordId::Ruleset, Mode::Ruleset)),
                Mode::Ruleset => Some((BlockKeywordId::Rule, Mode::Rule)),
                _ => None,
            };
            if let Some((keyword, child_mode)) = child {
                if word.eq_ignore_ascii_case(keywords::as_str(keyword)) {
                    self.advance_by(word.len());
                    return Some(self.push_or_invalid(child_mode, TokenKind::Keyword, start));
                }
            }
        }

        if self.peek() == Some('[') {
            if let Some(token) = self.scan_bracket_name(start) {
                return Some(token);
            }
        }

        if mode == Mode::Rule && self.peek() == Some('=') {
            self.bump();
            return Some(self.push_or_invalid(Mode::RuleExpression, TokenKind::Operator, start));
        }

        // Block bodies are permissive: everything else is plain text.
        Some(self.scan_block_text(start))
    }

    /// `[...]`, non-greedy to the next `]` on the same line. Returns `None` when the bracket
    /// never closes before the line ends; the `[` then falls through to the text rule.
    fn scan_bracket_name(&mut self, start: usize) -> Option<Token<'src>> {
        let rest = self.rest();
        let line_end = rest.find('\n').unwrap_or(rest.len());
        let close = rest[..line_end].find(']')?;
        self.advance_by(close + 1);
        Some(self.token(TokenKind::Identifier, start))
    }

    fn scan_block_text(&mut self, start: usize) -> Token<'src> {
        if self.peek().is_some_and(is_word_start) {
            // A whole non-keyword word at once.
            while self.peek().is_some_and(is_word_continue) {
                self.bump();
            }
            return self.token(TokenKind::Text, start);
        }

        // At least one character, then extend over anything that cannot start another rule.
        self.bump();
        while let Some(c) = self.peek() {
            if c == '=' || c == '-' || c == '[' || is_word_start(c) {
                break;
            }
            self.bump();
        }
        self.token(TokenKind::Text, start)
    }

    // ========================================================================
    // Shared transition helpers
    // ========================================================================

    /// Push `mode` and emit `kind`; at the depth cap, emit the consumed lexeme as `Invalid`
    /// and leave the stack unchanged.
    fn push_or_invalid(&mut self, mode: Mode, kind: TokenKind, start: usize) -> Token<'src> {
        if self.modes.push(mode) {
            self.token(kind, start)
        } else {
            self.token(TokenKind::Invalid, start)
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        // A scan step may pop modes without consuming input (expression resync); every such
        // step strictly shrinks the stack, so the loop always terminates.
        loop {
            if self.pos >= self.source.len() {
                return None;
            }
            let scanned = match self.modes.top() {
                Mode::Root => self.scan_root(),
                Mode::MultiLineComment => self.scan_block_comment(),
                mode @ (Mode::Module | Mode::Ruleset | Mode::Rule) => self.scan_block(mode),
                Mode::RuleExpression => self.scan_expression(),
                Mode::Str { quote } => self.scan_string(quote),
            };
            if let Some(token) = scanned {
                return Some(token);
            }
        }
    }
}

/// Convenience function to lex a source string into a full token stream.
///
/// Each call re-scans from offset zero with a fresh mode stack; two calls over the same input
/// produce identical streams.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// The active mode at a cursor position.
///
/// Scans the prefix of `source` and reports the top of the mode stack once the scan has passed
/// `offset`. Used by the completion provider to decide which snippets are valid at the cursor.
pub fn mode_at(source: &str, offset: usize) -> Mode {
    let offset = offset.min(source.len());
    let mut lexer = Lexer::new(source);
    while lexer.pos < offset {
        if lexer.next().is_none() {
            break;
        }
    }
    lexer.modes.top()
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start a keyword or identifier word (ASCII-only).
fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue a keyword or identifier word (ASCII-only).
fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ============================================================================
// TESTS
// ============================================================================

//! Rule-expression scanning for the driven-script lexer.
//!
//! Handles the sub-language after `=` in a rule body: case-sensitive keywords, identifiers,
//! numeric literals, operator/delimiter characters, and entry into string mode. Unlike the
//! permissive block modes, unrecognized characters here are `invalid`.

use super::tokens::{Token, TokenKind};
use super::{Lexer, Mode, is_word_continue, is_word_start};
use driven_core::lang::keywords::{self, BlockKeywordId};
use driven_core::lang::{delimiters, expressions, operators};

impl<'src> Lexer<'src> {
    pub(super) fn scan_expression(&mut self) -> Option<Token<'src>> {
        let start = self.pos;

        if self.eat_str("===") {
            return Some(self.open_block_comment(start));
        }
        if self.rest().starts_with("--") {
            self.eat_line();
            return Some(self.token(TokenKind::Comment, start));
        }

        if let Some(word) = self.keyword_word() {
            // Block keywords are not part of the expression sub-language. They terminate the
            // body: pop back out to the mode that recognizes the word and re-scan it there,
            // where it surfaces as an ordinary block keyword. END closes just the expression
            // (the rule's own END handling takes over); RULE and RULESET also implicitly
            // close the enclosing rule.
            let pops = if word.eq_ignore_ascii_case(keywords::as_str(BlockKeywordId::End)) {
                Some(1)
            } else if word.eq_ignore_ascii_case(keywords::as_str(BlockKeywordId::Rule)) {
                Some(2)
            } else if word.eq_ignore_ascii_case(keywords::as_str(BlockKeywordId::Ruleset)) {
                Some(3)
            } else {
                None
            };
            if let Some(pops) = pops {
                for _ in 0..pops {
                    self.modes.pop();
                }
                return None;
            }

            if expressions::from_str(word).is_some() {
                self.advance_by(word.len());
                return Some(self.token(TokenKind::KeywordControl, start));
            }
        }

        match self.peek()? {
            c if is_word_start(c) => {
                while self.peek().is_some_and(is_word_continue) {
                    self.bump();
                }
                Some(self.token(TokenKind::Identifier, start))
            }
            quote @ ('"' | '\'') => Some(self.scan_string_open(start, quote)),
            c if c.is_ascii_digit() => Some(self.scan_number(start)),
            '.' if self.rest().as_bytes().get(1).is_some_and(u8::is_ascii_digit) => {
                Some(self.scan_number(start))
            }
            c if operators::is_operator_char(c) => {
                self.bump();
                Some(self.token(TokenKind::Operator, start))
            }
            c if delimiters::is_delimiter_char(c) => {
                self.bump();
                Some(self.token(TokenKind::Delimiter, start))
            }
            c if c.is_whitespace() => {
                while self.peek().is_some_and(char::is_whitespace) {
                    self.bump();
                }
                Some(self.token(TokenKind::Text, start))
            }
            _ => {
                self.bump();
                Some(self.token(TokenKind::Invalid, start))
            }
        }
    }

    // ========================================================================
    // Numeric literals
    // ========================================================================

    /// Float before hex before integer, mirroring the grammar's rule order: `0x1F` is hex
    /// because the float pattern needs a `.`, and `.5` is a float because nothing else claims
    /// a leading dot.
    fn scan_number(&mut self, start: usize) -> Token<'src> {
        if let Some(len) = match_float(self.rest()) {
            self.advance_by(len);
            self.token(TokenKind::NumberFloat, start)
        } else if let Some(len) = match_hex(self.rest()) {
            self.advance_by(len);
            self.token(TokenKind::NumberHex, start)
        } else {
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
            self.token(TokenKind::NumberInteger, start)
        }
    }

    // ========================================================================
    // String entry
    // ========================================================================

    /// A quote either opens a string (when an unescaped closer exists before the line ends) or
    /// marks the rest of the line as one `stringInvalid` token without entering string mode.
    fn scan_string_open(&mut self, start: usize, quote: char) -> Token<'src> {
        if self.line_has_closing_quote(quote) {
            self.bump();
            self.push_or_invalid(Mode::Str { quote }, TokenKind::Str, start)
        } else {
            self.eat_line();
            self.token(TokenKind::StringInvalid, start)
        }
    }

    /// Look ahead on the current line for an unescaped closing quote.
    fn line_has_closing_quote(&self, quote: char) -> bool {
        let mut chars = self.rest().chars();
        chars.next(); // the opening quote
        while let Some(c) = chars.next() {
            match c {
                '\n' => return false,
                c if c == quote => return true,
                '\\' => match chars.next() {
                    None | Some('\n') => return false,
                    Some(_) => {}
                },
                _ => {}
            }
        }
        false
    }
}

/// `\d*\.\d+([eE][+-]?\d+)?` at the start of `s`.
fn match_float(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i >= b.len() || b[i] != b'.' {
        return None;
    }
    i += 1;
    let fraction_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == fraction_start {
        return None;
    }
    // Optional exponent; left unconsumed when incomplete (`1.5e+` is the float `1.5`).
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exponent_digits = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_digits {
            i = j;
        }
    }
    Some(i)
}

/// `0[xX][0-9a-fA-F]+` at the start of `s`.
fn match_hex(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.len() < 3 || b[0] != b'0' || (b[1] != b'x' && b[1] != b'X') {
        return None;
    }
    let mut i = 2;
    while i < b.len() && b[i].is_ascii_hexdigit() {
        i += 1;
    }
    (i > 2).then_some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_pattern_edges() {
        assert_eq!(match_float("3.14"), Some(4));
        assert_eq!(match_float(".5"), Some(2));
        assert_eq!(match_float("1.0e-3"), Some(6));
        assert_eq!(match_float("2.5E+10x"), Some(7));
        // Incomplete exponents stay unconsumed.
        assert_eq!(match_float("1.5e+"), Some(3));
        assert_eq!(match_float("1.5e"), Some(3));
        // Not floats at all.
        assert_eq!(match_float("42"), None);
        assert_eq!(match_float("3."), None);
        assert_eq!(match_float(".e3"), None);
    }

    #[test]
    fn hex_pattern_edges() {
        assert_eq!(match_hex("0x1F"), Some(4));
        assert_eq!(match_hex("0Xdeadbeef"), Some(10));
        assert_eq!(match_hex("0x"), None);
        assert_eq!(match_hex("0xg"), None);
        assert_eq!(match_hex("1x2"), None);
    }
}

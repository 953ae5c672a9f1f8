//! String scanning for the driven-script lexer.
//!
//! Active once a rule expression has entered string mode. Content is chunked into runs of
//! plain characters; escape sequences get their own tokens so highlighting can distinguish a
//! valid `\n` from an unrecognized `\q`.
//!
//! Escape grammar: `\a \b \f \n \r \t \v \\ \" \'`, `\x` with 1-4 hex digits, `\u` with
//! exactly 4, `\U` with exactly 8.

use super::Lexer;
use super::tokens::{Token, TokenKind};

impl<'src> Lexer<'src> {
    pub(super) fn scan_string(&mut self, quote: char) -> Option<Token<'src>> {
        let start = self.pos;
        match self.peek()? {
            c if c == quote => {
                self.bump();
                self.modes.pop();
                Some(self.token(TokenKind::Str, start))
            }
            '\\' => Some(self.scan_escape(start)),
            _ => {
                while let Some(c) = self.peek() {
                    if c == quote || c == '\\' {
                        break;
                    }
                    self.bump();
                }
                Some(self.token(TokenKind::Str, start))
            }
        }
    }

    /// Called with the cursor on a backslash.
    fn scan_escape(&mut self, start: usize) -> Token<'src> {
        self.bump();
        let Some(c) = self.peek() else {
            // Dangling backslash at end of input.
            return self.token(TokenKind::StringEscapeInvalid, start);
        };
        match c {
            'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '"' | '\'' => {
                self.bump();
                self.token(TokenKind::StringEscape, start)
            }
            'x' => {
                self.bump();
                if self.eat_hex_digits(4) >= 1 {
                    self.token(TokenKind::StringEscape, start)
                } else {
                    self.token(TokenKind::StringEscapeInvalid, start)
                }
            }
            'u' => {
                self.bump();
                self.escape_of_exact_width(4, start)
            }
            'U' => {
                self.bump();
                self.escape_of_exact_width(8, start)
            }
            _ => {
                self.bump();
                self.token(TokenKind::StringEscapeInvalid, start)
            }
        }
    }

    /// Greedily consume up to `max` hex digits, returning how many were taken.
    fn eat_hex_digits(&mut self, max: usize) -> usize {
        let mut count = 0;
        while count < max && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.bump();
            count += 1;
        }
        count
    }

    /// `\u`/`\U` escapes are all-or-nothing: with fewer than `width` hex digits available the
    /// introducer alone is the invalid token and the digits stay ordinary string content.
    fn escape_of_exact_width(&mut self, width: usize, start: usize) -> Token<'src> {
        let available = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        if available >= width {
            self.advance_by(width);
            self.token(TokenKind::StringEscape, start)
        } else {
            self.token(TokenKind::StringEscapeInvalid, start)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};

    /// Tokens of a double-quoted literal lexed inside a synthetic rule body.
    fn string_tokens(literal: &str) -> Vec<(TokenKind, String)> {
        let source = format!("MODULE [M]: RULESET [R]: RULE [X]: ={literal}");
        lex(&source)
            .iter()
            .skip_while(|t| !(t.kind == TokenKind::Operator && t.lexeme == "="))
            .skip(1)
            .filter(|t| t.kind != TokenKind::Text)
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    #[test]
    fn named_escapes_are_single_tokens() {
        let tokens = string_tokens(r#" "\a\b\f\n\r\t\v\\\"" "#);
        assert_eq!(tokens.first(), Some(&(TokenKind::Str, "\"".to_string())));
        let escapes: Vec<_> = tokens
            .iter()
            .filter(|(kind, _)| *kind == TokenKind::StringEscape)
            .map(|(_, lexeme)| lexeme.as_str())
            .collect();
        assert_eq!(
            escapes,
            vec![r"\a", r"\b", r"\f", r"\n", r"\r", r"\t", r"\v", r"\\", "\\\""]
        );
    }

    #[test]
    fn hex_escape_takes_up_to_four_digits() {
        let tokens = string_tokens(r#" "\x41 \x41AB9" "#);
        let escapes: Vec<_> = tokens
            .iter()
            .filter(|(kind, _)| *kind == TokenKind::StringEscape)
            .map(|(_, lexeme)| lexeme.as_str())
            .collect();
        // Greedy to four digits; the fifth digit is plain content.
        assert_eq!(escapes, vec![r"\x41", r"\x41AB"]);
    }

    #[test]
    fn hex_escape_without_digits_is_invalid() {
        let tokens = string_tokens(r#" "\xzz" "#);
        assert!(tokens.contains(&(TokenKind::StringEscapeInvalid, r"\x".to_string())));
    }

    #[test]
    fn unicode_escapes_are_exact_width() {
        let tokens = string_tokens(r#" "A \u12 \U0001F41B \U123" "#);
        let classified: Vec<_> = tokens
            .iter()
            .filter(|(kind, _)| {
                matches!(kind, TokenKind::StringEscape | TokenKind::StringEscapeInvalid)
            })
            .map(|(kind, lexeme)| (*kind, lexeme.as_str()))
            .collect();
        assert_eq!(
            classified,
            vec![
                (TokenKind::StringEscapeInvalid, r"\u"),
                (TokenKind::StringEscape, r"\U0001F41B"),
                (TokenKind::StringEscapeInvalid, r"\U"),
            ]
        );
    }

    #[test]
    fn unknown_escapes_keep_backslash_and_char_together() {
        let tokens = string_tokens(r#" "\q\z" "#);
        let invalid: Vec<_> = tokens
            .iter()
            .filter(|(kind, _)| *kind == TokenKind::StringEscapeInvalid)
            .map(|(_, lexeme)| lexeme.as_str())
            .collect();
        assert_eq!(invalid, vec![r"\q", r"\z"]);
    }
}

//! Syntax-highlighting theme for driven-script.
//!
//! The token-kind → style table is part of the external contract with embedding editors: every
//! [`TokenKind`] maps to a fixed display style. The table is presentational only; nothing in
//! the frontend depends on it. [`render_ansi`] drives the `driven highlight` command with the
//! same table.

use driven_syntax::lexer::{Lexer, TokenKind};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Display style for one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub foreground: Rgb,
    pub background: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    const fn plain(foreground: Rgb) -> Self {
        Self {
            foreground,
            background: None,
            bold: false,
            italic: false,
        }
    }

    const fn bold(foreground: Rgb) -> Self {
        Self {
            foreground,
            background: None,
            bold: true,
            italic: false,
        }
    }

    const fn italic(foreground: Rgb) -> Self {
        Self {
            foreground,
            background: None,
            bold: false,
            italic: true,
        }
    }
}

const OLIVE: Rgb = Rgb(128, 128, 0);
const BLUE: Rgb = Rgb(0, 0, 255);
const MAGENTA: Rgb = Rgb(255, 0, 255);
const LIGHT_GRAY: Rgb = Rgb(211, 211, 211);
const TAN: Rgb = Rgb(210, 180, 140);
const GOLD: Rgb = Rgb(255, 215, 0);
const RED: Rgb = Rgb(255, 0, 0);
const LIGHT_RED: Rgb = Rgb(255, 204, 204);

/// The fixed display style for a token kind.
pub const fn style_for(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Comment => Style::italic(OLIVE),
        TokenKind::Keyword => Style::bold(BLUE),
        TokenKind::KeywordControl => Style::bold(MAGENTA),
        TokenKind::Identifier | TokenKind::Operator | TokenKind::Delimiter => {
            Style::plain(LIGHT_GRAY)
        }
        TokenKind::Str => Style::plain(TAN),
        TokenKind::StringEscape => Style::plain(GOLD),
        TokenKind::StringEscapeInvalid | TokenKind::StringInvalid => Style::plain(RED),
        TokenKind::NumberInteger | TokenKind::NumberFloat | TokenKind::NumberHex => {
            Style::plain(LIGHT_GRAY)
        }
        TokenKind::Text => Style::plain(LIGHT_GRAY),
        // Invalid characters additionally get a background highlight.
        TokenKind::Invalid => Style {
            foreground: RED,
            background: Some(LIGHT_RED),
            bold: false,
            italic: false,
        },
    }
}

/// Render a script with ANSI escape sequences using the standard theme.
pub fn render_ansi(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for token in Lexer::new(source) {
        out.push_str(&sgr(style_for(token.kind)));
        out.push_str(token.lexeme);
        out.push_str(RESET);
    }
    out
}

const RESET: &str = "\x1b[0m";

fn sgr(style: Style) -> String {
    let Rgb(r, g, b) = style.foreground;
    let mut seq = format!("\x1b[38;2;{r};{g};{b}m");
    if let Some(Rgb(r, g, b)) = style.background {
        seq.push_str(&format!("\x1b[48;2;{r};{g};{b}m"));
    }
    if style.bold {
        seq.push_str("\x1b[1m");
    }
    if style.italic {
        seq.push_str("\x1b[3m");
    }
    seq
}

//! Convert driven-script diagnostics to LSP diagnostics

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

use driven_syntax::diagnostics::ScriptError;

/// Convert a byte offset to LSP Position (0-based line and character)
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let offset = offset.min(source.len());
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    Position::new(line, col)
}

/// Convert an LSP Position back to a byte offset
pub fn position_to_offset(source: &str, position: Position) -> usize {
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if line == position.line && col == position.character {
            return i;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    source.len()
}

/// Convert a byte-offset span to LSP Range
pub fn span_to_range(source: &str, start: usize, end: usize) -> Range {
    let start_pos = offset_to_position(source, start);
    let end_pos = offset_to_position(source, end.max(start + 1));
    Range::new(start_pos, end_pos)
}

/// Convert a ScriptError to LSP Diagnostic
pub fn script_error_to_diagnostic(error: &ScriptError, source: &str) -> Diagnostic {
    let range = span_to_range(source, error.span.start, error.span.end);

    // Fold the help text into the message; it shows in hover and the problems panel.
    let mut message = error.message.clone();
    if let Some(help) = &error.help {
        message.push_str("\n\nhelp: ");
        message.push_str(help);
    }

    Diagnostic {
        range,
        severity: Some(DiagnosticSeverity::ERROR),
        code: None,
        code_description: None,
        source: Some("driven".to_string()),
        message,
        related_information: None,
        tags: None,
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_position() {
        let source = "line 1\nline 2\nline 3";

        let pos = offset_to_position(source, 0);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.character, 0);

        let pos = offset_to_position(source, 7); // Start of "line 2"
        assert_eq!(pos.line, 1);
        assert_eq!(pos.character, 0);

        let pos = offset_to_position(source, 10); // "e 2"
        assert_eq!(pos.line, 1);
        assert_eq!(pos.character, 3);
    }

    #[test]
    fn test_position_roundtrip() {
        let source = "MODULE [M]:\n    RULESET [R]:\nEND\n";
        for offset in [0, 5, 12, 20, source.len() - 1] {
            let pos = offset_to_position(source, offset);
            assert_eq!(position_to_offset(source, pos), offset);
        }
    }

    #[test]
    fn test_diagnostic_carries_help() {
        use driven_syntax::ast::Span;

        let error = driven_syntax::diagnostics::ScriptError::structure(
            "MODULE block is never closed",
            Span::new(0, 6),
        )
        .with_help("add a matching END");

        let diagnostic = script_error_to_diagnostic(&error, "MODULE [M]:");
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
        assert!(diagnostic.message.contains("help: add a matching END"));
        assert_eq!(diagnostic.range.start, Position::new(0, 0));
    }
}

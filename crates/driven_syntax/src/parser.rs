//! Block-structure parser for driven-script.
//!
//! Builds a [`Script`] from the token stream and checks block balance: stray `END`s, blocks
//! left open at end of input, missing `[name]`s, and rules without a `= <expression>` body.
//! Rule expressions themselves stay opaque; the parser records their source span and moves on.
//!
//! ## Notes
//! - The parser is single-pass and fail-soft: it recovers at block boundaries and reports all
//!   problems in one run.
//! - `invalid`-class tokens are surfaced as lexical diagnostics and are invisible to the
//!   structure walk; comments and whitespace are likewise skipped.

use crate::ast::{Expression, Module, Name, Rule, Ruleset, Script, Span};
use crate::diagnostics::{self, ScriptError};
use crate::lexer::{self, Token, TokenKind};
use driven_core::lang::keywords::{self, BlockKeywordId};

/// Parse a source string into a [`Script`].
///
/// ## Errors
/// Returns every lexical and structural diagnostic found, in source order of discovery. The
/// parser attempts to recover and continue after an error to report multiple issues in one
/// pass.
pub fn parse(source: &str) -> Result<Script, Vec<ScriptError>> {
    let tokens = lexer::lex(source);
    Parser::new(&tokens).parse()
}

/// Parser state over a pre-lexed token stream.
pub struct Parser<'src> {
    /// Significant tokens only: trivia and `invalid`-class tokens are stripped up front.
    tokens: Vec<Token<'src>>,
    pos: usize,
    errors: Vec<ScriptError>,
}

impl<'src> Parser<'src> {
    /// Create a parser for a token stream produced by [`lexer::lex`].
    pub fn new(tokens: &[Token<'src>]) -> Self {
        let errors = diagnostics::lexical_diagnostics(tokens);
        let significant = tokens
            .iter()
            .copied()
            .filter(|t| !t.kind.is_trivia() && !t.kind.is_invalid())
            .collect();
        Self {
            tokens: significant,
            pos: 0,
            errors,
        }
    }

    /// Parse the entire stream into a [`Script`].
    pub fn parse(mut self) -> Result<Script, Vec<ScriptError>> {
        let mut modules = Vec::new();

        while let Some(token) = self.peek() {
            match block_keyword(&token) {
                Some(BlockKeywordId::Module) => modules.push(self.module()),
                Some(BlockKeywordId::End) => {
                    self.errors.push(
                        ScriptError::structure("END with no open block", token.span)
                            .with_help("remove it, or open a MODULE first"),
                    );
                    self.advance();
                }
                _ => {
                    self.errors.push(ScriptError::structure(
                        format!("expected MODULE at the top level, found `{}`", token.lexeme),
                        token.span,
                    ));
                    self.advance();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Script { modules })
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    fn module(&mut self) -> Module {
        let open = self.advance().expect("caller checked for MODULE");
        let name = self.block_name("MODULE", open.span);
        let mut module = Module {
            name,
            rulesets: Vec::new(),
            span: open.span,
        };

        loop {
            let Some(token) = self.peek() else {
                self.errors.push(
                    ScriptError::structure("MODULE block is never closed", open.span)
                        .with_help("add a matching END"),
                );
                break;
            };
            match block_keyword(&token) {
                Some(BlockKeywordId::Ruleset) => {
                    let ruleset = self.ruleset();
                    module.span = module.span.merge(ruleset.span);
                    module.rulesets.push(ruleset);
                }
                Some(BlockKeywordId::End) => {
                    module.span = module.span.merge(token.span);
                    self.advance();
                    break;
                }
                _ => {
                    // Block bodies are lexically permissive; stray names and the like carry
                    // no structure.
                    self.advance();
                }
            }
        }
        module
    }

    fn ruleset(&mut self) -> Ruleset {
        let open = self.advance().expect("caller checked for RULESET");
        let name = self.block_name("RULESET", open.span);
        let mut ruleset = Ruleset {
            name,
            rules: Vec::new(),
            span: open.span,
        };

        loop {
            let Some(token) = self.peek() else {
                self.errors.push(
                    ScriptError::structure("RULESET block is never closed", open.span)
                        .with_help("add a matching END"),
                );
                break;
            };
            match block_keyword(&token) {
                Some(BlockKeywordId::Rule) => {
                    let rule = self.rule();
                    ruleset.span = ruleset.span.merge(rule.span);
                    ruleset.rules.push(rule);
                }
                Some(BlockKeywordId::End) => {
                    ruleset.span = ruleset.span.merge(token.span);
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
        ruleset
    }

    fn rule(&mut self) -> Rule {
        let open = self.advance().expect("caller checked for RULE");
        let name = self.block_name("RULE", open.span);
        let mut rule = Rule {
            name,
            expression: None,
            span: open.span,
        };

        // Body: `= <expression tokens>`, running to the next block keyword.
        match self.peek() {
            Some(t) if t.kind == TokenKind::Operator && t.lexeme == "=" => {
                let eq = t;
                self.advance();
                let mut expr_span: Option<Span> = None;
                while let Some(token) = self.peek() {
                    if block_keyword(&token).is_some() {
                        break;
                    }
                    expr_span = Some(match expr_span {
                        Some(span) => span.merge(token.span),
                        None => token.span,
                    });
                    self.advance();
                }
                match expr_span {
                    Some(span) => {
                        rule.span = rule.span.merge(span);
                        rule.expression = Some(Expression { span });
                    }
                    None => self.errors.push(
                        ScriptError::structure("rule expression is empty", eq.span)
                            .with_help("write something after `=`, e.g. `= TRUE`"),
                    ),
                }
            }
            _ => {
                self.errors.push(
                    ScriptError::structure("RULE has no `= <expression>` body", open.span)
                        .with_help("write RULE [Name]: = <expression>"),
                );
            }
        }

        // Every block needs its own END; the lexer tolerates a rule running into the next
        // RULE/RULESET keyword, the parser does not.
        match self.peek() {
            Some(t) if block_keyword(&t) == Some(BlockKeywordId::End) => {
                rule.span = rule.span.merge(t.span);
                self.advance();
            }
            Some(_) => {
                self.errors.push(
                    ScriptError::structure("RULE block is missing its END", open.span)
                        .with_help("close the rule before starting the next block"),
                );
            }
            None => {
                self.errors.push(
                    ScriptError::structure("RULE block is never closed", open.span)
                        .with_help("add a matching END"),
                );
            }
        }
        rule
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn block_name(&mut self, keyword: &str, open_span: Span) -> Option<Name> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Identifier && t.lexeme.starts_with('[') => {
                self.advance();
                Some(Name {
                    text: t.lexeme[1..t.lexeme.len() - 1].to_string(),
                    span: t.span,
                })
            }
            _ => {
                self.errors.push(
                    ScriptError::structure(
                        format!("{keyword} is missing its [name]"),
                        open_span,
                    )
                    .with_help(format!("write {keyword} [Name]:")),
                );
                None
            }
        }
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

/// The block keyword a token spells, if any. Expression keywords never match here.
fn block_keyword(token: &Token<'_>) -> Option<BlockKeywordId> {
    if token.kind == TokenKind::Keyword {
        keywords::from_word(token.lexeme)
    } else {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_script() {
        let source = "\
MODULE [Orchard]:
    RULESET [Baseline]:
        RULE [QuietHours]:
            = TIME >= 2100 OR TIME < 600
        END
        RULE [Weekends]:
            = NOT weekend
        END
    END
END
";
        let script = parse(source).unwrap();
        assert_eq!(script.modules.len(), 1);
        assert_eq!(script.rule_count(), 2);

        let module = &script.modules[0];
        assert_eq!(module.name.as_ref().unwrap().text, "Orchard");
        let ruleset = &module.rulesets[0];
        assert_eq!(ruleset.name.as_ref().unwrap().text, "Baseline");
        assert_eq!(ruleset.rules[1].name.as_ref().unwrap().text, "Weekends");

        let expr = ruleset.rules[0].expression.unwrap();
        assert_eq!(expr.text(source), "TIME >= 2100 OR TIME < 600");
    }

    #[test]
    fn empty_input_is_an_empty_script() {
        let script = parse("").unwrap();
        assert!(script.modules.is_empty());

        let script = parse("   \n-- just a comment\n").unwrap();
        assert!(script.modules.is_empty());
    }

    #[test]
    fn comments_are_structurally_inert() {
        let source = "=== MODULE [Phantom]: ===\nMODULE [Real]:\nEND\n";
        let script = parse(source).unwrap();
        assert_eq!(script.modules.len(), 1);
        assert_eq!(script.modules[0].name.as_ref().unwrap().text, "Real");
    }

    #[test]
    fn missing_name_is_reported_but_parsing_continues() {
        let source = "MODULE:\n    RULESET [R]:\n    END\nEND\n";
        let errors = parse(source).unwrap_err();
        assert!(
            errors.iter().any(|e| e.message == "MODULE is missing its [name]"),
            "{errors:?}"
        );
        // The ruleset inside still parsed.
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unclosed_blocks_are_reported() {
        let errors = parse("MODULE [M]:\n    RULESET [R]:\n").unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"RULESET block is never closed"), "{messages:?}");
        assert!(messages.contains(&"MODULE block is never closed"), "{messages:?}");
    }

    #[test]
    fn rule_without_body_is_reported() {
        let source = "MODULE [M]: RULESET [R]: RULE [X]: END END END";
        let errors = parse(source).unwrap_err();
        assert!(
            errors.iter().any(|e| e.message == "RULE has no `= <expression>` body"),
            "{errors:?}"
        );
    }

    #[test]
    fn rule_with_empty_expression_is_reported() {
        let source = "MODULE [M]: RULESET [R]: RULE [X]: = END END END";
        let errors = parse(source).unwrap_err();
        assert!(
            errors.iter().any(|e| e.message == "rule expression is empty"),
            "{errors:?}"
        );
    }

    #[test]
    fn implicit_rule_close_is_flagged() {
        // The lexer resynchronizes on the second RULE; the parser still wants the END.
        let source = "MODULE [M]: RULESET [R]: RULE [A]: = 1 RULE [B]: = 2 END END END";
        let errors = parse(source).unwrap_err();
        assert!(
            errors.iter().any(|e| e.message == "RULE block is missing its END"),
            "{errors:?}"
        );
    }

    #[test]
    fn garbled_input_reports_lexical_errors_without_panicking() {
        let errors = parse("@@@").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == crate::diagnostics::ErrorKind::Lexical));
    }

    #[test]
    fn error_report_snapshot() {
        let errors = parse("MODULE [M]: RULESET [R]:").unwrap_err();
        let rendered: String = errors.iter().map(|e| format!("{e}\n")).collect();
        insta::assert_snapshot!(rendered, @r"
        RULESET block is never closed
        MODULE block is never closed
        ");
    }

    #[test]
    fn multiple_modules_parse_in_order() {
        let source = "MODULE [A]:\nEND\nMODULE [B]:\nEND\n";
        let script = parse(source).unwrap();
        let names: Vec<_> = script
            .modules
            .iter()
            .map(|m| m.name.as_ref().unwrap().text.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}

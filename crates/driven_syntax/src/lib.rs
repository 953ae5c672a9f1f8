//! Syntax frontend for the driven-script rule language: lexer, parser, AST, diagnostics, and
//! completion.
//!
//! This crate is dependency-light and intended for reuse across the CLI, the LSP server, and
//! future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not evaluate rule expressions. Runtime
//!   semantics live in the external rule engine, reached through the host contract in the
//!   tooling crate.
//! - Vocabulary identity (keywords/operators/snippets) comes from `driven_core::lang`
//!   registries.
//!
//! ## Examples
//! ```rust
//! use driven_syntax::{lexer, parser};
//!
//! let source = "MODULE [Demo]:\nEND\n";
//! let tokens = lexer::lex(source);
//! assert!(tokens.iter().all(|t| !t.kind.is_invalid()));
//!
//! let script = parser::parse(source).unwrap();
//! assert_eq!(script.modules.len(), 1);
//! ```
//!
//! ## See also
//! - `driven_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod completion;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

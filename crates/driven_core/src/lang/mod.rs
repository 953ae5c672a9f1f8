//! driven-script language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: block keywords, expression
//! keywords, operator and delimiter character classes, and completion snippets.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and the editor
//! tooling. Callers work with **stable IDs** (e.g. `BlockKeywordId`) and look up spellings and
//! metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer enforces syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, completion, highlighting).
//!
//! ## Examples
//! ```rust
//! use driven_core::lang::keywords::{self, BlockKeywordId};
//!
//! assert_eq!(keywords::from_word("module"), Some(BlockKeywordId::Module));
//! assert_eq!(keywords::as_str(BlockKeywordId::Module), "MODULE");
//! ```

pub mod delimiters;
pub mod expressions;
pub mod keywords;
pub mod operators;
pub mod registry;
pub mod snippets;

//! driven-script Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time diagnostics (lexical and structural)
//! - Context-aware block snippet completion
//! - Semantic tokens for syntax highlighting

pub mod backend;
pub mod diagnostics;

pub use backend::DrivenLanguageServer;

//! Provide the canonical language vocabulary for driven-script tooling.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both:
//! - the syntax frontend uses to classify tokens, and
//! - editor tooling (completion, documentation, highlighting) uses to describe the language.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no tokenizer-specific types.
//! - Current scope: block keywords, expression keywords, operator/delimiter character classes,
//!   and the completion snippet registry.

pub mod lang;

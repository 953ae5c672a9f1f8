//! Shareable metadata for `driven_core::lang` registries.
//!
//! The `driven_core::lang` module is a set of **registry-first** vocabularies: block keywords,
//! expression keywords, operators, and snippets. This submodule provides the small,
//! dependency-free metadata types that are reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/completion; enforcement of syntax rules still lives in
//!   the lexer/parser.

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body, in driven-script syntax.
/// - `note` is an optional short explanation (one or two sentences).
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

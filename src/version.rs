//! driven-script tooling version information.
//!
//! This module exposes the tooling version as a single constant so all subsystems (CLI, LSP
//! server info) agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The driven-script tooling version string (for example, `0.2.1`).
pub const DRIVEN_VERSION: &str = env!("CARGO_PKG_VERSION");

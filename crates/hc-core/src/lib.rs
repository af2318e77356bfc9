//! # hc-core
//!
//! Error definitions and process-wide settings for holiday-calendar.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace: the error taxonomy of the pipeline, the `ensure!` macro,
//! and the start-up [`Settings`] (the date format used when records leave
//! the pipeline).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Process-wide settings fixed at start-up.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;

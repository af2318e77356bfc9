//! # holiday-calendar
//!
//! A normalized public-holiday calendar: every listed holiday, the makeup
//! workdays announced in its comments, and the weekend days a Friday or
//! Monday holiday turns into a long weekend, in one date-ordered table.
//!
//! This crate is a **façade** over the workspace crates, plus the
//! configuration, logging setup and run policy of the `holiday-calendar`
//! binary.
//!
//! ```rust
//! use holiday_calendar::calendar::{CalendarAssembler, InMemorySource, RawRow};
//! use holiday_calendar::time::Date;
//!
//! let source = InMemorySource::new().with_year(
//!     2024,
//!     vec![RawRow::holiday("Monday", "2024-01-01", "Founding Day", "National Holiday", "")],
//! );
//! let calendar = CalendarAssembler::new(source).assemble(&[2024]).unwrap().calendar;
//! let sunday = Date::from_ymd(2023, 12, 31).unwrap();
//! assert_eq!(calendar.is_day_off(sunday), Some(true));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and process-wide settings.
pub use hc_core as core;

/// Dates, weekdays and months.
pub use hc_time as time;

/// Row parsing, classification, enrichment passes and export.
pub use hc_calendar as calendar;

/// TOML configuration of the binary.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

/// Batch run policy of the binary.
pub mod app;

pub use app::{configure, run};

//! # hc-calendar
//!
//! Turns the rows of a published public-holiday table into a normalized,
//! date-ordered calendar, enriched with compensated workdays and extended
//! weekends.
//!
//! ```
//! use hc_calendar::{CalendarAssembler, InMemorySource, RawRow};
//!
//! let source = InMemorySource::new().with_year(
//!     2024,
//!     vec![RawRow::holiday("Friday", "2024-04-05", "Tomb Sweeping Day", "National Holiday", "")],
//! );
//! let assembly = CalendarAssembler::new(source).assemble(&[2024]).unwrap();
//! // the holiday plus the Saturday and Sunday after it
//! assert_eq!(assembly.calendar.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Pass orchestration and the assembly report.
pub mod assembler;

/// `HolidayCalendar`: the sorted dataset.
pub mod calendar;

/// Holiday classification rules.
pub mod classifier;

/// Compensated workday resolution.
pub mod compensated;

/// CSV export.
pub mod export;

/// Extended weekend synthesis.
pub mod extended;

/// `HolidayRecord`.
pub mod record;

/// Raw rows and the row parser.
pub mod row;

/// Row sources.
pub mod source;

/// `YearWindow`.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use assembler::{
    assemble_records, Assembly, AssemblyReport, CalendarAssembler, MalformedRowPolicy,
};
pub use calendar::{DateConflict, HolidayCalendar};
pub use classifier::{classify, HolidayCategory};
pub use compensated::{compensated_records, resolve_compensated_date, CompensationTokens};
pub use export::{export_csv, write_csv};
pub use extended::extended_weekend_records;
pub use record::{HolidayRecord, RecordOrigin};
pub use row::{parse_row, HolidayRow, RawCell, RawRow};
pub use source::{InMemorySource, RowSource, SnapshotSource};
pub use window::YearWindow;

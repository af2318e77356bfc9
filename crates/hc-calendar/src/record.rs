//! `HolidayRecord`: one dated entry of the calendar.

use hc_time::{Date, Weekday};

use crate::classifier::{classify, COMPENSATED, EXTENDED_WEEKEND};

/// Name given to resolved makeup workdays.
pub const COMPENSATORY_WORKDAY: &str = "Compensatory workday";

/// How a record came into the dataset.
///
/// The order of the variants is the order in which the groups are merged,
/// which decides ties when two records share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordOrigin {
    /// Parsed from a source row.
    Source,
    /// Makeup workday resolved from a source row's comment.
    Compensated,
    /// Weekend day adjacent to a Friday or Monday holiday.
    ExtendedWeekend,
}

/// One dated calendar entry.
///
/// Records are immutable once built: `is_holiday` is decided by
/// [`classify`] at construction and the weekday is always derived from the
/// date, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    date: Date,
    name: String,
    kind: String,
    is_holiday: bool,
    comments: String,
    origin: RecordOrigin,
}

impl HolidayRecord {
    /// Build a record for a source row, classifying it from its type label.
    pub fn from_source(
        date: Date,
        name: impl Into<String>,
        kind: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        let kind = kind.into();
        Self {
            is_holiday: classify(date, &kind),
            date,
            name: name.into(),
            kind,
            comments: comments.into(),
            origin: RecordOrigin::Source,
        }
    }

    /// Build the makeup workday that compensates for `holiday_name`.
    pub fn compensatory_workday(date: Date, holiday_name: &str) -> Self {
        Self {
            date,
            name: COMPENSATORY_WORKDAY.to_string(),
            kind: COMPENSATED.to_string(),
            is_holiday: classify(date, COMPENSATED),
            comments: format!("Makeup day for {holiday_name}"),
            origin: RecordOrigin::Compensated,
        }
    }

    /// Build the weekend day that extends the break around `holiday_name`.
    pub fn extended_weekend(date: Date, holiday_name: &str) -> Self {
        Self {
            date,
            name: EXTENDED_WEEKEND.to_string(),
            kind: EXTENDED_WEEKEND.to_string(),
            is_holiday: classify(date, EXTENDED_WEEKEND),
            comments: format!("Extended Weekend for {holiday_name}"),
            origin: RecordOrigin::ExtendedWeekend,
        }
    }

    /// Calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Day of the week, derived from [`date`](Self::date).
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Holiday label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type label, as found in the source or fixed for synthesized records.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the date is a non-working day.
    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    /// Free-text comment.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// How this record came into the dataset.
    pub fn origin(&self) -> RecordOrigin {
        self.origin
    }
}

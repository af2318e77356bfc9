//! Calendar assembly: from raw rows of several years to one sorted dataset.
//!
//! The passes run strictly in order, each consuming the complete output of
//! the previous one:
//!
//! 1. rows of every year are fetched and parsed into source records;
//! 2. compensation comments on those records are resolved into makeup
//!    workdays;
//! 3. weekends adjacent to Friday/Monday days off are synthesized, checked
//!    against source records and makeup workdays;
//! 4. the three groups are concatenated in that order and stably sorted by
//!    date.
//!
//! Failures below the level of a whole run (a year that cannot be fetched,
//! a malformed row, an unresolvable comment) are logged, collected in the
//! [`AssemblyReport`] and otherwise skipped.

use std::thread;
use std::time::Duration;

use hc_core::errors::{Error, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::calendar::{DateConflict, HolidayCalendar};
use crate::compensated::{compensated_records, CompensationFailure};
use crate::extended::extended_weekend_records;
use crate::record::HolidayRecord;
use crate::row::{parse_row, RawRow};
use crate::source::RowSource;

/// What to do with a row that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Drop that row only and keep the rest of the year.
    #[default]
    Skip,
    /// Drop every row of that year.
    AbortYear,
}

/// A year for which no rows were kept.
#[derive(Debug, Clone, PartialEq)]
pub struct YearFailure {
    /// The year.
    pub year: i32,
    /// Why its rows were lost.
    pub error: Error,
}

/// A source row that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    /// Year the row was published under.
    pub year: i32,
    /// Zero-based position of the row in that year's table.
    pub index: usize,
    /// The parse error.
    pub error: Error,
}

/// Everything that went wrong, short of aborting, during one assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyReport {
    /// Years that contributed no rows.
    pub failed_years: Vec<YearFailure>,
    /// Rows dropped under [`MalformedRowPolicy::Skip`].
    pub skipped_rows: Vec<RowFailure>,
    /// Compensation comments that did not resolve to a date.
    pub unresolved_compensations: Vec<CompensationFailure>,
    /// Dates whose records disagree on `is_holiday`.
    pub conflicts: Vec<DateConflict>,
}

impl AssemblyReport {
    /// `true` if nothing was skipped and no date is contested.
    pub fn is_clean(&self) -> bool {
        self.failed_years.is_empty()
            && self.skipped_rows.is_empty()
            && self.unresolved_compensations.is_empty()
            && self.conflicts.is_empty()
    }
}

/// Result of [`CalendarAssembler::assemble`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    /// The sorted dataset.
    pub calendar: HolidayCalendar,
    /// Recoverable failures met on the way.
    pub report: AssemblyReport,
}

/// Drives the passes over a [`RowSource`].
#[derive(Debug)]
pub struct CalendarAssembler<S> {
    source: S,
    fetch_delay: Duration,
    malformed_rows: MalformedRowPolicy,
}

impl<S: RowSource> CalendarAssembler<S> {
    /// Assemble from `source`, without pacing and skipping malformed rows.
    pub fn new(source: S) -> Self {
        Self {
            source,
            fetch_delay: Duration::ZERO,
            malformed_rows: MalformedRowPolicy::default(),
        }
    }

    /// Wait `delay` between two successive year fetches.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Handle malformed rows according to `policy`.
    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    /// Fetch and parse the source records of every year, in order.
    pub fn source_records(&self, years: &[i32], report: &mut AssemblyReport) -> Vec<HolidayRecord> {
        let mut records = Vec::new();
        for (i, &year) in years.iter().enumerate() {
            if i > 0 && !self.fetch_delay.is_zero() {
                thread::sleep(self.fetch_delay);
            }
            info!(year, source = %self.source.describe(year), "fetching holiday rows");
            let rows = match self.source.fetch_rows(year) {
                Ok(rows) => rows,
                Err(error) => {
                    warn!(year, %error, "no rows for year");
                    report.failed_years.push(YearFailure { year, error });
                    continue;
                }
            };
            match parse_year(year, &rows, self.malformed_rows) {
                Ok((parsed, skipped)) => {
                    debug!(year, records = parsed.len(), skipped = skipped.len(), "year parsed");
                    records.extend(parsed);
                    report.skipped_rows.extend(skipped);
                }
                Err(failure) => report.failed_years.push(failure),
            }
        }
        records
    }

    /// Run every pass over `years` and return the sorted dataset.
    ///
    /// # Errors
    /// Only date arithmetic outside the representable range aborts an
    /// assembly; every other failure is reported in [`Assembly::report`].
    pub fn assemble(&self, years: &[i32]) -> Result<Assembly> {
        let mut report = AssemblyReport::default();
        let records = self.source_records(years, &mut report);
        let mut assembly = assemble_records(records)?;
        report
            .unresolved_compensations
            .append(&mut assembly.report.unresolved_compensations);
        report.conflicts.append(&mut assembly.report.conflicts);
        assembly.report = report;
        info!(
            years = years.len(),
            records = assembly.calendar.len(),
            "calendar assembled"
        );
        Ok(assembly)
    }
}

/// Parse one year's rows under `policy`.
///
/// Returns the records and the skipped rows, or, under
/// [`MalformedRowPolicy::AbortYear`], the failure of the whole year.
pub fn parse_year(
    year: i32,
    rows: &[RawRow],
    policy: MalformedRowPolicy,
) -> std::result::Result<(Vec<HolidayRecord>, Vec<RowFailure>), YearFailure> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match parse_row(row) {
            Ok(record) => records.push(record),
            Err(error) => match policy {
                MalformedRowPolicy::Skip => {
                    warn!(year, row = index, %error, "skipping malformed row");
                    skipped.push(RowFailure { year, index, error });
                }
                MalformedRowPolicy::AbortYear => {
                    warn!(year, row = index, %error, "malformed row, dropping the whole year");
                    return Err(YearFailure { year, error });
                }
            },
        }
    }
    Ok((records, skipped))
}

/// Enrich source records with makeup workdays and extended weekends, then
/// sort.
///
/// The returned report lists unresolved compensation comments and
/// contested dates.
pub fn assemble_records(source: Vec<HolidayRecord>) -> Result<Assembly> {
    let compensation = compensated_records(&source);
    let mut records = source;
    records.extend(compensation.records);

    let extended = extended_weekend_records(&records)?;
    records.extend(extended);

    let calendar = HolidayCalendar::from_records(records);
    let conflicts = calendar.conflicts();
    for conflict in &conflicts {
        warn!(
            date = %conflict.date,
            days_off = ?conflict.days_off,
            working_days = ?conflict.working_days,
            "records disagree on whether the date is a day off"
        );
    }
    Ok(Assembly {
        calendar,
        report: AssemblyReport {
            unresolved_compensations: compensation.failures,
            conflicts,
            ..AssemblyReport::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordOrigin;
    use crate::row::RawCell;
    use crate::source::InMemorySource;
    use hc_time::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn broken_row() -> RawRow {
        RawRow::new(vec![
            RawCell::text("Friday"),
            RawCell::text("Apr 05"),
            RawCell::labelled("Broken"),
            RawCell::text("National Holiday"),
            RawCell::text(""),
        ])
    }

    fn rows_2024() -> Vec<RawRow> {
        vec![
            RawRow::holiday("Monday", "2024-01-01", "Founding Day", "National Holiday", ""),
            RawRow::holiday(
                "Thursday",
                "2024-02-08",
                "Lunar New Year Holiday",
                "National Holiday",
                "Compensated by Sat. Feb 17",
            ),
            broken_row(),
            RawRow::holiday("Friday", "2024-04-05", "Tomb Sweeping Day", "National Holiday", ""),
        ]
    }

    #[test]
    fn skip_policy_keeps_the_rest_of_the_year() {
        let (records, skipped) = parse_year(2024, &rows_2024(), MalformedRowPolicy::Skip).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 2);
        assert!(matches!(skipped[0].error, Error::Structural { .. }));
    }

    #[test]
    fn abort_policy_drops_the_year() {
        let failure = parse_year(2024, &rows_2024(), MalformedRowPolicy::AbortYear).unwrap_err();
        assert_eq!(failure.year, 2024);
        assert!(matches!(failure.error, Error::Structural { .. }));
    }

    #[test]
    fn assemble_records_merges_in_order() {
        let (records, _) = parse_year(2024, &rows_2024(), MalformedRowPolicy::Skip).unwrap();
        let assembly = assemble_records(records).unwrap();
        let got: Vec<(String, RecordOrigin)> = assembly
            .calendar
            .iter()
            .map(|r| (r.date().canonical(), r.origin()))
            .collect();
        let expected = [
            ("20231230", RecordOrigin::ExtendedWeekend),
            ("20231231", RecordOrigin::ExtendedWeekend),
            ("20240101", RecordOrigin::Source),
            ("20240208", RecordOrigin::Source),
            ("20240217", RecordOrigin::Compensated),
            ("20240405", RecordOrigin::Source),
            ("20240406", RecordOrigin::ExtendedWeekend),
            ("20240407", RecordOrigin::ExtendedWeekend),
        ];
        let expected: Vec<(String, RecordOrigin)> =
            expected.iter().map(|(d, o)| (d.to_string(), *o)).collect();
        assert_eq!(got, expected);
        assert!(assembly.report.is_clean());
    }

    #[test]
    fn makeup_day_suppresses_extension() {
        // Monday 2024-02-19 off, compensated by the Saturday before it.
        let records = vec![HolidayRecord::from_source(
            date(2024, 2, 19),
            "Bridge Holiday",
            "National Holiday",
            "Compensated by Sat. Feb 17",
        )];
        let assembly = assemble_records(records).unwrap();
        let on_17 = assembly.calendar.on(date(2024, 2, 17));
        assert_eq!(on_17.len(), 1);
        assert_eq!(on_17[0].origin(), RecordOrigin::Compensated);
        assert_eq!(assembly.calendar.on(date(2024, 2, 18)).len(), 1);
    }

    #[test]
    fn fetch_failures_degrade_to_empty_years() {
        let source = InMemorySource::new().with_year(2024, rows_2024());
        let assembly = CalendarAssembler::new(&source).assemble(&[2023, 2024]).unwrap();
        assert_eq!(assembly.report.failed_years.len(), 1);
        assert_eq!(assembly.report.failed_years[0].year, 2023);
        assert_eq!(assembly.report.skipped_rows.len(), 1);
        assert_eq!(assembly.calendar.len(), 8);
    }

    #[test]
    fn unresolved_compensation_is_reported() {
        let source = InMemorySource::new().with_year(
            2024,
            vec![RawRow::holiday(
                "Wednesday",
                "2024-07-03",
                "Typhoon Day",
                "National Holiday",
                "Compensated by a Saturday to be announced",
            )],
        );
        let assembly = CalendarAssembler::new(source).assemble(&[2024]).unwrap();
        assert_eq!(assembly.calendar.len(), 1);
        assert_eq!(assembly.report.unresolved_compensations.len(), 1);
        assert!(!assembly.report.is_clean());
    }
}

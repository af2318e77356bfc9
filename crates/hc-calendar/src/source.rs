//! Row sources: where each year's raw table rows come from.
//!
//! Retrieving the published table and picking its rows out of the markup
//! is the job of a [`RowSource`]. Two implementations ship with the crate:
//! [`InMemorySource`] for rows already at hand, and [`SnapshotSource`] for
//! saved copies of the table, one CSV file per year.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hc_core::errors::{Error, Result};
use tracing::debug;

use crate::row::{RawCell, RawRow};

/// Supplier of raw table rows, one year at a time.
pub trait RowSource {
    /// Human-readable location of the year's rows (URL, path, …) for logs.
    fn describe(&self, year: i32) -> String;

    /// Return the raw rows published for `year`.
    ///
    /// # Errors
    /// Returns [`Error::Fetch`] if the rows cannot be obtained. Callers treat
    /// that as "no rows for this year".
    fn fetch_rows(&self, year: i32) -> Result<Vec<RawRow>>;
}

impl<S: RowSource + ?Sized> RowSource for &S {
    fn describe(&self, year: i32) -> String {
        (**self).describe(year)
    }

    fn fetch_rows(&self, year: i32) -> Result<Vec<RawRow>> {
        (**self).fetch_rows(year)
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// Rows held in memory, keyed by year.
///
/// A year without an entry is a fetch failure, like a missing page.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    years: BTreeMap<i32, Vec<RawRow>>,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the rows for `year`, replacing any previous ones.
    pub fn with_year(mut self, year: i32, rows: Vec<RawRow>) -> Self {
        self.years.insert(year, rows);
        self
    }
}

impl RowSource for InMemorySource {
    fn describe(&self, year: i32) -> String {
        format!("memory:{year}")
    }

    fn fetch_rows(&self, year: i32) -> Result<Vec<RawRow>> {
        self.years.get(&year).cloned().ok_or_else(|| Error::Fetch {
            year,
            reason: "no rows loaded for this year".into(),
        })
    }
}

// ── Snapshot files ────────────────────────────────────────────────────────────

/// Saved copies of the holiday table, one `{year}.csv` per year.
///
/// Each file has a header line and then one line per table row with the
/// columns: weekday label, ISO date value, holiday label, type, comment.
/// An empty date or label column stands for a cell without the nested
/// value; short lines are kept so the row parser can reject them.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    /// Read snapshots from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the snapshot for `year`.
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{year}.csv"))
    }

    fn read(path: &Path) -> std::result::Result<Vec<RawRow>, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        let mut rows = Vec::new();
        for result in reader.records() {
            rows.push(snapshot_row(&result?));
        }
        Ok(rows)
    }
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field.filter(|s| !s.is_empty()).map(str::to_string)
}

fn snapshot_row(record: &csv::StringRecord) -> RawRow {
    let mut cells = Vec::with_capacity(record.len());
    for (idx, field) in record.iter().enumerate() {
        let cell = match idx {
            1 => RawCell {
                text: field.to_string(),
                datetime: non_empty(Some(field)),
                label: None,
            },
            2 => RawCell {
                text: field.to_string(),
                datetime: None,
                label: non_empty(Some(field)),
            },
            _ => RawCell::text(field),
        };
        cells.push(cell);
    }
    RawRow::new(cells)
}

impl RowSource for SnapshotSource {
    fn describe(&self, year: i32) -> String {
        self.path_for(year).display().to_string()
    }

    fn fetch_rows(&self, year: i32) -> Result<Vec<RawRow>> {
        let path = self.path_for(year);
        let rows = Self::read(&path).map_err(|e| Error::Fetch {
            year,
            reason: format!("{}: {e}", path.display()),
        })?;
        debug!(year, rows = rows.len(), path = %path.display(), "snapshot read");
        Ok(rows)
    }
}

//! CSV export of an assembled calendar.
//!
//! Columns, in order: `Day`, `Date`, `Holiday`, `Type`, `Is Holiday`,
//! `Comments`. `Is Holiday` is written as `True`/`False`. The file is
//! written next to its destination and renamed into place, so a failed
//! export leaves any previous file untouched.

use std::io;
use std::path::{Path, PathBuf};

use hc_core::errors::{Error, Result};
use hc_core::Settings;
use serde::{Serialize, Serializer};
use tempfile::NamedTempFile;
use tracing::info;

use crate::calendar::HolidayCalendar;
use crate::record::HolidayRecord;

/// Header of the exported table.
pub const COLUMNS: [&str; 6] = ["Day", "Date", "Holiday", "Type", "Is Holiday", "Comments"];

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Day")]
    day: &'static str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Holiday")]
    holiday: &'a str,
    #[serde(rename = "Type")]
    kind: &'a str,
    #[serde(rename = "Is Holiday", serialize_with = "title_case_bool")]
    is_holiday: bool,
    #[serde(rename = "Comments")]
    comments: &'a str,
}

impl<'a> ExportRow<'a> {
    fn new(record: &'a HolidayRecord, date_format: &str) -> Result<Self> {
        Ok(Self {
            day: record.day_of_week().name(),
            date: record.date().format(date_format)?,
            holiday: record.name(),
            kind: record.kind(),
            is_holiday: record.is_holiday(),
            comments: record.comments(),
        })
    }
}

fn title_case_bool<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

/// Writes every row, or stops at the first date that cannot be rendered or
/// row that cannot be written. The error is the failure reason.
fn write_rows<W: io::Write>(
    calendar: &HolidayCalendar,
    date_format: &str,
    writer: W,
) -> std::result::Result<(), String> {
    let mut csv = csv::Writer::from_writer(writer);
    if calendar.is_empty() {
        // serde only emits the header along with the first row
        csv.write_record(COLUMNS).map_err(|e| e.to_string())?;
    }
    for record in calendar {
        let row = ExportRow::new(record, date_format).map_err(|e| e.to_string())?;
        csv.serialize(row).map_err(|e| e.to_string())?;
    }
    csv.flush().map_err(|e| e.to_string())?;
    Ok(())
}

/// Write `calendar` as CSV to `writer`, rendering dates with `date_format`.
///
/// # Errors
/// Returns [`Error::Export`] if a date cannot be rendered with
/// `date_format` or writing fails.
pub fn write_csv<W: io::Write>(
    calendar: &HolidayCalendar,
    date_format: &str,
    writer: W,
) -> Result<()> {
    write_rows(calendar, date_format, writer).map_err(|reason| Error::Export {
        path: PathBuf::from("<stream>"),
        reason,
    })
}

/// Write `calendar` to `path`, all or nothing, with the date format of the
/// process-wide [`Settings`].
///
/// # Errors
/// Returns [`Error::Export`] if the temporary file cannot be created,
/// written, or moved onto `path`.
pub fn export_csv(calendar: &HolidayCalendar, path: &Path) -> Result<()> {
    export_csv_with_format(calendar, path, Settings::instance().date_format())
}

/// Like [`export_csv`] with an explicit date format.
///
/// A date format that cannot render a date fails the export and leaves
/// `path` untouched.
pub fn export_csv_with_format(
    calendar: &HolidayCalendar,
    path: &Path,
    date_format: &str,
) -> Result<()> {
    let failed = |reason: String| Error::Export {
        path: path.to_path_buf(),
        reason,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| failed(e.to_string()))?;
    write_rows(calendar, date_format, tmp.as_file_mut()).map_err(failed)?;
    tmp.persist(path).map_err(|e| failed(e.error.to_string()))?;
    info!(path = %path.display(), records = calendar.len(), "calendar exported");
    Ok(())
}

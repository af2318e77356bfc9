//! Raw table rows and the row parser.
//!
//! Collaborators that read the published holiday table hand over
//! [`RawRow`]s: an ordered list of cells, each with its display text and,
//! where the markup had one, a machine-readable date value and a nested
//! label. [`HolidayRow`] validates that shape once and gives the five
//! expected fields names; [`parse_row`] turns it into a [`HolidayRecord`].

use hc_core::errors::{Error, Result};
use hc_time::Date;

use crate::record::HolidayRecord;

/// Number of cells a holiday row must carry.
pub const ROW_WIDTH: usize = 5;

/// One cell of a source table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCell {
    /// Display text.
    pub text: String,
    /// Machine-readable date value embedded in the cell, if any.
    pub datetime: Option<String>,
    /// Text of a nested label (e.g. a link) inside the cell, if any.
    pub label: Option<String>,
}

impl RawCell {
    /// A cell with display text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A cell showing `text` and carrying the date value `datetime`.
    pub fn dated(text: impl Into<String>, datetime: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            datetime: Some(datetime.into()),
            label: None,
        }
    }

    /// A cell whose content is a nested label.
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            text: label.clone(),
            datetime: None,
            label: Some(label),
        }
    }
}

/// One untyped source table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Cells in table order.
    pub cells: Vec<RawCell>,
}

impl RawRow {
    /// Build a row from its cells.
    pub fn new(cells: Vec<RawCell>) -> Self {
        Self { cells }
    }

    /// Build a well-formed holiday row from its five field values.
    pub fn holiday(
        weekday: &str,
        iso_date: &str,
        name: &str,
        kind: &str,
        comment: &str,
    ) -> Self {
        Self::new(vec![
            RawCell::text(weekday),
            RawCell::dated(iso_date, iso_date),
            RawCell::labelled(name),
            RawCell::text(kind),
            RawCell::text(comment),
        ])
    }
}

/// A raw row whose shape has been validated.
///
/// All accessors return trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRow<'a> {
    weekday: &'a str,
    raw_date: &'a str,
    name: &'a str,
    kind: &'a str,
    comment: &'a str,
}

impl<'a> TryFrom<&'a RawRow> for HolidayRow<'a> {
    type Error = Error;

    fn try_from(row: &'a RawRow) -> Result<Self> {
        let [weekday, date, name, kind, comment, ..] = row.cells.as_slice() else {
            return Err(Error::Structural {
                field: "cells",
                reason: format!("expected {ROW_WIDTH} cells, found {}", row.cells.len()),
            });
        };
        let raw_date = date
            .datetime
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Structural {
                field: "date value",
                reason: format!("date cell {:?} carries no machine-readable date", date.text),
            })?;
        let name = name
            .label
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Structural {
                field: "holiday label",
                reason: format!("name cell {:?} has no nested label", name.text),
            })?;
        Ok(Self {
            weekday: weekday.text.trim(),
            raw_date,
            name,
            kind: kind.text.trim(),
            comment: comment.text.trim(),
        })
    }
}

impl<'a> HolidayRow<'a> {
    /// Weekday label as displayed by the source (not authoritative).
    pub fn weekday(&self) -> &'a str {
        self.weekday
    }

    /// Machine-readable date value.
    pub fn raw_date(&self) -> &'a str {
        self.raw_date
    }

    /// Holiday label.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Type label.
    pub fn holiday_type(&self) -> &'a str {
        self.kind
    }

    /// Free-text comment.
    pub fn comment(&self) -> &'a str {
        self.comment
    }
}

/// Parse one raw row into a classified [`HolidayRecord`].
///
/// The date comes from the embedded machine-readable value; the row's own
/// weekday label is discarded and recomputed from that date.
///
/// # Errors
/// Returns [`Error::Structural`] if the row has fewer than five cells, if
/// the date cell has no usable date value, or if the name cell has no
/// nested label.
pub fn parse_row(row: &RawRow) -> Result<HolidayRecord> {
    let fields = HolidayRow::try_from(row)?;
    let date = Date::parse_iso(fields.raw_date()).map_err(|e| Error::Structural {
        field: "date value",
        reason: e.to_string(),
    })?;
    Ok(HolidayRecord::from_source(
        date,
        fields.name(),
        fields.holiday_type(),
        fields.comment(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_time::Weekday;

    fn founding_day() -> RawRow {
        RawRow::holiday("Monday", "2024-01-01", "Founding Day", "National Holiday", "")
    }

    #[test]
    fn parses_well_formed_row() {
        let row = RawRow::holiday(
            "Thursday",
            "2024-10-10",
            "National Day",
            "National Holiday",
            " Double Tenth Day ",
        );
        let rec = parse_row(&row).unwrap();
        assert_eq!(rec.date().canonical(), "20241010");
        assert_eq!(rec.name(), "National Day");
        assert_eq!(rec.kind(), "National Holiday");
        assert_eq!(rec.comments(), "Double Tenth Day");
        assert!(rec.is_holiday());
    }

    #[test]
    fn weekday_label_is_not_authoritative() {
        let row = RawRow::holiday("Sunday", "2024-01-01", "Founding Day", "National Holiday", "");
        let rec = parse_row(&row).unwrap();
        assert_eq!(rec.day_of_week(), Weekday::Monday);
    }

    #[test]
    fn display_text_is_ignored_for_the_date() {
        let mut row = founding_day();
        row.cells[1].text = "Jan 01".into();
        assert_eq!(parse_row(&row).unwrap().date().canonical(), "20240101");
    }

    #[test]
    fn missing_date_value_is_structural() {
        let mut row = founding_day();
        row.cells[1].datetime = None;
        let err = parse_row(&row).unwrap_err();
        assert!(matches!(err, Error::Structural { field: "date value", .. }));
    }

    #[test]
    fn unparseable_date_value_is_structural() {
        let row = RawRow::holiday("Monday", "Jan 1", "Founding Day", "National Holiday", "");
        assert!(matches!(
            parse_row(&row),
            Err(Error::Structural { field: "date value", .. })
        ));
    }

    #[test]
    fn missing_label_is_structural() {
        let mut row = founding_day();
        row.cells[2] = RawCell::text("Founding Day");
        assert!(matches!(
            parse_row(&row),
            Err(Error::Structural { field: "holiday label", .. })
        ));
    }

    #[test]
    fn short_row_is_structural() {
        let row = RawRow::new(vec![RawCell::text("Monday")]);
        assert!(matches!(
            parse_row(&row),
            Err(Error::Structural { field: "cells", .. })
        ));
    }

    #[test]
    fn accessors_name_the_fields() {
        let row = RawRow::holiday(
            "Friday",
            "2024-04-05",
            "Tomb Sweeping Day",
            "National Holiday",
            "x",
        );
        let fields = HolidayRow::try_from(&row).unwrap();
        assert_eq!(fields.weekday(), "Friday");
        assert_eq!(fields.raw_date(), "2024-04-05");
        assert_eq!(fields.name(), "Tomb Sweeping Day");
        assert_eq!(fields.holiday_type(), "National Holiday");
        assert_eq!(fields.comment(), "x");
    }
}

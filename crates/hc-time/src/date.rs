//! `Date` type.
//!
//! A `Date` is a proleptic Gregorian calendar day backed by
//! [`chrono::NaiveDate`]. Its canonical form is the 8-digit numeric
//! year-month-day string (`20240101`): that is what `Display` renders and
//! what two dates are compared by. Every other textual form is derived.

use std::fmt::Write;

use chrono::{Datelike, Days, NaiveDate};
use hc_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// strftime pattern of the canonical form.
    pub const CANONICAL_FORMAT: &'static str = "%Y%m%d";

    /// strftime pattern of machine-readable ISO dates (`2024-01-01`).
    pub const ISO_FORMAT: &'static str = "%Y-%m-%d";

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .map(Date)
            .ok_or_else(|| {
                Error::Date(format!("{year}-{month:02}-{day:02} is not a calendar date"))
            })
    }

    /// Create a date from a year, a [`Month`] and a day-of-month.
    pub fn from_parts(year: i32, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Parse an ISO date (`YYYY-MM-DD`), ignoring surrounding whitespace.
    pub fn parse_iso(s: &str) -> Result<Self> {
        Self::parse_with(s, Self::ISO_FORMAT)
    }

    /// Parse the canonical form (`YYYYMMDD`).
    pub fn parse_canonical(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Date(format!("{s:?} is not an 8-digit date")));
        }
        Self::parse_with(s, Self::CANONICAL_FORMAT)
    }

    fn parse_with(s: &str, pattern: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), pattern)
            .map(Date)
            .map_err(|e| Error::Date(format!("cannot parse {s:?} as {pattern}: {e}")))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days (negative moves backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        let days = Days::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.0.checked_add_days(days)
        } else {
            self.0.checked_sub_days(days)
        };
        moved
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} moved by {n} days is out of range")))
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Return the canonical 8-digit form.
    pub fn canonical(&self) -> String {
        self.0.format(Self::CANONICAL_FORMAT).to_string()
    }

    /// Render with a strftime pattern.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the pattern is malformed or asks for a
    /// field a date does not have (time of day, offset).
    pub fn format(&self, pattern: &str) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(pattern))
            .map_err(|_| Error::Date(format!("cannot render a date with {pattern:?}")))?;
        Ok(out)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Accepts both the canonical and the ISO form.
    fn from_str(s: &str) -> Result<Self> {
        if s.contains('-') {
            Self::parse_iso(s)
        } else {
            Self::parse_canonical(s)
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year(), self.month(), self.day_of_month())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format(Self::ISO_FORMAT))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

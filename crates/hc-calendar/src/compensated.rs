//! Compensated workdays: makeup days announced in free-text comments.
//!
//! A source row announcing a makeup workday carries a comment ending in
//! `Compensated by <weekday>. <month> <day>`. The source is inconsistent
//! about token order and punctuation (`Sat. Feb 17`, `Sat Feb. 17`,
//! `Sat. 17 Feb`), so resolution runs in three separate steps:
//!
//! 1. [`CompensationTokens::tokenize`] takes the last three whitespace
//!    separated tokens of the comment;
//! 2. [`CompensationTokens::normalize`] applies the named rewrite rules
//!    until the tokens read weekday, month, day;
//! 3. [`parse_compensation_date`] reads `<weekday>. <month> <day> <year>`
//!    using the year of the originating holiday.

use hc_core::errors::{Error, Result};
use hc_time::{Date, Month, Weekday};
use tracing::{debug, warn};

use crate::record::HolidayRecord;

/// Marker announcing a makeup workday in a comment.
pub const COMPENSATION_MARKER: &str = "Compensated by";

/// The three trailing tokens of a compensation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompensationTokens {
    weekday: String,
    second: String,
    third: String,
}

impl CompensationTokens {
    /// Take the last three whitespace-separated tokens of `comment`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the comment has fewer than three
    /// tokens.
    pub fn tokenize(comment: &str) -> Result<Self> {
        let tokens: Vec<&str> = comment.split_whitespace().collect();
        let [weekday, second, third] = match tokens.as_slice() {
            [.., a, b, c] => [*a, *b, *c],
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "expected at least 3 tokens, found {}",
                    tokens.len()
                )))
            }
        };
        Ok(Self {
            weekday: weekday.to_string(),
            second: second.to_string(),
            third: third.to_string(),
        })
    }

    /// Apply the rewrite rules, in order:
    ///
    /// 1. [`mark_weekday_abbreviation`] on the first token;
    /// 2. [`strip_periods`] on the second token;
    /// 3. [`swap_inverted_day_month`] on the second and third tokens.
    pub fn normalize(mut self) -> Self {
        self.weekday = mark_weekday_abbreviation(&self.weekday);
        self.second = strip_periods(&self.second);
        swap_inverted_day_month(&mut self.second, &mut self.third);
        self
    }

    /// The tokens in their current order.
    pub fn tokens(&self) -> [&str; 3] {
        [&self.weekday, &self.second, &self.third]
    }

    /// The date string to parse: the tokens followed by `year`.
    pub fn date_text(&self, year: i32) -> String {
        format!("{} {} {} {year}", self.weekday, self.second, self.third)
    }
}

/// Rule 1: a weekday abbreviation carries a trailing period marker.
///
/// A token that already contains a period is left alone.
pub fn mark_weekday_abbreviation(token: &str) -> String {
    if token.contains('.') {
        token.to_string()
    } else {
        format!("{token}.")
    }
}

/// Rule 2: the month token carries no periods.
pub fn strip_periods(token: &str) -> String {
    token.replace('.', "")
}

/// Rule 3: a purely numeric second token is a day written before its month;
/// swap it with the third token.
///
/// Returns `true` if the tokens were swapped.
pub fn swap_inverted_day_month(second: &mut String, third: &mut String) -> bool {
    let inverted = !second.is_empty() && second.chars().all(char::is_numeric);
    if inverted {
        std::mem::swap(second, third);
    }
    inverted
}

/// Parse `<weekday>. <month> <day> <year>` into a date.
///
/// The weekday must be recognizable as a weekday name but is not checked
/// against the resulting date. A trailing `.` or `,` on the day is ignored.
///
/// # Errors
/// Returns [`Error::Date`] if the text does not have that shape or does not
/// name a calendar date.
pub fn parse_compensation_date(text: &str) -> Result<Date> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [weekday, month, day, year] = match tokens.as_slice() {
        [w, m, d, y] => [*w, *m, *d, *y],
        _ => {
            return Err(Error::Date(format!(
                "{text:?} is not <weekday> <month> <day> <year>"
            )))
        }
    };
    let stated = Weekday::parse_name(weekday)
        .ok_or_else(|| Error::Date(format!("{weekday:?} is not a weekday")))?;
    let month = Month::parse_name(month)
        .ok_or_else(|| Error::Date(format!("{month:?} is not a month")))?;
    let day: u8 = day
        .trim_end_matches(&['.', ','][..])
        .parse()
        .map_err(|_| Error::Date(format!("{day:?} is not a day of the month")))?;
    let year: i32 = year
        .parse()
        .map_err(|_| Error::Date(format!("{year:?} is not a year")))?;

    let date = Date::from_parts(year, month, day)?;
    if date.weekday() != stated {
        debug!(%date, stated = %stated, actual = %date.weekday(), "compensation weekday mismatch");
    }
    Ok(date)
}

/// Resolve the makeup workday announced by `comment` for a holiday in
/// `year`.
///
/// # Errors
/// Returns [`Error::CompensatedDate`] naming the comment and the failing
/// step.
pub fn resolve_compensated_date(comment: &str, year: i32) -> Result<Date> {
    let failed = |e: Error| Error::CompensatedDate {
        comment: comment.to_string(),
        reason: e.to_string(),
    };
    let tokens = CompensationTokens::tokenize(comment).map_err(failed)?.normalize();
    parse_compensation_date(&tokens.date_text(year)).map_err(failed)
}

// ── Compensation pass ────────────────────────────────────────────────────────

/// A compensation comment that could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CompensationFailure {
    /// Name of the holiday carrying the comment.
    pub holiday: String,
    /// Date of the holiday carrying the comment.
    pub date: Date,
    /// The resolution error.
    pub error: Error,
}

/// Output of [`compensated_records`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompensationPass {
    /// Resolved makeup workdays, in the order of their source records.
    pub records: Vec<HolidayRecord>,
    /// Comments that mention compensation but did not resolve.
    pub failures: Vec<CompensationFailure>,
}

/// Build a makeup-workday record for every record whose comment mentions
/// [`COMPENSATION_MARKER`].
///
/// A comment that does not resolve is logged and reported; it never stops
/// the pass.
pub fn compensated_records(records: &[HolidayRecord]) -> CompensationPass {
    let mut pass = CompensationPass::default();
    for record in records
        .iter()
        .filter(|r| r.comments().contains(COMPENSATION_MARKER))
    {
        match resolve_compensated_date(record.comments(), record.date().year()) {
            Ok(date) => pass
                .records
                .push(HolidayRecord::compensatory_workday(date, record.name())),
            Err(error) => {
                warn!(
                    holiday = record.name(),
                    date = %record.date(),
                    %error,
                    "skipping unresolved compensated workday"
                );
                pass.failures.push(CompensationFailure {
                    holiday: record.name().to_string(),
                    date: record.date(),
                    error,
                });
            }
        }
    }
    pass
}

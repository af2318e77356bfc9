//! Process-wide settings fixed at start-up.
//!
//! [`Settings`] holds the **output date format**, the strftime pattern used
//! when a record's date leaves the pipeline (export, display). Inside the
//! pipeline dates are always compared in their canonical numeric form; the
//! format only affects rendering.
//!
//! The settings are a process-wide value stored in a `std::sync::OnceLock`.
//! They are installed once by the binary before any processing and never
//! change afterwards. Library code that runs without an installed value sees
//! the defaults.

use std::fmt::Write;
use std::sync::OnceLock;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::errors::{Error, Result};

/// The canonical numeric year-month-day pattern (`20240101`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";

/// Process-wide settings used by holiday-calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    date_format: String,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Build settings with the given output date format.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the pattern is empty or contains a
    /// specifier chrono cannot render.
    pub fn new(date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        validate_date_format(&date_format)?;
        Ok(Self { date_format })
    }

    /// Return the installed settings, or the defaults if none were installed.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(Settings::default)
    }

    /// Install `settings` as the process-wide value.
    ///
    /// Installing a value equal to the one already in place is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if different settings were installed (or
    /// observed through [`Settings::instance`]) earlier.
    pub fn install(settings: Settings) -> Result<&'static Settings> {
        let installed = INSTANCE.get_or_init(|| settings.clone());
        if *installed != settings {
            return Err(Error::Config(format!(
                "settings already fixed with date format {:?}",
                installed.date_format
            )));
        }
        Ok(installed)
    }

    /// The strftime pattern used to render dates on output.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

fn validate_date_format(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(Error::Config("date format must not be empty".into()));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(Error::Config(format!(
            "date format {pattern:?} is not a valid strftime pattern"
        )));
    }
    // Time and offset specifiers parse fine but cannot render from a date.
    let mut sample = String::new();
    if write!(sample, "{}", NaiveDate::MIN.format(pattern)).is_err() {
        return Err(Error::Config(format!(
            "date format {pattern:?} asks for fields a calendar date does not have"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_canonical() {
        assert_eq!(Settings::default().date_format(), "%Y%m%d");
    }

    #[test]
    fn rejects_bad_patterns() {
        assert!(matches!(Settings::new(""), Err(Error::Config(_))));
        assert!(matches!(Settings::new("%Y%!"), Err(Error::Config(_))));
        assert!(Settings::new("%Y-%m-%d").is_ok());
    }

    #[test]
    fn rejects_time_and_offset_fields() {
        for pattern in ["%Y%m%d %H", "%Y-%m-%dT%H:%M", "%Y%m%d%z"] {
            assert!(
                matches!(Settings::new(pattern), Err(Error::Config(_))),
                "{pattern}"
            );
        }
        assert!(Settings::new("%A %d %B %Y").is_ok());
    }

    #[test]
    fn install_is_fixed_once() {
        // The default may already be in place; installing it again is fine.
        assert!(Settings::install(Settings::default()).is_ok());
        assert_eq!(Settings::instance().date_format(), DEFAULT_DATE_FORMAT);

        let other = Settings::new("%d/%m/%Y").unwrap();
        assert!(matches!(Settings::install(other), Err(Error::Config(_))));
        assert_eq!(Settings::instance().date_format(), DEFAULT_DATE_FORMAT);
    }
}

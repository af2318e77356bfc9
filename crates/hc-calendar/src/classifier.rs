//! Holiday classification: is a dated entry of a given type a day off?

use hc_time::Date;

/// Type label of a regular national holiday.
pub const NATIONAL_HOLIDAY: &str = "National Holiday";

/// Type label of a day extending a weekend.
pub const EXTENDED_WEEKEND: &str = "Extended Weekend";

/// Marker carried by compensation-related type labels.
pub const COMPENSATED: &str = "Compensated";

/// Marker carried by observances that are not days off.
pub const NOT_A_PUBLIC_HOLIDAY: &str = "Not A Public Holiday";

/// Category of a source type label.
///
/// The source's type labels are open-ended free text; this is the closed
/// set the classification rules distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayCategory {
    /// Exactly `"National Holiday"`.
    NationalHoliday,
    /// Exactly `"Extended Weekend"`.
    ExtendedWeekend,
    /// Contains `"Compensated"`.
    Compensated,
    /// Contains `"Not A Public Holiday"`.
    NotAPublicHoliday,
    /// Anything else.
    Other,
}

impl HolidayCategory {
    /// Categorize a type label.
    ///
    /// Exact matches are checked first, then the `Compensated` marker, then
    /// the `Not A Public Holiday` marker.
    pub fn of(label: &str) -> Self {
        match label {
            NATIONAL_HOLIDAY => HolidayCategory::NationalHoliday,
            EXTENDED_WEEKEND => HolidayCategory::ExtendedWeekend,
            _ if label.contains(COMPENSATED) => HolidayCategory::Compensated,
            _ if label.contains(NOT_A_PUBLIC_HOLIDAY) => HolidayCategory::NotAPublicHoliday,
            _ => HolidayCategory::Other,
        }
    }
}

/// Decide whether `date`, listed with type label `label`, is a day off.
///
/// * national holidays and extended weekends are days off;
/// * compensation markers never are (only the resolved makeup day is a
///   record of its own, and that one is a working day);
/// * observances that are not public holidays are days off only when they
///   fall on a weekend;
/// * anything else is a working day.
pub fn classify(date: Date, label: &str) -> bool {
    match HolidayCategory::of(label) {
        HolidayCategory::NationalHoliday | HolidayCategory::ExtendedWeekend => true,
        HolidayCategory::Compensated => false,
        HolidayCategory::NotAPublicHoliday => date.weekday().is_weekend(),
        HolidayCategory::Other => false,
    }
}

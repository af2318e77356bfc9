//! Extended weekends: weekend days adjacent to Friday or Monday holidays.

use std::collections::BTreeSet;

use hc_core::errors::Result;
use hc_time::{Date, Weekday};

use crate::record::HolidayRecord;

/// Day offsets, in emission order, of the weekend days attached to a
/// holiday falling on `weekday`.
///
/// A Friday holiday extends into the following Saturday and Sunday; a
/// Monday holiday into the preceding Sunday and Saturday.
pub fn weekend_offsets(weekday: Weekday) -> &'static [i64] {
    match weekday {
        Weekday::Friday => &[1, 2],
        Weekday::Monday => &[-1, -2],
        _ => &[],
    }
}

/// Synthesize an extended-weekend record for every weekend day adjacent to
/// a Friday or Monday day off in `records`.
///
/// A candidate date is skipped if any record of the input already carries
/// it. Only the input is consulted: records produced by this pass for one
/// holiday never suppress those produced for another.
///
/// # Errors
/// Returns an error only if a candidate date falls outside the
/// representable range.
pub fn extended_weekend_records(records: &[HolidayRecord]) -> Result<Vec<HolidayRecord>> {
    let existing: BTreeSet<Date> = records.iter().map(HolidayRecord::date).collect();
    let mut extended = Vec::new();
    for holiday in records.iter().filter(|r| r.is_holiday()) {
        for &offset in weekend_offsets(holiday.day_of_week()) {
            let candidate = holiday.date().add_days(offset)?;
            if !existing.contains(&candidate) {
                extended.push(HolidayRecord::extended_weekend(candidate, holiday.name()));
            }
        }
    }
    Ok(extended)
}

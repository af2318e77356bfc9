//! `HolidayCalendar`: the assembled, date-ordered dataset.

use std::collections::BTreeMap;

use hc_time::Date;

use crate::record::{HolidayRecord, RecordOrigin};

/// A date carried by several records that disagree on whether it is a day
/// off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConflict {
    /// The shared date.
    pub date: Date,
    /// Names of the records claiming a day off.
    pub days_off: Vec<String>,
    /// Names of the records claiming a working day.
    pub working_days: Vec<String>,
}

/// The final dataset: every record of a run, sorted by date.
///
/// Records sharing a date keep their merge order (source records, then
/// compensated workdays, then extended weekends). No record is ever dropped
/// or merged; see [`HolidayCalendar::is_day_off`] for how a consumer should
/// read dates carried by more than one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayCalendar {
    records: Vec<HolidayRecord>,
}

impl HolidayCalendar {
    /// Build the dataset from records in merge order.
    ///
    /// The sort is stable, so records sharing a date keep their relative
    /// order.
    pub fn from_records(mut records: Vec<HolidayRecord>) -> Self {
        records.sort_by_key(HolidayRecord::date);
        Self { records }
    }

    /// All records in date order.
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Iterate over the records in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records carrying `date`, in merge order.
    pub fn on(&self, date: Date) -> &[HolidayRecord] {
        let start = self.records.partition_point(|r| r.date() < date);
        let end = self.records.partition_point(|r| r.date() <= date);
        &self.records[start..end]
    }

    /// Whether `date` is a day off, or `None` if no record carries it.
    ///
    /// A compensatory workday on a date makes it a working day whatever
    /// else is listed for it; otherwise the date is a day off if any of its
    /// records says so.
    pub fn is_day_off(&self, date: Date) -> Option<bool> {
        let records = self.on(date);
        if records.is_empty() {
            return None;
        }
        if records.iter().any(|r| r.origin() == RecordOrigin::Compensated) {
            return Some(false);
        }
        Some(records.iter().any(HolidayRecord::is_holiday))
    }

    /// Dates whose records disagree on `is_holiday`, in date order.
    pub fn conflicts(&self) -> Vec<DateConflict> {
        let mut by_date: BTreeMap<Date, DateConflict> = BTreeMap::new();
        for record in &self.records {
            let entry = by_date.entry(record.date()).or_insert_with(|| DateConflict {
                date: record.date(),
                days_off: Vec::new(),
                working_days: Vec::new(),
            });
            if record.is_holiday() {
                entry.days_off.push(record.name().to_string());
            } else {
                entry.working_days.push(record.name().to_string());
            }
        }
        by_date
            .into_values()
            .filter(|c| !c.days_off.is_empty() && !c.working_days.is_empty())
            .collect()
    }
}

impl<'a> IntoIterator for &'a HolidayCalendar {
    type Item = &'a HolidayRecord;
    type IntoIter = std::slice::Iter<'a, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample() -> HolidayCalendar {
        HolidayCalendar::from_records(vec![
            HolidayRecord::from_source(date(2024, 2, 17), "Lantern Festival", "Observance", ""),
            HolidayRecord::from_source(date(2024, 1, 1), "Founding Day", "National Holiday", ""),
            HolidayRecord::compensatory_workday(date(2024, 2, 17), "Lunar New Year"),
            HolidayRecord::extended_weekend(date(2023, 12, 31), "Founding Day"),
            HolidayRecord::extended_weekend(date(2024, 2, 17), "Other Holiday"),
        ])
    }

    #[test]
    fn sorted_and_stable() {
        let cal = sample();
        let dates: Vec<String> = cal.iter().map(|r| r.date().canonical()).collect();
        assert_eq!(dates, ["20231231", "20240101", "20240217", "20240217", "20240217"]);
        let origins: Vec<RecordOrigin> = cal
            .on(date(2024, 2, 17))
            .iter()
            .map(|r| r.origin())
            .collect();
        assert_eq!(
            origins,
            [RecordOrigin::Source, RecordOrigin::Compensated, RecordOrigin::ExtendedWeekend]
        );
    }

    #[test]
    fn day_off_precedence() {
        let cal = sample();
        assert_eq!(cal.is_day_off(date(2024, 1, 1)), Some(true));
        assert_eq!(cal.is_day_off(date(2023, 12, 31)), Some(true));
        // The compensatory workday wins over the extended weekend.
        assert_eq!(cal.is_day_off(date(2024, 2, 17)), Some(false));
        assert_eq!(cal.is_day_off(date(2024, 3, 1)), None);
    }

    #[test]
    fn conflicts_are_listed() {
        let conflicts = sample().conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].date, date(2024, 2, 17));
        assert_eq!(conflicts[0].days_off, ["Extended Weekend"]);
        assert_eq!(
            conflicts[0].working_days,
            ["Lantern Festival", "Compensatory workday"]
        );
    }
}

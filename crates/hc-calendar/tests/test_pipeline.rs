//! End-to-end: snapshot files of two years through assembly and export.

use std::fs;
use std::path::Path;

use hc_calendar::export::export_csv_with_format;
use hc_calendar::{
    CalendarAssembler, HolidayCalendar, MalformedRowPolicy, RecordOrigin, SnapshotSource,
};
use hc_core::Error;
use hc_time::Date;

const SNAPSHOT_2023: &str = "\
Day,Date,Holiday,Type,Comments
Sunday,2023-01-01,Founding Day,National Holiday,
Monday,2023-01-02,Founding Day Holiday,National Holiday,
Friday,2023-01-20,Lunar New Year Holiday,National Holiday,\"Compensated by Sat. 7 Jan\"
Saturday,2023-01-21,Lunar New Year's Eve,National Holiday,
Tuesday,2023-02-14,Valentine's Day,Not A Public Holiday,
Saturday,2023-03-18,Adjusted Workday,Compensated,
Friday,2023-12-29,Year End Bank Holiday,Bank Holiday,
";

const SNAPSHOT_2024: &str = "\
Day,Date,Holiday,Type,Comments
Monday,2024-01-01,Founding Day,National Holiday,
Thursday,2024-02-08,Lunar New Year Holiday,National Holiday,Compensated by Sat. Feb 17
Saturday,2024-02-10,Lunar New Year,National Holiday,
Friday,,Row Without Date,National Holiday,
Friday,2024-04-05,Tomb Sweeping Day,National Holiday,
Thursday,2024-10-10,National Day,National Holiday,Compensated by the weekend
";

fn write_snapshots(dir: &Path) {
    fs::write(dir.join("2023.csv"), SNAPSHOT_2023).unwrap();
    fs::write(dir.join("2024.csv"), SNAPSHOT_2024).unwrap();
}

fn assemble(dir: &Path, policy: MalformedRowPolicy) -> hc_calendar::Assembly {
    CalendarAssembler::new(SnapshotSource::new(dir))
        .with_malformed_rows(policy)
        .assemble(&[2023, 2024, 2025])
        .unwrap()
}

fn canonical_dates(calendar: &HolidayCalendar) -> Vec<String> {
    calendar.iter().map(|r| r.date().canonical()).collect()
}

#[test]
fn two_years_sorted_and_resolved() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let assembly = assemble(dir.path(), MalformedRowPolicy::Skip);
    let calendar = &assembly.calendar;

    let dates = canonical_dates(calendar);
    assert!(dates.windows(2).all(|w| w[0] <= w[1]), "{dates:?}");

    // 2025 has no snapshot; the malformed 2024 row and the vague comment
    // are reported, everything else is kept.
    assert_eq!(assembly.report.failed_years.len(), 1);
    assert_eq!(assembly.report.failed_years[0].year, 2025);
    assert_eq!(assembly.report.skipped_rows.len(), 1);
    assert_eq!(assembly.report.skipped_rows[0].year, 2024);
    assert_eq!(assembly.report.skipped_rows[0].index, 3);
    assert!(matches!(assembly.report.skipped_rows[0].error, Error::Structural { .. }));
    assert_eq!(assembly.report.unresolved_compensations.len(), 1);
    assert_eq!(assembly.report.unresolved_compensations[0].holiday, "National Day");

    let makeups: Vec<String> = calendar
        .iter()
        .filter(|r| r.origin() == RecordOrigin::Compensated)
        .map(|r| r.date().canonical())
        .collect();
    assert_eq!(makeups, ["20230107", "20240217"]);

    // Monday 2023-01-02 extends back only to Saturday 2022-12-31: the
    // Sunday is a listed holiday already. Friday 2023-01-20 extends to
    // Sunday 01-22 only. The bank holiday is not a day off and is not
    // extended.
    let extended: Vec<String> = calendar
        .iter()
        .filter(|r| r.origin() == RecordOrigin::ExtendedWeekend)
        .map(|r| r.date().canonical())
        .collect();
    assert_eq!(
        extended,
        ["20221231", "20230122", "20231230", "20231231", "20240406", "20240407"]
    );
}

#[test]
fn classification_from_snapshot_types() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let calendar = assemble(dir.path(), MalformedRowPolicy::Skip).calendar;

    let day = |y, m, d| calendar.is_day_off(Date::from_ymd(y, m, d).unwrap());
    assert_eq!(day(2023, 1, 1), Some(true));
    // Not a public holiday on a Tuesday
    assert_eq!(day(2023, 2, 14), Some(false));
    // Compensated type label
    assert_eq!(day(2023, 3, 18), Some(false));
    // Makeup workday
    assert_eq!(day(2024, 2, 17), Some(false));
    assert_eq!(day(2023, 12, 29), Some(false));
    assert_eq!(day(2023, 6, 1), None);
}

#[test]
fn abort_year_policy_loses_the_whole_year() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let assembly = assemble(dir.path(), MalformedRowPolicy::AbortYear);

    let failed: Vec<i32> = assembly.report.failed_years.iter().map(|f| f.year).collect();
    assert_eq!(failed, [2024, 2025]);
    assert!(assembly.report.skipped_rows.is_empty());
    assert!(assembly
        .calendar
        .iter()
        .all(|r| r.date().year() <= 2023 || r.origin() == RecordOrigin::ExtendedWeekend));
}

#[test]
fn exported_file_has_strict_booleans_in_date_order() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let assembly = assemble(dir.path(), MalformedRowPolicy::Skip);
    let out = dir.path().join("holidays.csv");
    export_csv_with_format(&assembly.calendar, &out, "%Y%m%d").unwrap();

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, ["Day", "Date", "Holiday", "Type", "Is Holiday", "Comments"]);

    let mut previous = String::new();
    let mut rows = 0;
    for record in reader.records() {
        let record = record.unwrap();
        let date = record[1].to_string();
        assert_eq!(date.len(), 8);
        assert!(previous <= date, "{previous} > {date}");
        assert!(matches!(&record[4], "True" | "False"), "{:?}", &record[4]);
        let parsed = Date::parse_canonical(&date).unwrap();
        assert_eq!(&record[0], parsed.weekday().name());
        previous = date;
        rows += 1;
    }
    assert_eq!(rows, assembly.calendar.len());
}

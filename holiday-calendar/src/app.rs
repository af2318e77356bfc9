//! One batch run: fix the settings, assemble, export.
//!
//! Only [`configure`] can fail. Once it has succeeded, [`run`] logs every
//! failure and carries on, so the process exit status reflects
//! configuration problems only.

use hc_calendar::{
    export_csv, Assembly, AssemblyReport, CalendarAssembler, SnapshotSource, YearWindow,
};
use hc_core::errors::Result;
use hc_core::Settings;
use tracing::{error, info};

use crate::config::Config;

/// Install the process-wide settings and return the validated year window.
///
/// # Errors
/// Returns [`Error::Config`](hc_core::Error::Config) if the date format or
/// the window is invalid, or if different settings are already installed.
pub fn configure(config: &Config) -> Result<YearWindow> {
    Settings::install(config.settings()?)?;
    config.year_window()
}

/// Assemble `years` from the configured snapshots and export the result.
///
/// Returns the assembly whether or not the export succeeded, or `None` if
/// assembly itself was aborted.
pub fn run(config: &Config, years: &[i32]) -> Option<Assembly> {
    let assembler = CalendarAssembler::new(SnapshotSource::new(&config.source.snapshot_dir))
        .with_fetch_delay(config.fetch_delay())
        .with_malformed_rows(config.assembly.malformed_rows);

    let assembly = match assembler.assemble(years) {
        Ok(assembly) => assembly,
        Err(e) => {
            error!(error = %e, "assembly aborted");
            return None;
        }
    };
    summarize(&assembly.report);

    if let Err(e) = export_csv(&assembly.calendar, &config.output.path) {
        error!(error = %e, "export failed");
    }
    Some(assembly)
}

fn summarize(report: &AssemblyReport) {
    info!(
        failed_years = report.failed_years.len(),
        skipped_rows = report.skipped_rows.len(),
        unresolved_compensations = report.unresolved_compensations.len(),
        conflicts = report.conflicts.len(),
        clean = report.is_clean(),
        "assembly report"
    );
}

use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["holiday_calendar", "hc_core", "hc_time", "hc_calendar"];

/// Filter directive applying `level` to every workspace crate.
pub fn default_directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing at the configured `level` (`error` … `trace`).
///
/// `RUST_LOG` env var overrides the configured level if set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

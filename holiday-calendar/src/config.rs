//! Binary configuration
//!
//! Loads configuration from a TOML file. The file is located through the
//! `HOLIDAY_CALENDAR_CONFIG` environment variable, falling back to
//! `holiday-calendar.toml` in the working directory. Every key is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use hc_calendar::{MalformedRowPolicy, YearWindow};
use hc_core::errors::{Error, Result};
use hc_core::settings::DEFAULT_DATE_FORMAT;
use hc_core::Settings;
use serde::Deserialize;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "HOLIDAY_CALENDAR_CONFIG";

/// Configuration file used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "holiday-calendar.toml";

/// Configuration of one `holiday-calendar` run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Years to process
    #[serde(default)]
    pub window: WindowConfig,

    /// Where the rows come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Assembly behaviour
    #[serde(default)]
    pub assembly: AssemblyConfig,

    /// Export destination and rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Year window around the current year
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    /// Years before the current one
    #[serde(default = "default_years_back")]
    pub years_back: u32,

    /// Years after the current one
    #[serde(default = "default_years_forward")]
    pub years_forward: u32,
}

/// Row source settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceConfig {
    /// Directory holding one `{year}.csv` snapshot per year
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Pause between two successive year fetches, in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

/// Assembly settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssemblyConfig {
    /// `"skip"` drops a malformed row, `"abort_year"` its whole year
    #[serde(default)]
    pub malformed_rows: MalformedRowPolicy,
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Destination of the CSV file
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// strftime pattern of the `Date` column
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Level applied to every workspace crate unless `RUST_LOG` is set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_years_back() -> u32 {
    5
}

fn default_years_forward() -> u32 {
    1
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

fn default_fetch_delay_ms() -> u64 {
    1000
}

fn default_output_path() -> PathBuf {
    PathBuf::from("holidays.csv")
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            years_back: default_years_back(),
            years_forward: default_years_forward(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
            fetch_delay_ms: default_fetch_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            date_format: default_date_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Path of the configuration file for this process.
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load the configuration file named by the environment.
    pub fn load() -> Result<Self> {
        Self::from_file(Self::path_from_env())
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the file exists but cannot be read or
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {e}")))
    }

    /// The validated year window.
    pub fn year_window(&self) -> Result<YearWindow> {
        YearWindow::new(self.window.years_back, self.window.years_forward)
            .map_err(|e| Error::Config(format!("[window] {e}")))
    }

    /// The validated process-wide settings.
    pub fn settings(&self) -> Result<Settings> {
        Settings::new(self.output.date_format.as_str())
    }

    /// Pause between two successive year fetches.
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.source.fetch_delay_ms)
    }
}

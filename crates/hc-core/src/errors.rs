//! Error types for holiday-calendar.
//!
//! Every failure the pipeline can observe is a variant of one
//! `thiserror`-derived enum. Whether a variant aborts anything is decided by
//! the caller: row-level and comment-level failures are recovered from and
//! reported, only configuration failures stop a run before it starts.

use std::path::PathBuf;

use thiserror::Error;

/// The top-level error type used throughout holiday-calendar.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A raw table row is missing an expected field.
    #[error("malformed row: missing {field}: {reason}")]
    Structural {
        /// Name of the missing or unusable field.
        field: &'static str,
        /// What exactly was wrong with it.
        reason: String,
    },

    /// A "Compensated by" comment did not yield a calendar date.
    #[error("cannot resolve compensated date from {comment:?}: {reason}")]
    CompensatedDate {
        /// The comment text as found on the source row.
        comment: String,
        /// Which resolution step failed.
        reason: String,
    },

    /// The source rows for one year could not be obtained.
    #[error("cannot fetch rows for {year}: {reason}")]
    Fetch {
        /// Year whose rows were requested.
        year: i32,
        /// Description of the underlying failure.
        reason: String,
    },

    /// The dataset could not be written to its destination.
    #[error("cannot export to {}: {reason}", path.display())]
    Export {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Date construction, parsing or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout holiday-calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hc_core::{ensure, errors::Error};
/// fn window(back: u32) -> hc_core::errors::Result<u32> {
///     ensure!(back <= 100, "years_back must be at most 100, got {back}");
///     Ok(back)
/// }
/// assert!(window(5).is_ok());
/// assert!(window(500).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

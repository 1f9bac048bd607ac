//! Metrics Appender - accumulates CSV system-metrics rows in a log file
//!
//! This crate runs an external metrics-collection program and appends its
//! output to a CSV log file, one data row per run. The collector owns the
//! CSV schema entirely: asked for its `header` format it prints the column
//! line, asked for `csv` it prints one measurement. This crate shuttles
//! those lines without parsing them.
//!
//! # Behavior
//!
//! - If the log file is absent or empty, the header line is written first.
//! - Exactly one data row is then appended.
//! - The file is never truncated or deleted once initialised, so repeated
//!   runs (typically driven by cron or a timer unit) grow it by one row each.
//!
//! # Examples
//!
//! ```no_run
//! use metrics_appender::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let appender = Appender::from_config(AppenderConfig::default());
//!     appender.run().await
//! }
//! ```
//!
//! # Error Handling
//!
//! Collector failures are classified rather than ignored: a missing
//! executable surfaces as [`Error::CollectorNotFound`], a non-zero exit as
//! [`Error::CollectorFailed`] carrying the captured stderr, and output that
//! is not exactly one line as [`Error::InvalidOutput`]. A failed run leaves
//! previously logged rows untouched.

#![doc(html_root_url = "https://docs.rs/metrics-appender/0.1.0")]

pub mod appender;
pub mod collector;
pub mod error;
pub mod logfile;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::appender::{Appender, AppenderConfig};
    pub use crate::collector::{CollectorCommand, MetricsSource, OutputMode};
    pub use crate::logfile::LogFile;
    pub use crate::{Error, Result};
}

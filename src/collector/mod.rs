//! Invocation of the external metrics-collection program.
//!
//! The collector is a black box with a two-mode CLI contract: asked for
//! `header` it prints the CSV column line, asked for `csv` it prints one
//! data line. Everything it prints is treated as opaque text; this module
//! never parses columns.

mod types;


pub use types::OutputMode;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use tokio::process::Command;

use crate::error::{Error, Result};

/// A source of CSV-formatted metrics lines.
///
/// The real implementation shells out to the collector program; tests swap
/// in a mock.
#[automock]
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// One CSV header line naming the columns.
    async fn header_line(&self) -> Result<String>;

    /// One CSV data line matching the header's column count and order.
    async fn sample_line(&self) -> Result<String>;
}

/// Runs the collector program as a subprocess, one invocation per line.
///
/// Each invocation blocks until the child exits (or the configured deadline
/// elapses), captures stdout and stderr, and checks the exit status. A
/// non-zero exit surfaces as [`Error::CollectorFailed`] carrying whatever
/// the child wrote to stderr.
#[derive(Debug, Clone)]
pub struct CollectorCommand {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl CollectorCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Bounds each invocation by a deadline. The child is killed when the
    /// deadline elapses.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    async fn capture(&self, mode: OutputMode) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--format").arg(mode.as_flag()).arg("--once");
        cmd.kill_on_drop(true);

        log::debug!("Running {} in {} mode", self.program.display(), mode);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    Error::timeout(format!(
                        "{} did not exit within {limit:?} in {mode} mode",
                        self.program.display()
                    ))
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::collector_not_found(self.program.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(Error::CollectorFailed {
                mode,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        single_line(&output.stdout, mode)
    }
}

#[async_trait]
impl MetricsSource for CollectorCommand {
    async fn header_line(&self) -> Result<String> {
        self.capture(OutputMode::Header).await
    }

    async fn sample_line(&self) -> Result<String> {
        self.capture(OutputMode::Csv).await
    }
}

/// Reduces captured stdout to the single CSV line the contract promises.
fn single_line(stdout: &[u8], mode: OutputMode) -> Result<String> {
    let text = String::from_utf8_lossy(stdout);
    let line = text.trim_end_matches(['\r', '\n']);

    if line.is_empty() {
        return Err(Error::invalid_output(format!(
            "collector printed nothing in {mode} mode"
        )));
    }
    if line.contains('\n') {
        return Err(Error::invalid_output(format!(
            "collector printed more than one line in {mode} mode"
        )));
    }

    Ok(line.to_string())
}

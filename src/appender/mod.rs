//! The append cycle: header once, one data row per run.

mod types;


pub use types::{AppenderConfig, DEFAULT_COLLECTOR_PATH, DEFAULT_LOG_PATH};

use crate::collector::{CollectorCommand, MetricsSource};
use crate::error::Result;
use crate::logfile::LogFile;

/// Appends one metrics row to the log file per run, writing the header
/// first when the file is new.
///
/// The log file moves through a two-state lifecycle: uninitialised (absent
/// or empty) until the first header write, initialised thereafter. Repeated
/// runs only ever append. Overlapping runs are not locked against each
/// other; scheduling is expected to be non-overlapping.
pub struct Appender {
    source: Box<dyn MetricsSource>,
    log: LogFile,
}

impl Appender {
    pub fn new(source: Box<dyn MetricsSource>, log: LogFile) -> Self {
        Self { source, log }
    }

    /// Builds an appender driving the real collector subprocess.
    pub fn from_config(config: AppenderConfig) -> Self {
        let mut collector = CollectorCommand::new(config.collector_path);
        if let Some(limit) = config.timeout {
            collector = collector.with_timeout(limit);
        }
        Self::new(Box::new(collector), LogFile::new(config.log_path))
    }

    pub fn log_file(&self) -> &LogFile {
        &self.log
    }

    /// Runs one append cycle.
    ///
    /// If the log file is absent or empty, the header line is fetched and
    /// written first; then exactly one data line is fetched and appended.
    /// The header step always completes before the append step. A failure
    /// in either collector invocation or file write aborts the run with the
    /// error and leaves previously written lines untouched.
    pub async fn run(&self) -> Result<()> {
        if self.log.needs_header().await {
            let header = self.source.header_line().await?;
            self.log.write_header(&header).await?;
            log::info!("Initialised {} with header row", self.log.path().display());
        }

        let row = self.source.sample_line().await?;
        self.log.append_row(&row).await?;
        log::debug!("Appended one data row to {}", self.log.path().display());

        Ok(())
    }
}

//! Lifecycle of the append-only CSV log file.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// The CSV log file on disk.
///
/// Once initialised, the first line is always the collector's header row and
/// every later line is a data row. This type never truncates or deletes an
/// initialised file; the only overwrite happens when the file is absent or
/// zero bytes and the header goes in.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file is absent or zero bytes. An empty file counts the
    /// same as a missing one.
    pub async fn needs_header(&self) -> bool {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }

    /// Writes the header line, replacing whatever absent or empty content
    /// was at the path.
    pub async fn write_header(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }

    /// Appends one data line, creating the file if it vanished since the
    /// header check.
    pub async fn append_row(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

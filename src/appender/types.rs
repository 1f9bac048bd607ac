use std::path::PathBuf;
use std::time::Duration;

/// Default location of the CSV log file.
pub const DEFAULT_LOG_PATH: &str = "/var/log/system_metrics.csv";

/// Default location of the external collector program.
pub const DEFAULT_COLLECTOR_PATH: &str = "/usr/local/bin/system-metrics";

/// Fixed configuration for a run.
///
/// There are no environment variables and no CLI flags; the defaults are
/// baked-in constants and callers embedding the library may override them
/// programmatically.
#[derive(Debug, Clone)]
pub struct AppenderConfig {
    /// CSV log file location.
    pub log_path: PathBuf,
    /// External collector program location.
    pub collector_path: PathBuf,
    /// Optional deadline applied to each collector invocation.
    pub timeout: Option<Duration>,
}

impl Default for AppenderConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            collector_path: PathBuf::from(DEFAULT_COLLECTOR_PATH),
            timeout: None,
        }
    }
}

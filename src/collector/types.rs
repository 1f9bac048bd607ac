use std::fmt;

/// Output mode requested from the external collector.
///
/// The two modes are symmetric: `Header` names the columns, `Csv` produces
/// one measurement matching that column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the CSV header line naming all columns.
    Header,
    /// Print one CSV data line.
    Csv,
}

impl OutputMode {
    /// The value passed to the collector's `--format` flag.
    pub fn as_flag(self) -> &'static str {
        match self {
            OutputMode::Header => "header",
            OutputMode::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

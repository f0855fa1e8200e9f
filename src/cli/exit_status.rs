use std::process::ExitCode;

/// Exit status for the CLI.
///
/// Finding unused components is not a failure: the scan succeeded.
///
/// - `Success` (0): Scan completed, whether or not unused components were found
/// - `Error` (1): Scan could not run (missing source directory, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed.
    Success,
    /// Scan failed due to a configuration or I/O error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): The document was translated and written
/// - `Failure` (1): Usage error or missing input file, nothing was read or written
/// - `Error` (2): The run failed after starting (config, translation backend, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The document was translated and written.
    Success,
    /// Usage error or missing input file.
    Failure,
    /// The run failed after starting.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No findings were reported.
    Success,
    /// At least one finding was reported, or a file couldn't be read.
    Failure,
    /// Invalid arguments or configuration.
    UsageError,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::UsageError => ExitCode::from(32),
        }
    }
}

//! Exit status codes for the CLI
//!
//! Every command exits 0 when it printed a success envelope and 1 for any
//! error, whatever its kind (usage, configuration, upstream or transport).

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Success envelope (or help document) printed to stdout
    Success = 0,
    /// Error envelope printed to stderr
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

use std::process::ExitCode;

/// Process exit status of an ftlsync invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Done; nothing left to do.
    Success,
    /// `sync --check` found keys that still have to be added.
    Failure,
    /// A file, the config or the command line could not be used.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

//! Command error type and process exit codes.

use catalog_core::storage::{repository_error_kind, ErrorKind, RepositoryError};

/// Command error type that wraps `anyhow::Error`.
///
/// This allows using `?` on anything convertible into `anyhow::Error` while
/// still recovering the repository error class for the exit code.
#[derive(Debug)]
pub struct CommandError(anyhow::Error);

impl CommandError {
    /// Classifies the failure. Errors that did not come from the repository
    /// are internal.
    pub fn kind(&self) -> ErrorKind {
        self.0
            .downcast_ref::<RepositoryError>()
            .map(repository_error_kind)
            .unwrap_or(ErrorKind::Internal)
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Internal => 1,
            ErrorKind::InvalidInput => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::Conflict => 4,
        }
    }

    /// Logs the failure and prints it to stderr.
    pub fn report(&self) {
        tracing::error!(kind = %self.kind(), error = %self.0, "Command failed");
        eprintln!("Error: {:#}", self.0);
    }
}

impl<E> From<E> for CommandError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

//! CLI error handling and exit-code mapping.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use acpgen_common_fs::FsError;

/// CLI error type with per-variant exit codes
#[derive(Debug, Error)]
pub enum CliError {
    /// The user invoked the tool incorrectly (wrong directory, bad input).
    #[error("{message}")]
    User {
        message: String,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            Self::User { .. } => 1,
            Self::Io { .. } => 3,
        }
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::User { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create a user error with hint
    pub fn user_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

// Conversion implementations
impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<FsError> for CliError {
    fn from(err: FsError) -> Self {
        let message = err.to_string();
        let path = err.path().to_path_buf();
        let source = match err {
            FsError::CreateDir { source, .. }
            | FsError::Write { source, .. }
            | FsError::SetPermissions { source, .. } => source,
        };
        Self::Io {
            message,
            source,
            path: Some(path),
        }
    }
}

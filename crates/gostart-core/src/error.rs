//! Unified error handling for gostart core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for gostart core operations.
#[derive(Debug, Error, Clone)]
pub enum GoStartError {
    /// A file has the wrong shape, or an answer is unusable.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Talking to the filesystem or the terminal failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl GoStartError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Parse => ErrorCategory::Parse,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A file could not be read or written, or stdin failed.
    Io,
    /// A required pattern is absent from a file.
    Parse,
    /// A value is empty or malformed.
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type GoStartResult<T> = Result<T, GoStartError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn display_is_transparent() {
        let err: GoStartError = DomainError::BuildKeyMissing { key: "SSH_USER" }.into();
        assert_eq!(err.to_string(), "build file is missing required key 'SSH_USER'");
    }

    #[test]
    fn categories_follow_the_wrapped_error() {
        let io: GoStartError = ApplicationError::FilesystemError {
            path: PathBuf::from("Makefile"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(io.category(), ErrorCategory::Io);

        let parse: GoStartError = DomainError::ModuleLineMissing {
            manifest: "go.mod".into(),
        }
        .into();
        assert_eq!(parse.category(), ErrorCategory::Parse);

        let poisoned: GoStartError = ApplicationError::LockPoisoned.into();
        assert_eq!(poisoned.category(), ErrorCategory::Internal);
    }
}

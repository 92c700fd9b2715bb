//! Application layer errors.
//!
//! These errors represent failures talking to the outside world (files,
//! the terminal), not a wrong file shape. Those are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading an answer from the user failed.
    #[error("Failed to read answer: {reason}")]
    PromptFailed { reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and you have read/write permissions".into(),
                "Run gostart from the root of the template project".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Standard input was closed or is not readable".into(),
                "Pipe answers one per line, e.g. printf 'app\\nexample.com/app\\n\\n\\n\\ny\\n' | gostart init".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug; please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

//! Domain errors: the shape of a target file is wrong, or a value the user
//! gave cannot be written into it.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the init command reports them after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Parse Errors (the file does not have the expected shape)
    // ========================================================================
    #[error("module path not found in {manifest}")]
    ModuleLineMissing { manifest: String },

    #[error("build file is missing required key '{key}'")]
    BuildKeyMissing { key: &'static str },

    #[error("refusing to rename {from} to {to}: destination already exists")]
    UnitRenameConflict { from: String, to: String },

    // ========================================================================
    // Validation Errors (the user's answer is unusable)
    // ========================================================================
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModuleLineMissing { manifest } => vec![
                format!("{manifest} must declare the module, e.g. 'module github.com/acme/app'"),
                "Run gostart from the root of the template project".into(),
            ],
            Self::BuildKeyMissing { key } => vec![
                format!("Add a line '{key} := ...' to the build file"),
                "The template's Makefile may have been edited; restore it from version control"
                    .into(),
            ],
            Self::UnitRenameConflict { to, .. } => vec![
                format!("Remove or move {to} and run init again"),
                "Or use --unit-mode in-place to keep the original file names".into(),
            ],
            Self::MissingRequiredField { field } => vec![format!("Provide a value for {field}")],
            Self::InvalidField { field, .. } => match *field {
                "deploy target IP" => vec!["Use a dotted-decimal IPv4 address, e.g. 10.0.0.12".into()],
                _ => vec!["Values cannot be empty or contain whitespace or quotes".into()],
            },
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleLineMissing { .. }
            | Self::BuildKeyMissing { .. }
            | Self::UnitRenameConflict { .. } => ErrorCategory::Parse,
            Self::MissingRequiredField { .. } | Self::InvalidField { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Validation,
}

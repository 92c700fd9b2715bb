//! Core domain layer for gostart.
//!
//! This module contains pure logic with ZERO I/O. Reading and writing files,
//! and asking the user questions, are handled via ports (traits) defined in
//! the application layer.
//!
//! - **entities**: the [`ProjectConfig`] collected from the user
//! - **rewrite**: text transforms for the manifest, build file and unit files
//! - **value_objects**: small enums shared by the CLI and configuration

pub mod entities;
pub mod error;
pub mod rewrite;
pub mod value_objects;

mod validation;

pub use entities::{DEFAULT_SSH_USER, ProjectConfig, ProjectConfigBuilder};
pub use error::{DomainError, ErrorCategory};
pub use rewrite::{
    BuildKey, BuildVars, parse_module_path, renamed_file_name, replace_module,
    rewrite_build_file, substitute_placeholder,
};
pub use validation::FieldValidator;
pub use value_objects::{UnitFileMode, UnitKind};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn unit_mode_parses_correctly() {
        assert_eq!(UnitFileMode::from_str("rename").unwrap(), UnitFileMode::Rename);
        assert_eq!(UnitFileMode::from_str("IN-PLACE").unwrap(), UnitFileMode::InPlace);
        assert!(UnitFileMode::from_str("copy").is_err());
    }

    #[test]
    fn unit_mode_default_is_rename() {
        assert_eq!(UnitFileMode::default(), UnitFileMode::Rename);
        assert_eq!(UnitFileMode::InPlace.to_string(), "in-place");
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            DomainError::BuildKeyMissing { key: "SSH_USER" }.category(),
            ErrorCategory::Parse
        );
        assert_eq!(
            DomainError::MissingRequiredField { field: "module path" }.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn every_error_has_a_suggestion() {
        let errors = [
            DomainError::ModuleLineMissing {
                manifest: "go.mod".into(),
            },
            DomainError::BuildKeyMissing { key: "EXEC_NAME" },
            DomainError::UnitRenameConflict {
                from: "remote/a.service".into(),
                to: "remote/b.service".into(),
            },
            DomainError::MissingRequiredField { field: "module path" },
            DomainError::InvalidField {
                field: "deploy target IP",
                value: "x".into(),
                reason: "bad".into(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "no suggestion for {err}");
        }
    }
}

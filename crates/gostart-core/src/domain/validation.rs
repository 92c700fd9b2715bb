use std::net::Ipv4Addr;

use crate::domain::error::DomainError;

/// Centralized field validation.
///
/// Every value that ends up in a rewritten file passes through here, so the
/// rewrite functions can assume single-token, quote-free input.
pub struct FieldValidator;

impl FieldValidator {
    /// A module path is required and must be a single token.
    pub fn validate_module_path(value: &str) -> Result<(), DomainError> {
        if value.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "module path",
            });
        }
        Self::validate_token("module path", value)
    }

    /// Project name, executable name and SSH user share one rule.
    pub fn validate_token(field: &'static str, value: &str) -> Result<(), DomainError> {
        let reason = if value.is_empty() {
            Some("cannot be empty")
        } else if value.chars().any(char::is_whitespace) {
            Some("cannot contain whitespace")
        } else if value.contains('"') {
            Some("cannot contain quotes")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidField {
                field,
                value: value.into(),
                reason: reason.into(),
            }),
            None => Ok(()),
        }
    }

    /// The project name also becomes a unit file name, so it must not
    /// leave the unit directory.
    pub fn validate_project_name(value: &str) -> Result<(), DomainError> {
        Self::validate_token("project name", value)?;
        let reason = if value.contains(['/', '\\']) {
            Some("cannot contain path separators")
        } else if value == "." || value == ".." {
            Some("cannot be '.' or '..'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidField {
                field: "project name",
                value: value.into(),
                reason: reason.into(),
            }),
            None => Ok(()),
        }
    }

    pub fn validate_deploy_target(value: &str) -> Result<(), DomainError> {
        value
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| DomainError::InvalidField {
                field: "deploy target IP",
                value: value.into(),
                reason: "expected a dotted-decimal IPv4 address".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_module_path_is_missing() {
        assert!(matches!(
            FieldValidator::validate_module_path(""),
            Err(DomainError::MissingRequiredField { field: "module path" })
        ));
    }

    #[test]
    fn module_path_with_space_is_invalid() {
        assert!(FieldValidator::validate_module_path("github.com/a b").is_err());
        assert!(FieldValidator::validate_module_path("github.com/acme/app").is_ok());
    }

    #[test]
    fn tokens_reject_quotes_and_whitespace() {
        assert!(FieldValidator::validate_token("project name", "my app").is_err());
        assert!(FieldValidator::validate_token("project name", "my\"app").is_err());
        assert!(FieldValidator::validate_token("project name", "").is_err());
        assert!(FieldValidator::validate_token("project name", "my-app_2").is_ok());
    }

    #[test]
    fn project_name_cannot_escape_unit_dir() {
        for name in ["../escaped", "a/b", "a\\b", ".", ".."] {
            assert!(
                FieldValidator::validate_project_name(name).is_err(),
                "{name} accepted"
            );
        }
        assert!(FieldValidator::validate_project_name("my-app.v2").is_ok());
        assert!(FieldValidator::validate_project_name("my app").is_err());
    }

    #[test]
    fn deploy_target_must_be_ipv4() {
        assert!(FieldValidator::validate_deploy_target("10.0.0.12").is_ok());
        assert!(FieldValidator::validate_deploy_target("10.0.0").is_err());
        assert!(FieldValidator::validate_deploy_target("example.com").is_err());
        assert!(FieldValidator::validate_deploy_target("::1").is_err());
    }
}

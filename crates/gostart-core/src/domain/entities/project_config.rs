//! The `ProjectConfig` entity and its builder.
//!
//! A `ProjectConfig` is the new identity of the template project, collected
//! once per `init` run and consumed by the rewrite operations. It is never
//! persisted. Once built, every field has passed [`FieldValidator`].

use std::fmt;

use crate::domain::{error::DomainError, validation::FieldValidator};

/// SSH user written to the build file when the user keeps the default.
pub const DEFAULT_SSH_USER: &str = "ansible";

/// A fully-validated project identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    module_path: String,
    exec_name: String,
    ssh_user: String,
    deploy_target_ip: Option<String>,
}

impl ProjectConfig {
    /// Start building a `ProjectConfig`.
    pub fn builder(
        project_name: impl Into<String>,
        module_path: impl Into<String>,
    ) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(project_name, module_path)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn module_path(&self) -> &str {
        &self.module_path
    }
    pub fn exec_name(&self) -> &str {
        &self.exec_name
    }
    pub fn ssh_user(&self) -> &str {
        &self.ssh_user
    }
    pub fn deploy_target_ip(&self) -> Option<&str> {
        self.deploy_target_ip.as_deref()
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.project_name, self.module_path)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectConfig`].
///
/// Unset optional fields fall back to their defaults at `build()`:
/// `exec_name` to the project name, `ssh_user` to [`DEFAULT_SSH_USER`].
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    project_name: String,
    module_path: String,
    exec_name: Option<String>,
    ssh_user: Option<String>,
    deploy_target_ip: Option<String>,
}

impl ProjectConfigBuilder {
    fn new(project_name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_path: module_path.into(),
            exec_name: None,
            ssh_user: None,
            deploy_target_ip: None,
        }
    }

    pub fn exec_name(mut self, exec_name: impl Into<String>) -> Self {
        self.exec_name = Some(exec_name.into());
        self
    }

    pub fn ssh_user(mut self, ssh_user: impl Into<String>) -> Self {
        self.ssh_user = Some(ssh_user.into());
        self
    }

    /// An empty string is the same as not setting a deploy target.
    pub fn deploy_target_ip(mut self, ip: Option<impl Into<String>>) -> Self {
        self.deploy_target_ip = ip.map(Into::into).filter(|ip: &String| !ip.is_empty());
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let exec_name = self
            .exec_name
            .unwrap_or_else(|| self.project_name.clone());
        let ssh_user = self.ssh_user.unwrap_or_else(|| DEFAULT_SSH_USER.into());

        FieldValidator::validate_project_name(&self.project_name)?;
        FieldValidator::validate_module_path(&self.module_path)?;
        FieldValidator::validate_token("executable name", &exec_name)?;
        FieldValidator::validate_token("SSH user", &ssh_user)?;
        if let Some(ip) = &self.deploy_target_ip {
            FieldValidator::validate_deploy_target(ip)?;
        }

        Ok(ProjectConfig {
            project_name: self.project_name,
            module_path: self.module_path,
            exec_name,
            ssh_user,
            deploy_target_ip: self.deploy_target_ip,
        })
    }
}

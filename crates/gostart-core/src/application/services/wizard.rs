//! Config Wizard - collects a [`ProjectConfig`] through the `Prompter` port.
//!
//! Every question shows its default; an empty answer takes it. A rejected
//! answer is explained and the same question is asked again, except at end
//! of input, where the rejection becomes the error.

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompter,
    domain::{DomainError, FieldValidator, ProjectConfig},
    error::GoStartResult,
};

/// Defaults shown to the user when they press Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDefaults {
    /// Usually the basename of the working directory.
    pub project_name: String,
    pub ssh_user: String,
}

/// Interactive questionnaire for `gostart init`.
pub struct ConfigWizard<'a> {
    prompter: &'a mut dyn Prompter,
    defaults: WizardDefaults,
}

impl<'a> ConfigWizard<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, defaults: WizardDefaults) -> Self {
        Self { prompter, defaults }
    }

    /// Ask for every field in order and build the validated config.
    #[instrument(skip_all)]
    pub fn collect(&mut self) -> GoStartResult<ProjectConfig> {
        let default_name = self.defaults.project_name.clone();
        let project_name = self.ask_valid(
            &format!("Project name (default: {default_name}): "),
            &default_name,
            FieldValidator::validate_project_name,
        )?;

        let module_path = self.ask_valid(
            "Go module path (e.g., github.com/username/repo): ",
            "",
            FieldValidator::validate_module_path,
        )?;

        let exec_name = self.ask_valid(
            &format!("Executable name (default: {project_name}): "),
            &project_name,
            |v| FieldValidator::validate_token("executable name", v),
        )?;

        let default_user = self.defaults.ssh_user.clone();
        let ssh_user = self.ask_valid(
            &format!("SSH user for deployment (default: {default_user}): "),
            &default_user,
            |v| FieldValidator::validate_token("SSH user", v),
        )?;

        let deploy_target_ip = self.ask_valid(
            "Deployment target IP (press Enter to skip): ",
            "",
            |v| match v {
                "" => Ok(()),
                ip => FieldValidator::validate_deploy_target(ip),
            },
        )?;

        let config = ProjectConfig::builder(project_name, module_path)
            .exec_name(exec_name)
            .ssh_user(ssh_user)
            .deploy_target_ip(Some(deploy_target_ip))
            .build()?;
        debug!(project = %config, "Answers collected");
        Ok(config)
    }

    /// Ask the final y/n question. Only a case-insensitive `y` proceeds.
    pub fn confirm(&mut self) -> GoStartResult<bool> {
        let answer = self.prompter.ask("Proceed with these settings? (y/n): ")?;
        Ok(answer.as_deref().is_some_and(is_confirmation))
    }

    fn ask_valid(
        &mut self,
        message: &str,
        default: &str,
        check: impl Fn(&str) -> Result<(), DomainError>,
    ) -> GoStartResult<String> {
        loop {
            let answer = self.prompter.ask(message)?;
            let at_eof = answer.is_none();
            let value = answer
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| default.to_string());

            match check(&value) {
                Ok(()) => return Ok(value),
                Err(err) if at_eof => return Err(err.into()),
                Err(err) => self.prompter.say(&rejection(&err))?,
            }
        }
    }
}

/// `true` only for `y` / `Y` (surrounding blanks ignored). `yes` is a no.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn rejection(err: &DomainError) -> String {
    match err {
        DomainError::MissingRequiredField { field } => {
            format!("{} is required!", capitalize(field))
        }
        other => capitalize(&other.to_string()),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

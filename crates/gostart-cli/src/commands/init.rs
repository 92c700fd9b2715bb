//! `gostart init`: rename the template project in place.

use tracing::{info, instrument};

use gostart_adapters::{LinePrompter, LocalFilesystem};
use gostart_core::{
    application::ports::Prompter,
    domain::{BuildVars, ProjectConfig, UnitFileMode},
    prelude::{ConfigWizard, InitService, WizardDefaults},
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const RULE: &str = "==========================================";

/// Run the initializer in the working directory.
#[instrument(skip_all, fields(yes = args.yes))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    banner(&output, "Go Project Template Initialization")?;
    output.blank()?;

    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        config.init.placeholder.clone(),
    );
    let paths = &config.paths;

    // Fail before asking anything if the manifest is unusable.
    let current_module = service
        .read_module_path(&paths.manifest)
        .with_cli_context(|| format!("reading {}", paths.manifest.display()))?;
    info!(module = %current_module, "Current module path");

    let cwd = std::env::current_dir().with_cli_context(|| "reading the working directory")?;
    let defaults = WizardDefaults {
        project_name: cwd
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.init.placeholder.clone()),
        ssh_user: config.init.default_ssh_user.clone(),
    };

    let mut prompter = prompter();
    let mut wizard = ConfigWizard::new(prompter.as_mut(), defaults);
    let project = wizard.collect()?;

    print_summary(&output, &project)?;

    let confirmed = args.yes || wizard.confirm()?;
    if !confirmed {
        output.print("Initialization cancelled.")?;
        return Ok(());
    }

    output.blank()?;
    output.print("Initializing project...")?;

    service
        .update_go_mod(&paths.manifest, &current_module, project.module_path())
        .with_cli_context(|| format!("updating {}", paths.manifest.display()))?;
    output.success(&format!("Updated {}", paths.manifest.display()))?;

    service
        .update_makefile(&paths.build_file, &BuildVars::from(&project))
        .with_cli_context(|| format!("updating {}", paths.build_file.display()))?;
    output.success(&format!("Updated {}", paths.build_file.display()))?;

    let mode: UnitFileMode = args
        .unit_mode
        .map(Into::into)
        .unwrap_or(config.init.unit_mode);
    match service.update_systemd_files(&paths.unit_dir, project.project_name(), mode) {
        Ok(sweep) if sweep.dir_missing => output.warning(&format!(
            "Warning: no service-unit directory at {}; skipping",
            paths.unit_dir.display()
        ))?,
        Ok(sweep) => {
            for change in &sweep.changes {
                if change.renamed() {
                    output.success(&format!(
                        "Renamed {} to {}",
                        change.from.display(),
                        change.to.display()
                    ))?;
                } else {
                    output.success(&format!("Updated {}", change.to.display()))?;
                }
            }
        }
        Err(e) => output.warning(&format!("Warning: {e}"))?,
    }

    info!(project = %project, %mode, "Project initialized");

    output.blank()?;
    banner(&output, "\u{2713} Initialization complete!")?;
    output.blank()?;
    output.print("Next steps:")?;
    output.print(&format!(
        "  1. Review the updated files ({}, {})",
        paths.manifest.display(),
        paths.build_file.display()
    ))?;
    output.print("  2. Run 'make doctor' to verify your development environment")?;
    output.print("  3. Run 'make help' to see available commands")?;
    output.blank()?;
    output.print("Happy coding! \u{1f680}")?;

    Ok(())
}

fn banner(output: &OutputManager, title: &str) -> CliResult<()> {
    output.header(RULE)?;
    output.header(title)?;
    output.header(RULE)?;
    Ok(())
}

fn print_summary(output: &OutputManager, project: &ProjectConfig) -> CliResult<()> {
    output.blank()?;
    banner(output, "Configuration Summary:")?;
    output.field("Project name", project.project_name())?;
    output.field("Module path", project.module_path())?;
    output.field("Executable name", project.exec_name())?;
    output.field("SSH user", project.ssh_user())?;
    output.field(
        "Deploy target IP",
        project.deploy_target_ip().unwrap_or("<not set>"),
    )?;
    output.blank()?;
    Ok(())
}

/// Line editing on a terminal, plain line reads when stdin is piped.
#[cfg(feature = "interactive")]
fn prompter() -> Box<dyn Prompter> {
    use std::io::IsTerminal as _;

    if std::io::stdin().is_terminal() {
        Box::new(gostart_adapters::TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::stdio())
    }
}

#[cfg(not(feature = "interactive"))]
fn prompter() -> Box<dyn Prompter> {
    Box::new(LinePrompter::stdio())
}

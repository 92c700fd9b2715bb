//! Init Service - rewrites the template project in place.
//!
//! Each public method is one step of `gostart init`. The caller decides the
//! order and which failures are fatal; the service only reads through the
//! `Filesystem` port, applies a domain rewrite and writes the result back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        BuildVars, DomainError, FieldValidator, UnitFileMode, UnitKind, parse_module_path,
        renamed_file_name, replace_module, rewrite_build_file, substitute_placeholder,
    },
    error::GoStartResult,
};

/// One service-unit file that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitChange {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl UnitChange {
    pub fn renamed(&self) -> bool {
        self.from != self.to
    }
}

/// Outcome of processing the service-unit directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitSweep {
    /// The directory does not exist; nothing was processed.
    pub dir_missing: bool,
    pub changes: Vec<UnitChange>,
}

/// Main initialization service.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    placeholder: String,
}

impl InitService {
    /// Create a service writing through `filesystem`. `placeholder` is the
    /// token in unit files that stands for the project name.
    pub fn new(filesystem: Box<dyn Filesystem>, placeholder: impl Into<String>) -> Self {
        Self {
            filesystem,
            placeholder: placeholder.into(),
        }
    }

    /// Read the module path declared in the manifest.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_module_path(&self, path: &Path) -> GoStartResult<String> {
        let content = self.filesystem.read_to_string(path)?;
        let module = parse_module_path(&content).ok_or_else(|| DomainError::ModuleLineMissing {
            manifest: path.display().to_string(),
        })?;
        debug!(module, "Module path found");
        Ok(module.to_string())
    }

    /// Swap the manifest's module line. A manifest without the old line is
    /// written back unchanged.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn update_go_mod(&self, path: &Path, old_module: &str, new_module: &str) -> GoStartResult<()> {
        let content = self.filesystem.read_to_string(path)?;
        let updated = replace_module(&content, old_module, new_module);
        if updated == content {
            debug!("Module line not found; manifest left as is");
        }
        self.filesystem.write_file(path, &updated)?;
        info!("Manifest updated");
        Ok(())
    }

    /// Rewrite the owned build variables. Nothing is written when a required
    /// key is missing.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn update_makefile(&self, path: &Path, vars: &BuildVars<'_>) -> GoStartResult<()> {
        let content = self.filesystem.read_to_string(path)?;
        let updated = rewrite_build_file(&content, vars)?;
        self.filesystem.write_file(path, &updated)?;
        info!(deploy_target = vars.deploy_target_ip.is_some(), "Build file updated");
        Ok(())
    }

    /// Substitute the placeholder in every `.service` / `.timer` file directly
    /// inside `dir`, renaming each to `<project_name>.<ext>` in
    /// [`UnitFileMode::Rename`] mode.
    ///
    /// Stops at the first failure. A missing `dir` is not a failure.
    #[instrument(skip_all, fields(dir = %dir.display(), project = project_name, mode = %mode))]
    pub fn update_systemd_files(
        &self,
        dir: &Path,
        project_name: &str,
        mode: UnitFileMode,
    ) -> GoStartResult<UnitSweep> {
        // The name becomes a file name next to the originals.
        FieldValidator::validate_project_name(project_name)?;

        if !self.filesystem.exists(dir) {
            debug!("Service-unit directory does not exist");
            return Ok(UnitSweep {
                dir_missing: true,
                changes: Vec::new(),
            });
        }

        let mut changes = Vec::new();
        for path in self.filesystem.list_files(dir)? {
            let Some(kind) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(UnitKind::from_file_name)
            else {
                continue;
            };

            let content = self.filesystem.read_to_string(&path)?;
            let updated = substitute_placeholder(&content, &self.placeholder, project_name);

            let target = match mode {
                UnitFileMode::Rename => dir.join(renamed_file_name(kind, project_name)),
                UnitFileMode::InPlace => path.clone(),
            };

            let change = UnitChange {
                from: path,
                to: target,
            };
            if change.renamed() && self.filesystem.exists(&change.to) {
                return Err(DomainError::UnitRenameConflict {
                    from: change.from.display().to_string(),
                    to: change.to.display().to_string(),
                }
                .into());
            }

            self.filesystem.write_file(&change.to, &updated)?;
            if change.renamed() {
                self.filesystem.remove_file(&change.from)?;
            }
            info!(from = %change.from.display(), to = %change.to.display(), "Unit file updated");
            changes.push(change);
        }

        Ok(UnitSweep {
            dir_missing: false,
            changes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::error::GoStartError;

    fn vars() -> BuildVars<'static> {
        BuildVars {
            project_name: "new-app",
            exec_name: "newapp",
            ssh_user: "deploy",
            deploy_target_ip: None,
        }
    }

    #[test]
    fn read_module_path_returns_declared_module() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .withf(|p| p == Path::new("go.mod"))
            .returning(|_| Ok("module github.com/acme/go-start\n\ngo 1.22\n".into()));

        let service = InitService::new(Box::new(fs), "go-start");
        assert_eq!(
            service.read_module_path(Path::new("go.mod")).unwrap(),
            "github.com/acme/go-start"
        );
    }

    #[test]
    fn read_module_path_without_module_line_is_parse_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("go 1.22\n".into()));

        let service = InitService::new(Box::new(fs), "go-start");
        let err = service.read_module_path(Path::new("go.mod")).unwrap_err();
        assert!(matches!(
            err,
            GoStartError::Domain(DomainError::ModuleLineMissing { .. })
        ));
    }

    #[test]
    fn read_module_path_propagates_io_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let service = InitService::new(Box::new(fs), "go-start");
        assert!(matches!(
            service.read_module_path(Path::new("go.mod")),
            Err(GoStartError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }

    #[test]
    fn update_go_mod_writes_new_module() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("module old/mod\n\ngo 1.22\n".into()));
        fs.expect_write_file()
            .withf(|p, content| p == Path::new("go.mod") && content == "module new/mod\n\ngo 1.22\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = InitService::new(Box::new(fs), "go-start");
        service
            .update_go_mod(Path::new("go.mod"), "old/mod", "new/mod")
            .unwrap();
    }

    #[test]
    fn update_makefile_with_missing_key_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("PROJECT_NAME := \"x\"\n".into()));
        fs.expect_write_file().never();

        let service = InitService::new(Box::new(fs), "go-start");
        let err = service
            .update_makefile(Path::new("Makefile"), &vars())
            .unwrap_err();
        assert!(matches!(
            err,
            GoStartError::Domain(DomainError::BuildKeyMissing { key: "EXEC_NAME" })
        ));
    }

    #[test]
    fn project_name_with_path_is_rejected_before_touching_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_list_files().never();
        fs.expect_write_file().never();
        fs.expect_remove_file().never();

        let service = InitService::new(Box::new(fs), "go-start");
        let err = service
            .update_systemd_files(Path::new("remote"), "../escaped", UnitFileMode::Rename)
            .unwrap_err();
        assert!(matches!(
            err,
            GoStartError::Domain(DomainError::InvalidField {
                field: "project name",
                ..
            })
        ));
    }

    #[test]
    fn missing_unit_dir_is_not_an_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_list_files().never();

        let service = InitService::new(Box::new(fs), "go-start");
        let sweep = service
            .update_systemd_files(Path::new("remote"), "myapp", UnitFileMode::Rename)
            .unwrap();
        assert!(sweep.dir_missing);
        assert!(sweep.changes.is_empty());
    }

    #[test]
    fn rename_conflict_stops_before_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("remote/go-start.service")]));
        fs.expect_read_to_string()
            .returning(|_| Ok("ExecStart=/usr/bin/go-start\n".into()));
        fs.expect_write_file().never();
        fs.expect_remove_file().never();

        let service = InitService::new(Box::new(fs), "go-start");
        let err = service
            .update_systemd_files(Path::new("remote"), "myapp", UnitFileMode::Rename)
            .unwrap_err();
        assert!(matches!(
            err,
            GoStartError::Domain(DomainError::UnitRenameConflict { .. })
        ));
    }

    #[test]
    fn in_place_mode_never_removes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files().returning(|_| {
            Ok(vec![
                PathBuf::from("remote/go-start.timer"),
                PathBuf::from("remote/notes.txt"),
            ])
        });
        fs.expect_read_to_string()
            .withf(|p| p == Path::new("remote/go-start.timer"))
            .returning(|_| Ok("Unit=go-start.service\n".into()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("remote/go-start.timer") && c == "Unit=myapp.service\n")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_remove_file().never();

        let service = InitService::new(Box::new(fs), "go-start");
        let sweep = service
            .update_systemd_files(Path::new("remote"), "myapp", UnitFileMode::InPlace)
            .unwrap();
        assert_eq!(sweep.changes.len(), 1);
        assert!(!sweep.changes[0].renamed());
    }
}

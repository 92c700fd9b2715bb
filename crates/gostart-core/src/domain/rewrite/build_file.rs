//! Build file (`Makefile`) variable rewrite.
//!
//! Only simple-expanded assignments of the form `KEY := value` are touched.
//! A line matches a key when the text left of the first `:=` is exactly the
//! key (surrounding blanks ignored). The left-hand side is kept as written;
//! the whole value is replaced. A trailing `#` comment (and the blanks before
//! it) is preserved, as are line endings and all other lines.

use crate::domain::{entities::ProjectConfig, error::DomainError};

/// The build variables the initializer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKey {
    ProjectName,
    ExecName,
    SshUser,
    DeployTargetIp,
}

impl BuildKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectName => "PROJECT_NAME",
            Self::ExecName => "EXEC_NAME",
            Self::SshUser => "SSH_USER",
            Self::DeployTargetIp => "DEPLOY_TARGET_IP",
        }
    }

    const fn quoted(&self) -> bool {
        matches!(self, Self::ProjectName)
    }
}

/// New values for the build variables. `deploy_target_ip: None` leaves that
/// line alone.
#[derive(Debug, Clone, Copy)]
pub struct BuildVars<'a> {
    pub project_name: &'a str,
    pub exec_name: &'a str,
    pub ssh_user: &'a str,
    pub deploy_target_ip: Option<&'a str>,
}

impl<'a> From<&'a ProjectConfig> for BuildVars<'a> {
    fn from(cfg: &'a ProjectConfig) -> Self {
        Self {
            project_name: cfg.project_name(),
            exec_name: cfg.exec_name(),
            ssh_user: cfg.ssh_user(),
            deploy_target_ip: cfg.deploy_target_ip(),
        }
    }
}

impl BuildVars<'_> {
    fn assignments(&self) -> Vec<(BuildKey, String)> {
        let mut out = vec![
            (BuildKey::ProjectName, self.project_name.to_string()),
            (BuildKey::ExecName, self.exec_name.to_string()),
            (BuildKey::SshUser, self.ssh_user.to_string()),
        ];
        if let Some(ip) = self.deploy_target_ip {
            out.push((BuildKey::DeployTargetIp, ip.to_string()));
        }
        out
    }
}

/// Rewrite every assignment of the owned keys.
///
/// Every key being written must appear at least once; otherwise the first
/// missing key is reported and nothing is returned to write back.
pub fn rewrite_build_file(content: &str, vars: &BuildVars<'_>) -> Result<String, DomainError> {
    let assignments = vars.assignments();
    let mut seen = vec![false; assignments.len()];
    let mut out = String::with_capacity(content.len() + 64);

    for line in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        let rewritten = body.split_once(":=").and_then(|(lhs, rhs)| {
            let idx = assignments
                .iter()
                .position(|(key, _)| lhs.trim() == key.as_str())?;
            seen[idx] = true;
            let (key, value) = &assignments[idx];
            let value = if key.quoted() {
                format!("\"{value}\"")
            } else {
                value.clone()
            };
            Some(format!("{lhs}:= {value}{}", after_value(rhs)))
        });

        match rewritten {
            Some(new_body) => out.push_str(&new_body),
            None => out.push_str(body),
        }
        out.push_str(ending);
    }

    if let Some(idx) = seen.iter().position(|found| !found) {
        return Err(DomainError::BuildKeyMissing {
            key: assignments[idx].0.as_str(),
        });
    }

    Ok(out)
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// The part of the right-hand side kept after the new value: a trailing
/// comment with its leading blanks, or whatever follows a closing quote.
fn after_value(rhs: &str) -> &str {
    let rhs = rhs.trim_start();
    let end = match rhs.strip_prefix('"') {
        Some(quoted) => quoted.find('"').map_or(rhs.len(), |i| i + 2),
        None => {
            let value = rhs.find('#').map_or(rhs, |i| &rhs[..i]);
            value.trim_end().len()
        }
    };
    &rhs[end..]
}

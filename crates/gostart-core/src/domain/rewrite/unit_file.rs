//! Service-unit file handling.

use crate::domain::value_objects::UnitKind;

/// Replace every occurrence of `placeholder` with `project_name`.
pub fn substitute_placeholder(content: &str, placeholder: &str, project_name: &str) -> String {
    if placeholder.is_empty() {
        return content.to_string();
    }
    content.replace(placeholder, project_name)
}

/// File name a unit of `kind` gets after a rename: `<project>.<ext>`.
pub fn renamed_file_name(kind: UnitKind, project_name: &str) -> String {
    format!("{project_name}{}", kind.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let unit = "[Unit]\nDescription=go-start\n[Service]\nExecStart=/usr/bin/go-start --config /etc/go-start.yaml\n";
        let out = substitute_placeholder(unit, "go-start", "myapp");
        assert!(!out.contains("go-start"));
        assert_eq!(out.matches("myapp").count(), 3);
    }

    #[test]
    fn empty_placeholder_is_noop() {
        assert_eq!(substitute_placeholder("abc", "", "x"), "abc");
    }

    #[test]
    fn classifies_and_renames() {
        assert_eq!(UnitKind::from_file_name("go-start.service"), Some(UnitKind::Service));
        assert_eq!(UnitKind::from_file_name("backup.timer"), Some(UnitKind::Timer));
        assert_eq!(UnitKind::from_file_name("README.md"), None);
        assert_eq!(UnitKind::from_file_name("service"), None);
        assert_eq!(renamed_file_name(UnitKind::Timer, "myapp"), "myapp.timer");
    }
}

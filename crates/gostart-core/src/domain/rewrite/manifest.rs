//! Module manifest (`go.mod`) handling.

/// Find the path declared by the first `module <path>` line.
///
/// The keyword must start the line and be followed by at least one blank;
/// trailing whitespace (including a stray `\r`) is not part of the path.
pub fn parse_module_path(content: &str) -> Option<&str> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim();
        (!path.is_empty()).then_some(path)
    })
}

/// Replace the first `module <old>` with `module <new>`.
///
/// Zero matches is not an error; the content comes back unchanged.
pub fn replace_module(content: &str, old_module: &str, new_module: &str) -> String {
    content.replacen(
        &format!("module {old_module}"),
        &format!("module {new_module}"),
        1,
    )
}

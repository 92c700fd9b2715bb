//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gostart-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::GoStartResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gostart_adapters::filesystem::LocalFilesystem` (production)
/// - `gostart_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> GoStartResult<String>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> GoStartResult<()>;

    /// Regular files directly inside `dir` (no recursion), sorted by path.
    fn list_files(&self, dir: &Path) -> GoStartResult<Vec<PathBuf>>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> GoStartResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for asking the user questions one line at a time.
///
/// Implemented by:
/// - `gostart_adapters::prompt::LinePrompter` (any reader/writer pair)
/// - `gostart_adapters::prompt::TerminalPrompter` (interactive terminals)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show `message` and read one line. `None` means end of input.
    fn ask(&mut self, message: &str) -> GoStartResult<Option<String>>;

    /// Show a line of feedback (e.g. why an answer was rejected).
    fn say(&mut self, line: &str) -> GoStartResult<()>;
}

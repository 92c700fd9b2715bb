//! Infrastructure adapters for gostart.
//!
//! This crate implements the ports defined in `gostart-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::LinePrompter;
#[cfg(feature = "interactive")]
pub use prompt::TerminalPrompter;

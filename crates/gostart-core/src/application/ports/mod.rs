//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gostart-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `Prompter`: Line-based questions to the user

pub mod output;

pub use output::{Filesystem, Prompter};

#[cfg(test)]
pub use output::{MockFilesystem, MockPrompter};

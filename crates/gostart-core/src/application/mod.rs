//! Application layer for gostart.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InitService, ConfigWizard)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Text transforms live in `crate::domain`; services only move contents
//! between the ports and the domain functions.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ConfigWizard, InitService, UnitChange, UnitSweep, WizardDefaults};

pub use ports::{Filesystem, Prompter};

pub use error::ApplicationError;

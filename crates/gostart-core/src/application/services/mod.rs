//! Application services: use case orchestration.

mod init_service;
mod wizard;

pub use init_service::{InitService, UnitChange, UnitSweep};
pub use wizard::{ConfigWizard, WizardDefaults, is_confirmation};

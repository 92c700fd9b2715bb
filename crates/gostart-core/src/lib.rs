//! gostart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gostart
//! project initializer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gostart-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (InitService, ConfigWizard)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, Prompter)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gostart-adapters (Infrastructure)   │
//! │ (LocalFilesystem, LinePrompter, etc)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`ProjectConfig`, text rewrites) sits underneath the
//! services and performs no I/O.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use gostart_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> GoStartResult<()> {
//! let service = InitService::new(filesystem, "go-start");
//! let current = service.read_module_path(Path::new("go.mod"))?;
//! service.update_go_mod(Path::new("go.mod"), &current, "github.com/me/app")?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigWizard, InitService, UnitChange, UnitSweep, WizardDefaults,
        ports::{Filesystem, Prompter},
    };
    pub use crate::domain::{BuildVars, ProjectConfig, UnitFileMode, UnitKind};
    pub use crate::error::{GoStartError, GoStartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

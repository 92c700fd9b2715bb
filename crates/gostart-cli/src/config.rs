//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the values it needs.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `GOSTART_<SECTION>__<KEY>`
//! 3. `--config <FILE>`, or `.gostart.toml` in the working directory
//! 4. `<config dir>/gostart/config.toml`
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use gostart_core::domain::{DEFAULT_SSH_USER, UnitFileMode};

/// Per-project config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".gostart.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where the files rewritten by `init` live.
    pub paths: PathsConfig,
    /// Defaults for `init`.
    pub init: InitConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub manifest: PathBuf,
    pub build_file: PathBuf,
    pub unit_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitConfig {
    /// Token replaced inside service-unit files.
    pub placeholder: String,
    pub default_ssh_user: String,
    pub unit_mode: UnitFileMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("go.mod"),
            build_file: PathBuf::from("Makefile"),
            unit_dir: PathBuf::from("remote"),
        }
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            placeholder: "go-start".into(),
            default_ssh_user: DEFAULT_SSH_USER.into(),
            unit_mode: UnitFileMode::Rename,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it, `.gostart.toml` in the working directory is used
    /// when present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = Self::config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("GOSTART")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the user-wide configuration file, if the platform has a
    /// config directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "gostart")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

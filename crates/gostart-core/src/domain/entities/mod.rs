pub mod project_config;

pub use project_config::{DEFAULT_SSH_USER, ProjectConfig, ProjectConfigBuilder};

//! Domain value objects: UnitFileMode, UnitKind.
//!
//! Pure value types, `Copy`, equality-by-value, no identity. Each has a
//! stable string form used by the CLI flags and the configuration file.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── UnitFileMode ─────────────────────────────────────────────────────────────

/// What to do with a service-unit file after its placeholder is substituted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitFileMode {
    /// Write the result as `<project>.<ext>` and remove the original.
    #[default]
    Rename,
    /// Rewrite the file under its existing name.
    InPlace,
}

impl UnitFileMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::InPlace => "in-place",
        }
    }
}

impl fmt::Display for UnitFileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitFileMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rename" => Ok(Self::Rename),
            "in-place" | "inplace" | "in_place" => Ok(Self::InPlace),
            other => Err(DomainError::InvalidField {
                field: "unit mode",
                value: other.into(),
                reason: "expected 'rename' or 'in-place'".into(),
            }),
        }
    }
}

// ── UnitKind ─────────────────────────────────────────────────────────────────

/// The service-unit file types the initializer touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Service,
    Timer,
}

impl UnitKind {
    /// File extension including the leading dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Service => ".service",
            Self::Timer => ".timer",
        }
    }

    /// Classify a file name by its suffix; `None` for anything else.
    pub fn from_file_name(name: &str) -> Option<Self> {
        [Self::Service, Self::Timer]
            .into_iter()
            .find(|kind| name.ends_with(kind.extension()))
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension().trim_start_matches('.'))
    }
}

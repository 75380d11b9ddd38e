//! Readiness status reported to the desktop bootstrap.

use serde::Serialize;
use std::fmt;

/// Whether the external Claude Code CLI can be used.
///
/// The locator only ever reports [`ReadinessStatus::Ready`]; the remaining
/// members describe states owned by the desktop application's own
/// installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// Binary is installed and may be launched.
    Ready,
    /// No binary is available.
    NotInstalled,
    /// Binary is being downloaded or unpacked.
    Installing,
    /// A newer binary is replacing the current one.
    Updating,
}

impl ReadinessStatus {
    /// Whether Claude Code can be launched right now.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NotInstalled => "not_installed",
            Self::Installing => "installing",
            Self::Updating => "updating",
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

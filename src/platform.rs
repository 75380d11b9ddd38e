//! Operating system identification.
//!
//! The Claude Code locator only answers on Linux, so the platform is a
//! small closed enum with an escape hatch for identifiers we don't know.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Operating system the locator is evaluated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    /// Any other identifier, kept verbatim.
    Other(String),
}

impl Platform {
    /// Parse a platform identifier.
    ///
    /// Accepts both Rust (`macos`, `windows`) and Node-style (`darwin`,
    /// `win32`) spellings. Matching is exact: `"Linux"` or `" linux "` is
    /// not Linux and comes back as [`Platform::Other`] unchanged.
    pub fn from_id(id: &str) -> Self {
        match id {
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            "windows" | "win32" => Self::Windows,
            _ => Self::Other(id.to_string()),
        }
    }

    /// Detect the platform of the running binary.
    pub fn current() -> Self {
        Self::from_id(std::env::consts::OS)
    }

    /// Canonical lowercase identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Other(id) => id,
        }
    }

    pub fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

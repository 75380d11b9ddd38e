//! Claude Code discovery through the Nix wrapper's environment.
//!
//! The Nix package wraps Claude Desktop and exports `CLAUDE_CODE_PATH`
//! pointing at the packaged CLI. On Linux that variable is the only source
//! of truth; on every other platform the desktop app manages its own copy
//! and the locator stays out of the way.
//!
//! # Example
//!
//! ```
//! use claude_desktop_nix::locator::{ClaudeCodeLocator, ReadinessStatus};
//! use claude_desktop_nix::platform::Platform;
//! use std::ffi::OsString;
//!
//! let locator = ClaudeCodeLocator::new(Platform::Linux);
//! let env = |key: &str| match key {
//!     "CLAUDE_CODE_PATH" => Some(OsString::from("/opt/bin/claude")),
//!     _ => None,
//! };
//!
//! assert_eq!(
//!     locator.resolve_path_with_env(&env).as_deref(),
//!     Some(std::path::Path::new("/opt/bin/claude"))
//! );
//! assert_eq!(locator.check_ready_with_env(&env), Some(ReadinessStatus::Ready));
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use super::log::{StatusLog, TracingStatusLog, LOG_TAG, READY_MESSAGE};
use super::status::ReadinessStatus;
use crate::platform::Platform;

/// Environment variable exported by the Nix wrapper.
pub const CLAUDE_CODE_PATH_VAR: &str = "CLAUDE_CODE_PATH";

/// The two lookups a desktop bootstrap needs.
pub trait ReadinessProbe {
    /// Path of the externally installed Claude Code binary, if any.
    fn claude_code_path(&self) -> Option<PathBuf>;

    /// `Some(Ready)` when [`claude_code_path`](Self::claude_code_path)
    /// would return a path, `None` otherwise.
    fn check_claude_ready(&self) -> Option<ReadinessStatus>;
}

/// Resolves Claude Code from a single environment variable.
///
/// Every call reads the environment afresh; nothing is cached.
#[derive(Clone)]
pub struct ClaudeCodeLocator {
    platform: Platform,
    var: String,
    log: Arc<dyn StatusLog>,
}

impl ClaudeCodeLocator {
    /// Create a locator for `platform` reading `CLAUDE_CODE_PATH` and
    /// logging through `tracing`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            var: CLAUDE_CODE_PATH_VAR.to_string(),
            log: Arc::new(TracingStatusLog),
        }
    }

    /// Read a different environment variable.
    pub fn with_var(mut self, var: impl Into<String>) -> Self {
        self.var = var.into();
        self
    }

    /// Send readiness records to `log` instead of `tracing`.
    pub fn with_log(mut self, log: Arc<dyn StatusLog>) -> Self {
        self.log = log;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    /// Resolve the path from the process environment.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.resolve_path_with_env(|key| std::env::var_os(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    ///
    /// Returns the variable's value verbatim when the platform is Linux and
    /// the value is non-empty. The value need not be valid Unicode.
    pub fn resolve_path_with_env<F>(&self, env_fn: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if !self.platform.is_linux() {
            tracing::debug!(platform = %self.platform, "Skipping {} lookup", self.var);
            return None;
        }

        env_fn(&self.var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Check readiness against the process environment.
    pub fn check_ready(&self) -> Option<ReadinessStatus> {
        self.check_ready_with_env(|key| std::env::var_os(key))
    }

    /// Check readiness with a custom env var lookup (for testing).
    ///
    /// Same guard as [`resolve_path_with_env`](Self::resolve_path_with_env);
    /// on success exactly one record goes to the status log.
    pub fn check_ready_with_env<F>(&self, env_fn: F) -> Option<ReadinessStatus>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        self.locate_with_env(env_fn).map(|(status, _)| status)
    }

    /// Readiness together with the path it was derived from.
    pub fn locate(&self) -> Option<(ReadinessStatus, PathBuf)> {
        self.locate_with_env(|key| std::env::var_os(key))
    }

    /// [`locate`](Self::locate) with a custom env var lookup (for testing).
    ///
    /// The variable is read once, so status and path always agree. Logs
    /// like [`check_ready_with_env`](Self::check_ready_with_env).
    pub fn locate_with_env<F>(&self, env_fn: F) -> Option<(ReadinessStatus, PathBuf)>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let path = self.resolve_path_with_env(env_fn)?;
        self.log.info(LOG_TAG, READY_MESSAGE, &path);
        Some((ReadinessStatus::Ready, path))
    }
}

impl Default for ClaudeCodeLocator {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl fmt::Debug for ClaudeCodeLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeCodeLocator")
            .field("platform", &self.platform)
            .field("var", &self.var)
            .finish_non_exhaustive()
    }
}

impl ReadinessProbe for ClaudeCodeLocator {
    fn claude_code_path(&self) -> Option<PathBuf> {
        self.resolve_path()
    }

    fn check_claude_ready(&self) -> Option<ReadinessStatus> {
        self.check_ready()
    }
}

/// Path of Claude Code for the running platform and process environment.
pub fn claude_code_path() -> Option<PathBuf> {
    ClaudeCodeLocator::default().resolve_path()
}

/// Readiness of Claude Code for the running platform and process
/// environment. Logs through `tracing` on success.
pub fn check_claude_ready() -> Option<ReadinessStatus> {
    ClaudeCodeLocator::default().check_ready()
}

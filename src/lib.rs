//! claude-desktop-nix - Claude Code discovery for the Claude Desktop Nix package.
//!
//! The Nix package of Claude Desktop ships Claude Code separately and tells
//! the desktop app where to find it through `CLAUDE_CODE_PATH`. This crate
//! answers the app's "where is it / is it ready" questions and maintains the
//! package's `package.nix`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Package updater settings
//! - [`error`] - Error types and result aliases
//! - [`locator`] - Claude Code path resolution and readiness
//! - [`package`] - `package.nix` maintenance
//! - [`platform`] - Operating system identification
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use claude_desktop_nix::locator::{ClaudeCodeLocator, ReadinessStatus};
//! use claude_desktop_nix::platform::Platform;
//! use std::ffi::OsString;
//!
//! let env = |_: &str| Some(OsString::from("/opt/bin/claude"));
//!
//! let linux = ClaudeCodeLocator::new(Platform::Linux);
//! assert_eq!(linux.check_ready_with_env(env), Some(ReadinessStatus::Ready));
//!
//! let darwin = ClaudeCodeLocator::new(Platform::Darwin);
//! assert_eq!(darwin.check_ready_with_env(env), None);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod locator;
pub mod package;
pub mod platform;
pub mod ui;

pub use error::{CcdError, Result};

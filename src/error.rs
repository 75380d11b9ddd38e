//! Error types for claude-desktop-nix operations.
//!
//! This module defines [`CcdError`], the error type used by the package
//! updater and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The Claude Code locator never fails; absence is `None`, not an error
//! - Use `CcdError` for package maintenance failures that need distinct handling
//! - Use `anyhow::Error` (via `CcdError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for claude-desktop-nix operations.
#[derive(Debug, Error)]
pub enum CcdError {
    /// The package descriptor does not exist.
    #[error("Package file not found: {path}")]
    PackageNotFound { path: PathBuf },

    /// A required assignment is missing from the package descriptor.
    #[error("Could not find {field} in {path}")]
    PackageFieldMissing { field: String, path: PathBuf },

    /// An installer URL did not answer with 200 OK.
    #[error("Cannot access {arch} installer: {url}")]
    InstallerUnreachable { arch: String, url: String },

    /// No version could be read from the downloaded installer.
    #[error("Could not detect version from installer")]
    VersionUndetected,

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for claude-desktop-nix operations.
pub type Result<T> = std::result::Result<T, CcdError>;

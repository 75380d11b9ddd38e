//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::platform::Platform;

/// Claude Code discovery and package maintenance for the Claude Desktop Nix package.
#[derive(Debug, Parser)]
#[command(name = "claude-desktop-nix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Platform to evaluate for (linux, darwin, windows, ...). Defaults to the running OS
    #[arg(long, global = true, env = "CCD_PLATFORM")]
    pub platform: Option<Platform>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The platform to evaluate, falling back to the running OS.
    pub fn platform(&self) -> Platform {
        self.platform.clone().unwrap_or_else(Platform::current)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the path of the externally installed Claude Code binary
    Path,

    /// Check whether Claude Code is ready
    Status(StatusArgs),

    /// Update package.nix to the latest Claude Desktop release
    Update(UpdateArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateArgs {
    /// Path to package.nix
    #[arg(long, env = "CCD_PACKAGE_FILE", default_value = "package.nix")]
    pub package_file: PathBuf,

    /// Download URL of the arm64 installer
    #[arg(long, env = "CCD_ARM64_URL")]
    pub arm64_url: Option<String>,

    /// 7-Zip executable used to inspect installers
    #[arg(long, env = "CCD_SEVEN_ZIP")]
    pub seven_zip: Option<PathBuf>,
}

//! Status command implementation.
//!
//! The `claude-desktop-nix status` command runs the readiness check the
//! desktop bootstrap performs.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::locator::{ClaudeCodeLocator, ReadinessStatus};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Printed when the locator returns nothing.
pub const UNAVAILABLE_MESSAGE: &str = "Claude Code is not available";

/// JSON shape of `status --json`.
#[derive(Debug, Serialize)]
struct StatusReport {
    status: Option<ReadinessStatus>,
    path: Option<PathBuf>,
}

/// The status command implementation.
pub struct StatusCommand {
    locator: ClaudeCodeLocator,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(locator: ClaudeCodeLocator, args: StatusArgs) -> Self {
        Self { locator, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (status, path) = self.locator.locate().unzip();

        if self.args.json {
            let report = StatusReport { status, path };
            let json = serde_json::to_string(&report).map_err(anyhow::Error::from)?;
            ui.result(&json);
        } else {
            match (&status, &path) {
                (Some(status), Some(path)) => {
                    ui.result(status.as_str());
                    ui.detail(&format!("{}={}", self.locator.var(), path.display()));
                }
                _ => {
                    ui.result(UNAVAILABLE_MESSAGE);
                    ui.detail(&format!(
                        "platform: {}, {} unset or empty",
                        self.locator.platform(),
                        self.locator.var()
                    ));
                }
            }
        }

        if status.is_some_and(|s| s.is_ready()) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

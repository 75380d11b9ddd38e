//! Path command implementation.
//!
//! `claude-desktop-nix path` prints the Claude Code path and nothing else,
//! so it can be used in `$(...)`.

use crate::error::Result;
use crate::locator::ClaudeCodeLocator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The path command implementation.
pub struct PathCommand {
    locator: ClaudeCodeLocator,
}

impl PathCommand {
    /// Create a new path command.
    pub fn new(locator: ClaudeCodeLocator) -> Self {
        Self { locator }
    }
}

impl Command for PathCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.locator.resolve_path() {
            Some(path) => {
                ui.result(&path.display().to_string());
                Ok(CommandResult::success())
            }
            None => {
                tracing::debug!(
                    platform = %self.locator.platform(),
                    "{} not available",
                    self.locator.var()
                );
                Ok(CommandResult::failure(1))
            }
        }
    }
}

//! Update command implementation.
//!
//! The `claude-desktop-nix update` command bumps `package.nix` to the
//! newest Claude Desktop installer.

use crate::cli::args::UpdateArgs;
use crate::config::UpdaterConfig;
use crate::error::Result;
use crate::package::{UpdateOutcome, Updater};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    args: UpdateArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(args: UpdateArgs) -> Self {
        Self { args }
    }

    /// Updater settings with this command's overrides applied.
    pub fn config(&self) -> UpdaterConfig {
        let mut config = UpdaterConfig::default();
        if let Some(url) = &self.args.arm64_url {
            config = config.with_arm64_url(url.clone());
        }
        if let Some(program) = &self.args.seven_zip {
            config = config.with_seven_zip(program.clone());
        }
        config
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("claude-desktop");

        let updater = Updater::new(self.config())?;
        match updater.run(&self.args.package_file, ui)? {
            UpdateOutcome::UpToDate { version } => {
                tracing::debug!("claude-desktop {} is current", version);
            }
            UpdateOutcome::Updated { from, to } => {
                tracing::debug!("claude-desktop updated {} -> {}", from, to);
            }
        }

        Ok(CommandResult::success())
    }
}

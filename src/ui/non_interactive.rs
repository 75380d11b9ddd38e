//! Plain stdout/stderr UI.

use super::theme::{should_use_colors, CcdTheme};
use super::{OutputMode, UserInterface};

/// UI implementation that writes lines to stdout, and errors and warnings
/// to stderr so piped results stay clean.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: CcdTheme,
}

impl NonInteractiveUI {
    /// Create a UI, coloring output when stdout is a terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CcdTheme::new()
        } else {
            CcdTheme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for NonInteractiveUI {
    fn result(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", self.theme.format_detail(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!();
            println!("{}", self.theme.format_header(title));
            println!();
        }
    }
}

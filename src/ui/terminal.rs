//! Interactive terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, BrewMenuTheme, PlainUI, ProgressSpinner, Prompt,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: BrewMenuTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            BrewMenuTheme::new()
        } else {
            BrewMenuTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_menu_line(msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let answer = prompt_user(prompt, &self.term)?;
        writeln!(self.term).ok();
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message, self.theme.clone()))
    }
}

/// Create the appropriate UI for the current stdin/stdout.
///
/// Both must be terminals for [`TerminalUI`]; otherwise input is read line
/// by line with [`PlainUI`].
pub fn create_ui() -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(PlainUI::stdin())
    }
}

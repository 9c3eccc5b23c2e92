//! Line-based UI for piped stdin.

use std::io::{self, BufRead, Write};

use crate::error::{BrewMenuError, Result};

use super::theme::BrewMenuTheme;
use super::{ProgressSpinner, Prompt, PromptType, SpinnerHandle, UserInterface};

/// UI implementation that reads answers one line at a time.
///
/// Used when stdin or stdout is not a terminal, e.g. when answers are piped
/// in. Menus and messages go to stdout, warnings and errors to stderr, and
/// nothing is styled. End of input is reported as
/// [`BrewMenuError::InputClosed`].
pub struct PlainUI {
    input: Box<dyn BufRead>,
    theme: BrewMenuTheme,
}

impl PlainUI {
    /// Read answers from the process's stdin.
    pub fn stdin() -> Self {
        Self::with_input(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Read answers from any buffered reader (for testing).
    pub fn with_input(input: Box<dyn BufRead>) -> Self {
        Self {
            input,
            theme: BrewMenuTheme::plain(),
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(BrewMenuError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl UserInterface for PlainUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", title);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        if prompt.prompt_type == PromptType::Pause {
            println!();
        }
        print!("{}", prompt.question);
        io::stdout().flush()?;

        let answer = self.read_answer();
        println!();
        answer
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(ProgressSpinner::hidden())
    }
}

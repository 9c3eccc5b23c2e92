//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`PlainUI`] for line-based input from a pipe
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use brewmenu::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("menu_choice", vec!["2"]);
//!
//! ui.show_header("Homebrew Command Line Menu");
//! let answer = ui.prompt(&Prompt::input("menu_choice", "Enter your choice: ")).unwrap();
//! assert_eq!(answer, "2");
//! assert_eq!(ui.headers(), ["Homebrew Command Line Menu"]);
//! ```

pub mod mock;
pub mod plain;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use plain::PlainUI;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BrewMenuTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a menu title, preceded by a blank line.
    fn show_header(&mut self, title: &str);

    /// Show a prompt and read the user's answer.
    ///
    /// Returns [`BrewMenuError::InputClosed`](crate::BrewMenuError::InputClosed)
    /// when input has ended.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Start a spinner for an operation whose output is being captured.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Remove the spinner without leaving a line behind.
    fn finish_and_clear(&mut self);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Key identifying the prompt (used by mocks).
    pub key: String,
    /// The text to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
}

impl Prompt {
    /// A free-form line of input.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
        }
    }

    /// Wait for the user to hit Enter.
    pub fn pause(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Pause,
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Free-form text input.
    Input,
    /// Wait for Enter; the answer is discarded.
    Pause,
}

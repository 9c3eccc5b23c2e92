//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers are queued per key.
//!
//! # Example
//!
//! ```
//! use brewmenu::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("menu_choice", vec!["1", "6"]);
//!
//! ui.message("1. Update Homebrew");
//! ui.success("Done!");
//!
//! let prompt = Prompt::input("menu_choice", "Enter your choice: ");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "1");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "6");
//! assert!(ui.prompt(&prompt).is_err()); // queue exhausted: input closed
//!
//! assert!(ui.has_message("Update Homebrew"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{BrewMenuError, Result};

use super::{Prompt, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Answers come from per-key queues. Pause prompts always succeed unless
/// [`MockUI::close_on_pause`] is set. When a queue runs dry the mock behaves
/// as if stdin was closed.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
    close_on_pause: bool,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue responses for a prompt key, returned in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        self.prompt_queues
            .entry(key.to_string())
            .or_default()
            .extend(responses.into_iter().map(|s| s.to_string()));
    }

    /// Make pause prompts report closed input.
    pub fn close_on_pause(&mut self) {
        self.close_on_pause = true;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        if prompt.prompt_type == PromptType::Pause {
            return if self.close_on_pause {
                Err(BrewMenuError::InputClosed)
            } else {
                Ok(String::new())
            };
        }

        self.prompt_queues
            .get_mut(&prompt.key)
            .and_then(|q| q.pop_front())
            .ok_or(BrewMenuError::InputClosed)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }
}

/// Spinner that draws nothing; [`MockUI::spinners`] records its message.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish_error(&mut self, _msg: &str) {}

    fn finish_and_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), ["Hello"]);
        assert_eq!(ui.successes(), ["Done"]);
        assert_eq!(ui.warnings(), ["Careful"]);
        assert_eq!(ui.errors(), ["Oops"]);
    }

    #[test]
    fn mock_ui_queued_responses_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("menu_choice", vec!["1", "2"]);
        let prompt = Prompt::input("menu_choice", "?");

        assert_eq!(ui.prompt(&prompt).unwrap(), "1");
        assert_eq!(ui.prompt(&prompt).unwrap(), "2");
    }

    #[test]
    fn mock_ui_queue_appends() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("k", vec!["a"]);
        ui.queue_prompt_responses("k", vec!["b"]);
        let prompt = Prompt::input("k", "?");

        assert_eq!(ui.prompt(&prompt).unwrap(), "a");
        assert_eq!(ui.prompt(&prompt).unwrap(), "b");
    }

    #[test]
    fn mock_ui_exhausted_queue_is_input_closed() {
        let mut ui = MockUI::new();
        let err = ui.prompt(&Prompt::input("k", "?")).unwrap_err();
        assert!(matches!(err, BrewMenuError::InputClosed));
    }

    #[test]
    fn mock_ui_pause_succeeds_by_default() {
        let mut ui = MockUI::new();
        assert_eq!(ui.prompt(&Prompt::pause("continue", "...")).unwrap(), "");
        assert_eq!(ui.prompts_shown(), ["continue"]);
    }

    #[test]
    fn mock_ui_close_on_pause() {
        let mut ui = MockUI::new();
        ui.close_on_pause();
        assert!(ui.prompt(&Prompt::pause("continue", "...")).is_err());
    }

    #[test]
    fn mock_ui_captures_headers_and_spinners() {
        let mut ui = MockUI::new();
        ui.show_header("Menu");
        let _spinner = ui.start_spinner("Checking");

        assert_eq!(ui.headers(), ["Menu"]);
        assert_eq!(ui.spinners(), ["Checking"]);
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();
        ui.message("Installing/updating wget...");
        ui.warning("Homebrew not found");

        assert!(ui.has_message("wget"));
        assert!(ui.has_warning("not found"));
        assert!(!ui.has_error("anything"));
        assert!(!ui.has_success("anything"));
    }
}

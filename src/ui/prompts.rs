//! Interactive prompts.

use std::io::ErrorKind;

use console::Term;
use dialoguer::Input;

use crate::error::{BrewMenuError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors to BrewMenuError.
fn map_dialoguer_err(e: dialoguer::Error) -> BrewMenuError {
    map_io_err(e.into())
}

/// End-of-input becomes [`BrewMenuError::InputClosed`].
fn map_io_err(e: std::io::Error) -> BrewMenuError {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::Interrupted => BrewMenuError::InputClosed,
        _ => BrewMenuError::Io(e),
    }
}

/// Prompt the user for input on a terminal.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Pause => prompt_pause(prompt, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    let question = prompt.question.trim_end().trim_end_matches(':');

    Input::<String>::new()
        .with_prompt(question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

fn prompt_pause(prompt: &Prompt, term: &Term) -> Result<String> {
    term.write_line("").map_err(map_io_err)?;
    term.write_str(&prompt.question).map_err(map_io_err)?;
    term.read_line().map_err(map_io_err)?;
    Ok(String::new())
}

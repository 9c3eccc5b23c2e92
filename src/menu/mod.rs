//! The interactive main menu.
//!
//! [`Menu::run`] drives a small state machine:
//!
//! ```text
//! ShowingMenu ──► AwaitingChoice ──► Dispatching ──► ShowingMenu
//!      ▲               │  │
//!      └── invalid ────┘  └── N+1 / end of input ──► Exit
//! ```
//!
//! The visible actions are recomputed every time the menu is shown.

use std::num::IntErrorKind;

use crate::actions::{visible_actions, Action, ActionContext, ActionId, ActionRegistry};
use crate::config::MenuConfig;
use crate::error::{BrewMenuError, Result};
use crate::package_manager::PackageManager;
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the main menu selection.
pub const MENU_CHOICE_KEY: &str = "menu_choice";

/// Prompt key for the outdated-packages sub-menu selection.
pub const OUTDATED_CHOICE_KEY: &str = "outdated_choice";

/// Prompt key for the pause after an action.
pub const CONTINUE_KEY: &str = "continue";

/// States of the main menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    ShowingMenu,
    AwaitingChoice,
    Dispatching(ActionId),
    Exit,
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the listed items.
    Action(usize),
    /// The trailing "exit" item.
    Exit,
    /// Input was not an integer.
    NotANumber,
    /// An integer outside `1..=N+1`, saturated to the `i64` range.
    OutOfRange(i64),
}

/// Parse a selection for a menu listing `item_count` items plus a final
/// exit item numbered `item_count + 1`.
pub fn parse_choice(input: &str, item_count: usize) -> Choice {
    let n = match input.trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return match e.kind() {
                IntErrorKind::PosOverflow => Choice::OutOfRange(i64::MAX),
                IntErrorKind::NegOverflow => Choice::OutOfRange(i64::MIN),
                _ => Choice::NotANumber,
            }
        }
    };

    let exit = item_count as i64 + 1;
    if n == exit {
        Choice::Exit
    } else if (1..exit).contains(&n) {
        Choice::Action((n - 1) as usize)
    } else {
        Choice::OutOfRange(n)
    }
}

/// Number `labels` from 1 and append `exit_label` as the last item.
pub fn render_menu<S: AsRef<str>>(labels: &[S], exit_label: &str) -> Vec<String> {
    labels
        .iter()
        .map(AsRef::as_ref)
        .chain(std::iter::once(exit_label))
        .enumerate()
        .map(|(idx, label)| format!("{}. {}", idx + 1, label))
        .collect()
}

/// How a session ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Actions dispatched, in order.
    pub dispatched: Vec<ActionId>,
    /// Selections rejected as invalid.
    pub invalid_inputs: usize,
    /// Whether the session ended because input was closed rather than by
    /// choosing "Exit".
    pub input_closed: bool,
}

/// The main menu.
pub struct Menu<'a> {
    registry: &'a ActionRegistry,
    config: &'a MenuConfig,
}

impl<'a> Menu<'a> {
    pub fn new(registry: &'a ActionRegistry, config: &'a MenuConfig) -> Self {
        Self { registry, config }
    }

    /// Run until the user exits or input ends.
    ///
    /// Errors raised by actions are shown and the loop continues; only a
    /// failure to read input ends the session with an error.
    pub fn run(
        &self,
        manager: &mut dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut visible: Vec<&Action> = Vec::new();
        let mut state = MenuState::ShowingMenu;

        while state != MenuState::Exit {
            tracing::trace!("Menu state: {:?}", state);
            state = match state {
                MenuState::ShowingMenu => {
                    visible = self.show(manager.display_name(), ui);
                    MenuState::AwaitingChoice
                }
                MenuState::AwaitingChoice => {
                    let prompt = Prompt::input(MENU_CHOICE_KEY, "Enter your choice: ");
                    match ui.prompt(&prompt) {
                        Ok(input) => self.select(&input, &visible, ui, &mut summary),
                        Err(BrewMenuError::InputClosed) => {
                            summary.input_closed = true;
                            MenuState::Exit
                        }
                        Err(e) => return Err(e),
                    }
                }
                MenuState::Dispatching(id) => {
                    summary.dispatched.push(id);
                    if self.dispatch(id, manager, ui) {
                        summary.input_closed = true;
                        MenuState::Exit
                    } else {
                        Self::pause(ui, &mut summary)
                    }
                }
                MenuState::Exit => MenuState::Exit,
            };
        }

        Ok(summary)
    }

    fn show(&self, manager_name: &str, ui: &mut dyn UserInterface) -> Vec<&'a Action> {
        let filtered = visible_actions(self.registry, &self.config.menu);
        for warning in &filtered.warnings {
            ui.warning(warning);
        }

        let labels: Vec<String> = filtered
            .actions
            .iter()
            .map(|a| a.label_for(manager_name))
            .collect();

        ui.show_header(&format!("{} Command Line Menu", manager_name));
        for line in render_menu(&labels, "Exit") {
            ui.message(&line);
        }

        filtered.actions
    }

    fn select(
        &self,
        input: &str,
        visible: &[&Action],
        ui: &mut dyn UserInterface,
        summary: &mut SessionSummary,
    ) -> MenuState {
        match parse_choice(input, visible.len()) {
            Choice::Action(idx) => MenuState::Dispatching(visible[idx].id),
            Choice::Exit => {
                ui.message("Exiting program.");
                MenuState::Exit
            }
            Choice::NotANumber => {
                summary.invalid_inputs += 1;
                ui.error("Invalid input. Please enter a number.");
                MenuState::ShowingMenu
            }
            Choice::OutOfRange(_) => {
                summary.invalid_inputs += 1;
                ui.error("Invalid choice. Please try again.");
                MenuState::ShowingMenu
            }
        }
    }

    /// Run an action. Returns true if input was closed while it ran.
    fn dispatch(
        &self,
        id: ActionId,
        manager: &mut dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> bool {
        let mut ctx = ActionContext {
            config: self.config,
            manager,
            ui,
        };

        match self.registry.run(id, &mut ctx) {
            Ok(()) => false,
            Err(BrewMenuError::InputClosed) => true,
            Err(e) => {
                tracing::debug!("Action '{}' failed: {}", id, e);
                ctx.ui.error(&e.to_string());
                false
            }
        }
    }

    fn pause(ui: &mut dyn UserInterface, summary: &mut SessionSummary) -> MenuState {
        let prompt = Prompt::pause(CONTINUE_KEY, "(Hit [Enter] to go back to Menu)");
        match ui.prompt(&prompt) {
            Ok(_) => MenuState::ShowingMenu,
            Err(e) => {
                if !matches!(e, BrewMenuError::InputClosed) {
                    tracing::debug!("Pause prompt failed: {}", e);
                }
                summary.input_closed = true;
                MenuState::Exit
            }
        }
    }
}

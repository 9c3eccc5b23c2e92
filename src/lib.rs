//! brewmenu - an interactive command-line menu for Homebrew.
//!
//! brewmenu reads package lists from an INI file (`brew_packages.conf`),
//! shows a numbered menu of package-management actions, and runs the
//! matching `brew` commands until the user exits.
//!
//! # Modules
//!
//! - [`actions`] - Action registry, menu filtering, and action handlers
//! - [`cli`] - Command-line interface and session wiring
//! - [`config`] - INI parsing and configuration loading
//! - [`error`] - Error types and result aliases
//! - [`menu`] - The main menu loop
//! - [`package_manager`] - The package manager binary and its test double
//! - [`shell`] - Process execution and PATH lookup
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use brewmenu::actions::ActionRegistry;
//! use brewmenu::config::parse_config;
//! use brewmenu::menu::{Menu, MENU_CHOICE_KEY};
//! use brewmenu::package_manager::{ManagerCall, RecordingManager};
//! use brewmenu::ui::MockUI;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "[install]\npackages = git\n",
//!     Path::new("brew_packages.conf"),
//! ).unwrap();
//! let registry = ActionRegistry::builtin();
//! let mut manager = RecordingManager::new();
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses(MENU_CHOICE_KEY, vec!["2", "6"]);
//!
//! Menu::new(&registry, &config).run(&mut manager, &mut ui).unwrap();
//!
//! assert_eq!(manager.calls()[0], ManagerCall::Install("git".into()));
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod package_manager;
pub mod shell;
pub mod ui;

pub use error::{BrewMenuError, Result};

//! The static action registry.

use std::fmt;
use std::str::FromStr;

use crate::config::MenuConfig;
use crate::error::{BrewMenuError, Result};
use crate::package_manager::PackageManager;
use crate::ui::UserInterface;

use super::handlers;

/// Stable identifier of an action.
///
/// These are the names accepted in `display_menu_exceptions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Update,
    Install,
    Remove,
    CheckOutdated,
    ListInstalled,
    UpgradeOutdated,
}

impl ActionId {
    /// Every identifier, in registry order.
    pub const ALL: [ActionId; 6] = [
        ActionId::Update,
        ActionId::Install,
        ActionId::Remove,
        ActionId::CheckOutdated,
        ActionId::ListInstalled,
        ActionId::UpgradeOutdated,
    ];

    /// Canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Install => "install",
            Self::Remove => "remove",
            Self::CheckOutdated => "check_outdated",
            Self::ListInstalled => "list_installed",
            Self::UpgradeOutdated => "upgrade_outdated",
        }
    }

    /// Older function-style names still found in existing config files.
    fn legacy_name(&self) -> &'static str {
        match self {
            Self::Update => "update_homebrew",
            Self::Install => "install_packages",
            Self::Remove => "remove_packages",
            Self::CheckOutdated => "check_outdated",
            Self::ListInstalled => "list_installed_packages",
            Self::UpgradeOutdated => "update_outdated_packages",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = BrewMenuError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == name || id.legacy_name() == name)
            .ok_or_else(|| BrewMenuError::UnknownAction {
                name: s.trim().to_string(),
            })
    }
}

/// Everything an action handler may touch.
pub struct ActionContext<'a> {
    pub config: &'a MenuConfig,
    pub manager: &'a mut dyn PackageManager,
    pub ui: &'a mut dyn UserInterface,
}

/// An action handler.
pub type Handler = fn(&mut ActionContext<'_>) -> Result<()>;

/// A registered action.
#[derive(Clone, Copy)]
pub struct Action {
    /// Stable identifier.
    pub id: ActionId,
    /// Menu label; `{manager}` is replaced by the package manager's name.
    pub label: &'static str,
    /// Code run when the action is chosen.
    pub handler: Handler,
    /// Whether the action can appear in the main menu at all.
    pub menu_visible: bool,
}

impl Action {
    /// Label with the package manager's name filled in.
    pub fn label_for(&self, manager_name: &str) -> String {
        self.label.replace("{manager}", manager_name)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("menu_visible", &self.menu_visible)
            .finish()
    }
}

/// Built-in actions in display order.
pub const BUILTIN_ACTIONS: [Action; 6] = [
    Action {
        id: ActionId::Update,
        label: "Update {manager}",
        handler: handlers::update,
        menu_visible: true,
    },
    Action {
        id: ActionId::Install,
        label: "Install/Update packages from config file",
        handler: handlers::install,
        menu_visible: true,
    },
    Action {
        id: ActionId::Remove,
        label: "Remove packages from config file",
        handler: handlers::remove,
        menu_visible: true,
    },
    Action {
        id: ActionId::CheckOutdated,
        label: "Check for outdated packages",
        handler: handlers::check_outdated,
        menu_visible: true,
    },
    Action {
        id: ActionId::ListInstalled,
        label: "List currently installed packages",
        handler: handlers::list_installed,
        menu_visible: true,
    },
    Action {
        id: ActionId::UpgradeOutdated,
        label: "Update all outdated packages",
        handler: handlers::upgrade_all_outdated,
        menu_visible: false,
    },
];

/// An ordered set of actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: Vec<Action>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ActionRegistry {
    /// The built-in actions.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ACTIONS.to_vec())
    }

    /// A registry over arbitrary actions (order is display order).
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Actions eligible for the main menu, in order.
    pub fn menu_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.menu_visible)
    }

    /// Look up an action.
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Run an action's handler.
    pub fn run(&self, id: ActionId, ctx: &mut ActionContext<'_>) -> Result<()> {
        let action = self.get(id).ok_or_else(|| BrewMenuError::UnknownAction {
            name: id.to_string(),
        })?;
        tracing::debug!("Dispatching action '{}'", id);
        (action.handler)(ctx)
    }
}

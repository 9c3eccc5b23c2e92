//! Wiring for one menu session.

use std::path::{Path, PathBuf};

use crate::actions::ActionRegistry;
use crate::config::{load_config, ConfigPaths, MenuConfig};
use crate::error::Result;
use crate::menu::{Menu, SessionSummary};
use crate::package_manager::{ExternalManager, PackageManager};
use crate::ui::UserInterface;

use super::args::Cli;

/// A menu session built from command-line arguments.
pub struct MenuSession {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    binary: String,
}

impl MenuSession {
    /// Create a session rooted at `working_dir`.
    pub fn new(working_dir: &Path, cli: &Cli) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: cli.config.clone(),
            binary: cli.binary.clone(),
        }
    }

    /// Read the configuration this session will use.
    ///
    /// Parse errors are returned; a missing file is an empty configuration.
    pub fn load_config(&self) -> Result<MenuConfig> {
        let paths = ConfigPaths::discover(&self.working_dir, self.config_path.as_deref());
        load_config(&paths)
    }

    /// Load the configuration and run the menu against the real binary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SessionSummary> {
        let mut manager = ExternalManager::new(&self.binary);
        self.run_with(&mut manager, ui)
    }

    /// Load the configuration and run the menu against `manager`.
    pub fn run_with(
        &self,
        manager: &mut dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<SessionSummary> {
        let config = self.load_config()?;
        let registry = ActionRegistry::builtin();

        tracing::debug!(
            "Starting menu for '{}' with config {:?}",
            self.binary,
            config.source
        );
        let summary = Menu::new(&registry, &config).run(manager, ui)?;
        tracing::debug!("Session ended: {:?}", summary);
        Ok(summary)
    }
}

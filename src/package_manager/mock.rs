//! Recording package manager for tests.

use crate::error::{BrewMenuError, Result};

use super::PackageManager;

/// A call made against a [`RecordingManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerCall {
    Bootstrap,
    Update,
    Install(String),
    Upgrade(Option<String>),
    Uninstall(String),
    Outdated,
    List,
}

/// Package manager that records every call instead of running anything.
///
/// # Example
///
/// ```
/// use brewmenu::package_manager::{ManagerCall, PackageManager, RecordingManager};
///
/// let mut manager = RecordingManager::new().with_outdated(vec!["git"]);
/// manager.install("wget").unwrap();
/// assert_eq!(manager.outdated().unwrap(), vec!["git".to_string()]);
/// assert_eq!(
///     manager.calls(),
///     [ManagerCall::Install("wget".into()), ManagerCall::Outdated]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordingManager {
    calls: Vec<ManagerCall>,
    available: bool,
    has_script: bool,
    bootstrap_installs: bool,
    failing: bool,
    outdated: Vec<String>,
}

impl Default for RecordingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingManager {
    /// An available manager with nothing outdated.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            available: true,
            has_script: true,
            bootstrap_installs: true,
            failing: false,
            outdated: Vec::new(),
        }
    }

    /// Start out missing from PATH.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Report no known install script.
    pub fn without_install_script(mut self) -> Self {
        self.has_script = false;
        self
    }

    /// Whether bootstrapping makes the manager available.
    pub fn bootstrap_installs(mut self, installs: bool) -> Self {
        self.bootstrap_installs = installs;
        self
    }

    /// Make every operation fail as if the process could not start.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Packages reported by `outdated`.
    pub fn with_outdated(mut self, packages: Vec<&str>) -> Self {
        self.outdated = packages.into_iter().map(String::from).collect();
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> &[ManagerCall] {
        &self.calls
    }

    fn record(&mut self, call: ManagerCall) -> Result<()> {
        self.calls.push(call);
        if self.failing {
            return Err(BrewMenuError::CommandFailed {
                command: "brew".to_string(),
                code: None,
            });
        }
        Ok(())
    }
}

impl PackageManager for RecordingManager {
    fn display_name(&self) -> &str {
        "Homebrew"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn can_bootstrap(&self) -> bool {
        self.has_script
    }

    fn bootstrap(&mut self) -> Result<()> {
        self.record(ManagerCall::Bootstrap)?;
        if self.bootstrap_installs {
            self.available = true;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.record(ManagerCall::Update)
    }

    fn install(&mut self, package: &str) -> Result<()> {
        self.record(ManagerCall::Install(package.to_string()))
    }

    fn upgrade(&mut self, package: Option<&str>) -> Result<()> {
        self.record(ManagerCall::Upgrade(package.map(String::from)))
    }

    fn uninstall(&mut self, package: &str) -> Result<()> {
        self.record(ManagerCall::Uninstall(package.to_string()))
    }

    fn outdated(&mut self) -> Result<Vec<String>> {
        self.record(ManagerCall::Outdated)?;
        Ok(self.outdated.clone())
    }

    fn list(&mut self) -> Result<()> {
        self.record(ManagerCall::List)
    }
}

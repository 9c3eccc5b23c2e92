//! The external package manager.
//!
//! [`PackageManager`] is the seam between the menu and the binary that does
//! the real work. [`ExternalManager`] runs the binary; [`RecordingManager`]
//! records calls for tests.

pub mod external;
pub mod mock;

pub use external::{parse_outdated, ExternalManager, HOMEBREW_INSTALL_SCRIPT};
pub use mock::{ManagerCall, RecordingManager};

use crate::error::Result;
use crate::ui::UserInterface;

/// Operations delegated to the package manager binary.
///
/// Exit codes of the binary are not interpreted: an operation only fails
/// when the process could not be run at all.
pub trait PackageManager {
    /// Name shown to the user, e.g. "Homebrew".
    fn display_name(&self) -> &str;

    /// Whether the binary can be found on the execution path.
    fn is_available(&self) -> bool;

    /// Whether a remote install script is known for this binary.
    fn can_bootstrap(&self) -> bool;

    /// Run the remote install script.
    fn bootstrap(&mut self) -> Result<()>;

    /// `<pkgmgr> update`
    fn update(&mut self) -> Result<()>;

    /// `<pkgmgr> install <package>`
    fn install(&mut self, package: &str) -> Result<()>;

    /// `<pkgmgr> upgrade [<package>]`
    fn upgrade(&mut self, package: Option<&str>) -> Result<()>;

    /// `<pkgmgr> uninstall <package>`
    fn uninstall(&mut self, package: &str) -> Result<()>;

    /// `<pkgmgr> outdated`, captured and reduced to package identifiers.
    fn outdated(&mut self) -> Result<Vec<String>>;

    /// `<pkgmgr> list`, printed directly.
    fn list(&mut self) -> Result<()>;
}

/// Make sure the binary is present, installing it if a script is known.
///
/// A missing binary is never an error here: the attempt is reported and the
/// caller goes on with its operation.
pub fn ensure_available(manager: &mut dyn PackageManager, ui: &mut dyn UserInterface) {
    if manager.is_available() {
        return;
    }

    let name = manager.display_name().to_string();
    if !manager.can_bootstrap() {
        tracing::warn!("{} is not on PATH and has no install script", name);
        ui.warning(&format!(
            "{} not found on PATH and no install script is known for it.",
            name
        ));
        return;
    }

    ui.message(&format!("{} not found. Installing {}...", name, name));
    if let Err(e) = manager.bootstrap() {
        ui.error(&format!("Failed to install {}: {}", name, e));
        return;
    }

    if !manager.is_available() {
        ui.warning(&format!(
            "{} is still not on PATH. You may need to restart your shell.",
            name
        ));
    }
}

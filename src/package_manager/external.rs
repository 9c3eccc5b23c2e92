//! Package manager backed by a real binary.

use std::path::Path;

use crate::error::{BrewMenuError, Result};
use crate::shell::{self, CommandOptions, CommandResult};

use super::PackageManager;

/// Homebrew's official installer, run when `brew` is not on PATH.
pub const HOMEBREW_INSTALL_SCRIPT: &str =
    r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#;

/// Runs a package manager binary such as `brew`.
#[derive(Debug, Clone)]
pub struct ExternalManager {
    binary: String,
    display_name: String,
    install_script: Option<String>,
}

impl ExternalManager {
    /// Create a manager for `binary`, a name on PATH or a path to a file.
    ///
    /// The Homebrew install script is used when the binary is named `brew`.
    pub fn new(binary: &str) -> Self {
        let file_name = Path::new(binary)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| binary.to_string());

        let (display_name, install_script) = if file_name == "brew" {
            (
                "Homebrew".to_string(),
                Some(HOMEBREW_INSTALL_SCRIPT.to_string()),
            )
        } else {
            (file_name, None)
        };

        Self {
            binary: binary.to_string(),
            display_name,
            install_script,
        }
    }

    /// Replace the install script (or remove it with `None`).
    pub fn with_install_script(mut self, script: Option<&str>) -> Self {
        self.install_script = script.map(String::from);
        self
    }

    fn run(&self, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
        let result = shell::run(&self.binary, args, options)?;
        if !result.success {
            tracing::debug!(
                "{} exited with {:?}",
                shell::display_command(&self.binary, args),
                result.exit_code
            );
        }
        Ok(result)
    }

    fn run_inherited(&self, args: &[&str]) -> Result<()> {
        self.run(args, &CommandOptions::default()).map(|_| ())
    }
}

impl PackageManager for ExternalManager {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn is_available(&self) -> bool {
        shell::find_on_path(&self.binary).is_some()
    }

    fn can_bootstrap(&self) -> bool {
        self.install_script.is_some()
    }

    fn bootstrap(&mut self) -> Result<()> {
        let Some(script) = &self.install_script else {
            return Err(BrewMenuError::PackageManagerMissing {
                binary: self.binary.clone(),
                message: "no install script is known".to_string(),
            });
        };
        tracing::info!("Running install script for {}", self.display_name);
        shell::run_shell(script, &CommandOptions::default()).map(|_| ())
    }

    fn update(&mut self) -> Result<()> {
        self.run_inherited(&["update"])
    }

    fn install(&mut self, package: &str) -> Result<()> {
        self.run_inherited(&["install", package])
    }

    fn upgrade(&mut self, package: Option<&str>) -> Result<()> {
        match package {
            Some(package) => self.run_inherited(&["upgrade", package]),
            None => self.run_inherited(&["upgrade"]),
        }
    }

    fn uninstall(&mut self, package: &str) -> Result<()> {
        self.run_inherited(&["uninstall", package])
    }

    fn outdated(&mut self) -> Result<Vec<String>> {
        let result = self.run(&["outdated"], &CommandOptions::captured())?;
        for line in result.stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!("{} outdated: {}", self.display_name, line);
        }
        Ok(parse_outdated(&result.stdout))
    }

    fn list(&mut self) -> Result<()> {
        self.run_inherited(&["list"])
    }
}

/// Reduce `outdated` output to package identifiers, one per non-empty line.
///
/// Only the first word of a line is kept, so verbose lines like
/// `git (2.40.0) < 2.41.0` yield `git`.
pub fn parse_outdated(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(String::from)
        .collect()
}

//! Error types for brewmenu operations.
//!
//! This module defines [`BrewMenuError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems surface before the menu starts and end the program
//! - Anything raised while an action runs is shown to the user and the menu
//!   carries on
//! - [`BrewMenuError::InputClosed`] ends the session without an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for brewmenu operations.
#[derive(Debug, Error)]
pub enum BrewMenuError {
    /// Failed to parse the INI configuration file.
    #[error("Failed to parse config at {path} (line {line}): {message}")]
    ConfigParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// An action identifier that is not in the registry.
    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    /// The package manager binary is not available and could not be installed.
    #[error("Package manager '{binary}' is not available: {message}")]
    PackageManagerMissing { binary: String, message: String },

    /// A command could not be started or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Standard input was closed while waiting for an answer.
    #[error("Input closed")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for brewmenu operations.
pub type Result<T> = std::result::Result<T, BrewMenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_line_and_message() {
        let err = BrewMenuError::ConfigParseError {
            path: PathBuf::from("/brew_packages.conf"),
            line: 3,
            message: "key outside of a section".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/brew_packages.conf"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("key outside of a section"));
    }

    #[test]
    fn unknown_action_displays_name() {
        let err = BrewMenuError::UnknownAction {
            name: "frobnicate".into(),
        };
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn package_manager_missing_displays_binary() {
        let err = BrewMenuError::PackageManagerMissing {
            binary: "port".into(),
            message: "no install script known".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("no install script known"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = BrewMenuError::CommandFailed {
            command: "brew install wget".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew install wget"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BrewMenuError = io_err.into();
        assert!(matches!(err, BrewMenuError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: BrewMenuError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}

//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::ini::IniParser;
use crate::config::schema::MenuConfig;
use crate::error::{BrewMenuError, Result};

/// File name looked up in the working directory and the user config dir.
pub const CONFIG_FILE_NAME: &str = "brew_packages.conf";

/// Candidate configuration files in lookup order (first existing one wins).
///
/// Lookup order:
/// 1. Explicit path (`--config` / `BREWMENU_CONFIG`)
/// 2. `./brew_packages.conf`
/// 3. `<config dir>/brewmenu/brew_packages.conf`
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Path given on the command line.
    pub explicit: Option<PathBuf>,

    /// `brew_packages.conf` in the working directory.
    pub working_dir: PathBuf,

    /// Per-user config file, if a config dir is known for this platform.
    pub user: Option<PathBuf>,
}

impl ConfigPaths {
    /// Build the candidate list for the given working directory.
    pub fn discover(working_dir: &Path, explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            working_dir: working_dir.join(CONFIG_FILE_NAME),
            user: dirs::config_dir().map(|d| d.join("brewmenu").join(CONFIG_FILE_NAME)),
        }
    }

    /// The file to load, if any.
    ///
    /// An explicit path is returned even when it does not exist, so the
    /// caller can report it; the fallbacks are only used when they exist.
    pub fn resolve(&self) -> Option<&Path> {
        if let Some(p) = &self.explicit {
            return Some(p);
        }

        if self.working_dir.is_file() {
            return Some(&self.working_dir);
        }

        self.user.as_deref().filter(|p| p.is_file())
    }
}

/// Parse configuration content read from `path`.
pub fn parse_config(content: &str, path: &Path) -> Result<MenuConfig> {
    let doc = IniParser::parse(content).map_err(|e| BrewMenuError::ConfigParseError {
        path: path.to_path_buf(),
        line: e.line,
        message: e.message,
    })?;

    let mut config = MenuConfig::from_document(&doc);
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Load a configuration file.
///
/// A missing file is not an error: it yields an empty configuration, the
/// same as a file with no recognized sections.
pub fn load_config_file(path: &Path) -> Result<MenuConfig> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using empty config", path.display());
        return Ok(MenuConfig::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let config = parse_config(&content, path)?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Discover and load the configuration for a session.
pub fn load_config(paths: &ConfigPaths) -> Result<MenuConfig> {
    match paths.resolve() {
        Some(path) => load_config_file(path),
        None => {
            tracing::debug!("No config file found, using empty config");
            Ok(MenuConfig::default())
        }
    }
}

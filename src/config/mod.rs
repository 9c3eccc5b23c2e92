//! Configuration loading and parsing.
//!
//! - INI parsing in [`ini`]
//! - Typed settings in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use brewmenu::config::{parse_config, DisplayMode};
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "[install]\npackages = wget,git\n\n[menu]\ndisplay_menu_services = all\n",
//!     Path::new("brew_packages.conf"),
//! )
//! .unwrap();
//! assert_eq!(config.install.len(), 2);
//! assert_eq!(config.menu.display, DisplayMode::All);
//! assert!(config.remove.is_empty());
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config <path>` (or `BREWMENU_CONFIG`)
//! 2. `./brew_packages.conf`
//! 3. `<config dir>/brewmenu/brew_packages.conf`

pub mod ini;
pub mod loader;
pub mod schema;

pub use ini::{IniDocument, IniError, IniParser};
pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, CONFIG_FILE_NAME};
pub use schema::{DisplayMode, MenuConfig, MenuSettings, PackageList};

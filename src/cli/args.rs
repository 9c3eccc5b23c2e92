//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Interactive menu for installing, removing, and upgrading Homebrew packages.
#[derive(Debug, Parser)]
#[command(name = "brewmenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ./brew_packages.conf)
    #[arg(short, long, env = "BREWMENU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Package manager binary to run
    #[arg(short, long, env = "BREWMENU_BINARY", default_value = "brew")]
    pub binary: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_brew() {
        let cli = Cli::try_parse_from(["brewmenu"]).unwrap();
        assert_eq!(cli.binary, "brew");
        assert!(!cli.debug);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_short_flags() {
        let cli =
            Cli::try_parse_from(["brewmenu", "-c", "/tmp/pkgs.conf", "-b", "/opt/bin/brew"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pkgs.conf")));
        assert_eq!(cli.binary, "/opt/bin/brew");
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "brewmenu",
            "--config",
            "pkgs.conf",
            "--debug",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pkgs.conf")));
        assert!(cli.debug);
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["brewmenu", "install"]).is_err());
    }
}

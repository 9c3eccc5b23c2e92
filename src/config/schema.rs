//! Typed configuration built from an [`IniDocument`].

use std::fmt;
use std::path::PathBuf;

use super::ini::IniDocument;

/// An ordered list of package names from a comma-separated option.
///
/// Entries are trimmed and blank entries dropped, so an absent or empty option
/// is simply an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList(Vec<String>);

impl PackageList {
    /// Parse a comma-separated value.
    pub fn parse(value: &str) -> Self {
        Self(split_list(value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for PackageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Split a comma- or newline-separated option into trimmed, non-empty items.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Which registry actions the main menu shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every menu action.
    #[default]
    All,
    /// Every menu action except the listed exceptions.
    AllExcept,
    /// Only the listed exceptions.
    NoneExcept,
    /// A value that is none of the above; treated as `All` with a warning.
    Unrecognized(String),
}

impl DisplayMode {
    /// Parse the `display_menu_services` value.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "all" => Self::All,
            "all_except" => Self::AllExcept,
            "none_except" => Self::NoneExcept,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// The `[menu]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSettings {
    /// `display_menu_services`
    pub display: DisplayMode,
    /// `display_menu_exceptions`, as written (unresolved identifiers).
    pub exceptions: Vec<String>,
}

/// The complete configuration for a session.
///
/// Built once at startup and passed by reference to the menu filter and loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// `[install] packages`
    pub install: PackageList,
    /// `[remove] packages`
    pub remove: PackageList,
    /// `[menu]`
    pub menu: MenuSettings,
    /// `[update] update_select_packages`
    pub update_select: PackageList,
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
}

impl MenuConfig {
    /// Build from a parsed document. Missing sections and options are empty.
    pub fn from_document(doc: &IniDocument) -> Self {
        let list = |section: &str, option: &str| {
            doc.get(section, option)
                .map(PackageList::parse)
                .unwrap_or_default()
        };

        Self {
            install: list("install", "packages"),
            remove: list("remove", "packages"),
            menu: MenuSettings {
                display: doc
                    .get("menu", "display_menu_services")
                    .map(DisplayMode::parse)
                    .unwrap_or_default(),
                exceptions: doc
                    .get("menu", "display_menu_exceptions")
                    .map(split_list)
                    .unwrap_or_default(),
            },
            update_select: list("update", "update_select_packages"),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IniParser;

    #[test]
    fn package_list_splits_and_trims() {
        let list = PackageList::parse("wget, git ,jq");
        assert_eq!(list.as_slice(), ["wget", "git", "jq"]);
    }

    #[test]
    fn package_list_empty_value_is_empty() {
        assert!(PackageList::parse("").is_empty());
        assert!(PackageList::parse(" , ,").is_empty());
    }

    #[test]
    fn package_list_keeps_order() {
        let list = PackageList::parse("c,a,b");
        let names: Vec<_> = list.iter().collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn package_list_display_joins_with_comma_space() {
        assert_eq!(PackageList::parse("a,b").to_string(), "a, b");
    }

    #[test]
    fn package_list_splits_continuation_lines() {
        let list = PackageList::parse("wget,\n\ngit");
        assert_eq!(list.as_slice(), ["wget", "git"]);
    }

    #[test]
    fn display_mode_parses_known_values() {
        assert_eq!(DisplayMode::parse("all"), DisplayMode::All);
        assert_eq!(DisplayMode::parse(" all_except "), DisplayMode::AllExcept);
        assert_eq!(DisplayMode::parse("none_except"), DisplayMode::NoneExcept);
    }

    #[test]
    fn display_mode_keeps_unrecognized_value() {
        assert_eq!(
            DisplayMode::parse("some"),
            DisplayMode::Unrecognized("some".to_string())
        );
    }

    #[test]
    fn from_document_reads_all_options() {
        let doc = IniParser::parse(
            r#"
[install]
packages = wget,git

[remove]
packages = node

[menu]
display_menu_services = all_except
display_menu_exceptions = remove_packages, list_installed

[update]
update_select_packages = git
"#,
        )
        .unwrap();

        let config = MenuConfig::from_document(&doc);

        assert_eq!(config.install.as_slice(), ["wget", "git"]);
        assert_eq!(config.remove.as_slice(), ["node"]);
        assert_eq!(config.menu.display, DisplayMode::AllExcept);
        assert_eq!(
            config.menu.exceptions,
            vec!["remove_packages".to_string(), "list_installed".to_string()]
        );
        assert_eq!(config.update_select.as_slice(), ["git"]);
    }

    #[test]
    fn from_empty_document_is_default() {
        let config = MenuConfig::from_document(&IniDocument::new());
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.menu.display, DisplayMode::All);
    }
}

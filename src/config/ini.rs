//! INI file parsing.
//!
//! This module parses the small INI dialect used by `brew_packages.conf`
//! into a map of sections, each a map of option names to raw string values.

use std::collections::BTreeMap;

/// Name of the section whose options act as fallbacks for every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A parsing failure with the 1-based line number it occurred on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniError {
    /// Line the error was found on.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

/// A parsed INI document.
///
/// Lookups never fail: a missing section or option is simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl IniDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `option` in `section`, falling back to `[DEFAULT]`.
    ///
    /// Option names are case-insensitive.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        let option = option.to_lowercase();
        self.sections
            .get(section)
            .and_then(|s| s.get(&option))
            .or_else(|| {
                self.sections
                    .get(DEFAULT_SECTION)
                    .and_then(|s| s.get(&option))
            })
            .map(|v| v.as_str())
    }

    /// Set an option, creating the section if needed.
    pub fn set(&mut self, section: &str, option: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(option.to_lowercase(), value.to_string());
    }
}

/// Parses INI content into an [`IniDocument`].
///
/// # Supported Formats
///
/// - Sections: `[install]`
/// - Options: `packages = wget,git` or `packages: wget,git`
/// - Empty values: `packages =`
/// - Comments: lines starting with `#` or `;`
/// - Continuation: indented lines extend the previous value, joined with `\n`
///
/// # Example
///
/// ```
/// use brewmenu::config::IniParser;
///
/// let content = r#"
/// [install]
/// packages = wget,git
///
/// [menu]
/// display_menu_services: all_except
/// "#;
///
/// let doc = IniParser::parse(content).unwrap();
/// assert_eq!(doc.get("install", "packages"), Some("wget,git"));
/// assert_eq!(doc.get("menu", "DISPLAY_MENU_SERVICES"), Some("all_except"));
/// assert_eq!(doc.get("remove", "packages"), None);
/// ```
pub struct IniParser;

impl IniParser {
    /// Parse content into a document.
    pub fn parse(content: &str) -> std::result::Result<IniDocument, IniError> {
        let mut doc = IniDocument::new();
        let mut current_section: Option<String> = None;
        let mut last_option: Option<String> = None;
        let mut blank_run = 0;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                blank_run += 1;
                continue;
            }

            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = raw.starts_with(' ') || raw.starts_with('\t');
            let blanks = std::mem::take(&mut blank_run);
            if indented {
                if let (Some(section), Some(option)) = (&current_section, &last_option) {
                    Self::append_continuation(&mut doc, section, option, blanks, trimmed);
                    continue;
                }
            }

            if let Some(name) = Self::parse_section_header(trimmed) {
                if name.is_empty() {
                    return Err(IniError {
                        line: line_no,
                        message: "empty section name".to_string(),
                    });
                }
                doc.sections.entry(name.to_string()).or_default();
                current_section = Some(name.to_string());
                last_option = None;
                continue;
            }

            let Some((key, value)) = Self::parse_option(trimmed) else {
                return Err(IniError {
                    line: line_no,
                    message: format!("expected 'key = value', found '{}'", trimmed),
                });
            };

            let Some(section) = &current_section else {
                return Err(IniError {
                    line: line_no,
                    message: format!("option '{}' appears before any section header", key),
                });
            };

            doc.set(section, &key, &value);
            last_option = Some(key.to_lowercase());
        }

        Ok(doc)
    }

    fn parse_section_header(line: &str) -> Option<&str> {
        line.strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .map(str::trim)
    }

    /// Split on the first `=` or `:`, whichever comes first.
    fn parse_option(line: &str) -> Option<(String, String)> {
        let sep = line.find(['=', ':'])?;
        let key = line[..sep].trim();
        if key.is_empty() {
            return None;
        }
        let value = line[sep + 1..].trim();
        Some((key.to_string(), value.to_string()))
    }

    /// Blank lines between the previous line and `text` stay in the value.
    fn append_continuation(
        doc: &mut IniDocument,
        section: &str,
        option: &str,
        blanks: usize,
        text: &str,
    ) {
        if let Some(value) = doc
            .sections
            .get_mut(section)
            .and_then(|s| s.get_mut(option))
        {
            if !value.is_empty() {
                value.push('\n');
                value.push_str(&"\n".repeat(blanks));
            }
            value.push_str(text);
        }
    }
}

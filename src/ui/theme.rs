//! Visual theme and styling.

use console::Style;

/// brewmenu's visual theme.
#[derive(Debug, Clone)]
pub struct BrewMenuTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for menu titles (bold yellow).
    pub header: Style,
    /// Style for menu item numbers (cyan).
    pub number: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for BrewMenuTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BrewMenuTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().yellow(),
            number: Style::new().cyan(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            number: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a menu title.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a numbered menu line such as `3. Check for outdated packages`.
    ///
    /// Lines that don't start with a number are returned unchanged.
    pub fn format_menu_line(&self, line: &str) -> String {
        match line.split_once(". ") {
            Some((num, rest)) if !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()) => {
                format!("{} {}", self.number.apply_to(format!("{}.", num)), rest)
            }
            _ => line.to_string(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

//! Mode enums controlling selection semantics and input interpretation.
//!
//! - [`SelectMode`]: single value that closes the menu, or toggled multi values
//! - [`InputMode`]: whether typed characters navigate or edit the filter
//! - [`FilterMode`]: how filter text is matched against choice labels

/// Selection semantics of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Selecting a choice replaces the value and closes the menu.
    #[default]
    Single,

    /// Selecting a choice toggles its membership; the menu stays open.
    /// Selected choices are shown as removable badges on the trigger and the
    /// open menu has a search bar.
    Multi,
}

impl SelectMode {
    /// Parses a configuration value (`single` or `multi`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "multi" | "multiple" => Some(Self::Multi),
            _ => None,
        }
    }

    /// Default trigger label for the mode.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Single => "Single Select",
            Self::Multi => "Multi-Select",
        }
    }
}

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and select; characters like `j`/`k`/`q` are commands.
    Normal,

    /// Characters are appended to the filter text. Active while a multi-select
    /// menu is open.
    Search,
}

/// Matching strategy used for filter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Case-insensitive substring match against the display label.
    #[default]
    Substring,

    /// Skim-style fuzzy match, case-insensitive.
    Fuzzy,
}

impl FilterMode {
    /// Parses a configuration value (`substring` or `fuzzy`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

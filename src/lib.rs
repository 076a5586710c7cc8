//! Zelect: a Zellij plugin providing single- and multi-select dropdowns.
//!
//! Zelect renders a labelled trigger button that opens a listbox of choices:
//! - Single select: picking a choice replaces the value and closes the menu
//! - Multi select: choices toggle in and out, shown as removable badges
//! - Case-insensitive filtering (substring or fuzzy) with match highlighting
//! - Keyboard navigation and mouse support, including outside-click close
//! - Themeable 24-bit color output

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controller
//! │  - Event handling                                   │
//! │  - Selection, filter, open state                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Domain Layer  │
//! │ (ui/)         │                     │ (domain/)     │
//! │ - Rendering   │                     │ - Choices     │
//! │ - Hit map     │                     │ - Selection   │
//! │ - Theming     │                     │ - Geometry    │
//! └───────────────┘                     └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Tracing spans exported to a JSON-lines file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use zelect::app::{handle_event, AppState, Event, SelectMode};
//! use zelect::domain::ChoiceSet;
//! use zelect::ui::Theme;
//!
//! let choices = ChoiceSet::parse("framer:Framer, sketch:Sketch, figma:Figma")?;
//! let mut state = AppState::new(choices, SelectMode::Multi, Theme::default());
//!
//! handle_event(&mut state, &Event::ToggleDropdown)?;
//! handle_event(&mut state, &Event::SelectChoice { id: "sketch".into() })?;
//! handle_event(&mut state, &Event::SelectChoice { id: "figma".into() })?;
//!
//! assert_eq!(state.selection().ids(), vec!["sketch", "figma"]);
//! assert!(state.is_open());
//! # Ok::<(), zelect::ZelectError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FilterMode, InputMode, SelectMode};
pub use domain::{Choice, ChoiceSet, Result, ZelectError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zelect.wasm" {
///     choices "framer:Framer, sketch:Sketch, figma:Figma"
///     mode "multi"
///     label "Design tools"
///     filter "fuzzy"
///     theme "catppuccin-latte"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Choices offered by the menu. Empty if missing or malformed.
    pub choices: ChoiceSet,

    /// Selection semantics. Default: single.
    pub mode: SelectMode,

    /// Label above the trigger. `None` uses the mode's default label.
    pub label: Option<String>,

    /// Trigger text while nothing is selected. `None` uses `Select one...`.
    pub placeholder: Option<String>,

    /// How filter text is matched. Default: substring.
    pub filter_mode: FilterMode,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for exported spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `choices`: JSON array of `{"id", "display"}` objects, or a comma list
    ///   of `id:Display` / `Display` entries
    /// - `mode`: `single` | `multi` (falls back to single)
    /// - `filter`: `substring` | `fuzzy` (falls back to substring)
    /// - `label`, `placeholder`, `theme`, `theme_file`, `trace_level`: taken
    ///   as-is, blank values ignored
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zelect::{Config, SelectMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("choices".to_string(), "Framer, Sketch".to_string());
    /// map.insert("mode".to_string(), "multi".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.choices.len(), 2);
    /// assert_eq!(config.mode, SelectMode::Multi);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let choices = config.get("choices").map_or_else(ChoiceSet::default, |raw| {
            ChoiceSet::parse(raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid choices, starting with none");
                ChoiceSet::default()
            })
        });

        let mode = config
            .get("mode")
            .and_then(|s| SelectMode::parse(s))
            .unwrap_or_default();

        let filter_mode = config
            .get("filter")
            .and_then(|s| FilterMode::parse(s))
            .unwrap_or_default();

        Self {
            choices,
            mode,
            label: text("label"),
            placeholder: text("placeholder"),
            filter_mode,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the controller state described by `config`.
///
/// The menu starts closed, with an empty selection and no filter.
///
/// # Example
///
/// ```
/// use zelect::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(!state.is_open());
/// assert_eq!(state.label, "Single Select");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        choice_count = config.choices.len(),
        mode = ?config.mode,
        "initializing zelect plugin"
    );

    let mut state = AppState::new(config.choices.clone(), config.mode, config.load_theme())
        .with_filter_mode(config.filter_mode);

    if let Some(label) = &config.label {
        state = state.with_label(label.as_str());
    }
    if let Some(placeholder) = &config.placeholder {
        state = state.with_placeholder(placeholder.as_str());
    }

    state
}

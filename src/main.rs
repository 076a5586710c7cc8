//! Zellij plugin shim for zelect.
//!
//! Translates Zellij events (keys, mouse, visibility) into [`zelect::Event`]s,
//! feeds them to [`zelect::handle_event`], and executes the returned
//! [`zelect::Action`]s through the plugin API.
//!
//! # Event Flow
//!
//! ```text
//! Zellij Event → map_*_event → zelect::Event → handle_event → Actions → execute_action
//! ```
//!
//! Mouse events are only subscribed while the menu is mounted: the plugin
//! subscribes on load and when its pane becomes visible, and unsubscribes
//! when the pane is hidden.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zelect::domain::Point;
use zelect::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: zelect::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zelect::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zelect::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            choice_count = config.choices.len(),
            mode = ?config.mode,
            filter_mode = ?config.filter_mode,
            "parsed configuration"
        );
        self.app = zelect::initialize(&config);

        subscribe(&[EventType::Key, EventType::Visible]);
        self.dispatch(&Event::Mount);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Visible(visible) => {
                if visible {
                    Event::Mount
                } else {
                    Event::Unmount
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zelect::ui::render(&mut self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the controller and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press according to open state and input mode.
    ///
    /// - Closed: Enter, Space, Down or `j` open the menu; `q` or Esc hide the pane
    /// - Searching: characters edit the filter, arrows and Ctrl+n/p navigate,
    ///   Ctrl+u clears, Esc leaves the search bar
    /// - Navigating: `j`/`k` and arrows move, Enter or Space select, `/`
    ///   focuses search (multi), Esc or `q` close the menu
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::CursorDown),
                BareKey::Char('p') => Some(Event::CursorUp),
                BareKey::Char('u') if self.app.is_open() => Some(Event::ClearFilter),
                _ => None,
            };
        }

        if !self.app.is_open() {
            return match key.bare_key {
                BareKey::Enter | BareKey::Char(' ' | 'j') | BareKey::Down => {
                    Some(Event::ToggleDropdown)
                }
                BareKey::Char('q') | BareKey::Esc => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match self.app.input_mode() {
            InputMode::Search => match key.bare_key {
                BareKey::Down => Event::CursorDown,
                BareKey::Up => Event::CursorUp,
                BareKey::Enter => Event::SelectHighlighted,
                BareKey::Esc => Event::BlurSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::CursorDown,
                BareKey::Up | BareKey::Char('k') => Event::CursorUp,
                BareKey::Enter | BareKey::Char(' ') => Event::SelectHighlighted,
                BareKey::Char('/') => Event::FocusSearch,
                BareKey::Esc | BareKey::Char('q') => Event::ToggleDropdown,
                _ => return None,
            },
        })
    }

    /// Maps a left click to a pane position. Positions above the pane are
    /// dropped.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let line = usize::try_from(line).ok()?;
                tracing::debug!(line = line, col = col, "left click");
                Some(Event::Click(Point::new(line, col)))
            }
            _ => None,
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SubscribePointer => {
                tracing::debug!("subscribing to mouse events");
                subscribe(&[EventType::Mouse]);
            }
            Action::UnsubscribePointer => {
                tracing::debug!("unsubscribing from mouse events");
                unsubscribe(&[EventType::Mouse]);
            }
        }
    }
}

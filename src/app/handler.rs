//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point the plugin runtime feeds events
//! into. It mutates [`AppState`] and returns whether a re-render is needed
//! together with the [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Unmount`
//! - **Pointer**: `Click` (resolved through the last rendered hit map)
//! - **Menu**: `ToggleDropdown`, `CloseFocus`, `FocusSearch`, `BlurSearch`
//! - **Navigation**: `CursorDown`, `CursorUp`, `SelectHighlighted`
//! - **Selection**: `SelectChoice`, `RemoveChoice`
//! - **Filter**: `Char`, `Backspace`, `ClearFilter`
//!
//! # Example
//!
//! ```
//! use zelect::app::{handle_event, AppState, Event, SelectMode};
//! use zelect::domain::ChoiceSet;
//! use zelect::ui::Theme;
//!
//! let mut state = AppState::new(ChoiceSet::default(), SelectMode::Multi, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ToggleDropdown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zelect::ZelectError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::{Result, ZelectError};
use crate::domain::{Choice, Point};
use crate::ui::layout::HitTarget;

/// Discrete inputs to the controller, delivered in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The menu became part of the visible interface.
    Mount,
    /// The menu left the visible interface.
    Unmount,

    /// Pointer press at a pane position.
    ///
    /// Resolved against the last rendered frame: trigger, badge remove
    /// button, search bar or item. A press that hits nothing is an outside
    /// interaction when it also lies outside the controller bounds.
    Click(Point),

    /// Opens or closes the dropdown.
    ToggleDropdown,
    /// Hides the plugin pane.
    CloseFocus,
    /// Routes typed characters to the search bar.
    FocusSearch,
    /// Routes typed characters back to navigation.
    BlurSearch,

    /// Moves the cursor down (wraps).
    CursorDown,
    /// Moves the cursor up (wraps).
    CursorUp,
    /// Selects the choice under the cursor.
    SelectHighlighted,

    /// Selects the choice with this id.
    SelectChoice { id: String },
    /// Removes the choice with this id from a multi selection.
    RemoveChoice { id: String },

    /// Appends a character to the filter text.
    Char(char),
    /// Removes the last character of the filter text.
    Backspace,
    /// Empties the filter text.
    ClearFilter,
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// Pointer events are ignored while the controller is not mounted, so a click
/// can never act on a menu that is no longer displayed.
///
/// # Errors
///
/// Returns [`ZelectError::UnknownChoice`] if `SelectChoice` or
/// `RemoveChoice` names an id that is not in the choice set.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => {
            let actions: Vec<Action> = state.pointer().acquire().into_iter().collect();
            Ok((true, actions))
        }
        Event::Unmount => {
            let actions: Vec<Action> = state.pointer().release().into_iter().collect();
            Ok((false, actions))
        }
        Event::Click(point) => {
            if !state.is_mounted() {
                tracing::debug!(line = point.line, col = point.col, "click ignored while unmounted");
                return Ok((false, vec![]));
            }
            handle_click(state, *point)
        }
        Event::ToggleDropdown => {
            state.toggle_dropdown();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FocusSearch => Ok((state.focus_search(), vec![])),
        Event::BlurSearch => Ok((state.blur_search(), vec![])),
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::SelectHighlighted => {
            let selected = state.select_highlighted();
            if !selected {
                tracing::debug!("nothing highlighted to select");
            }
            Ok((selected, vec![]))
        }
        Event::SelectChoice { id } => {
            let choice = lookup(state, id)?;
            state.select_choice(&choice);
            Ok((true, vec![]))
        }
        Event::RemoveChoice { id } => {
            let choice = lookup(state, id)?;
            Ok((state.remove_choice(&choice), vec![]))
        }
        Event::Char(c) => {
            state.push_filter_char(*c);
            tracing::trace!(query = %state.filter_text(), char = %c, "filter updated");
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.pop_filter_char(), vec![])),
        Event::ClearFilter => {
            if state.filter_text().is_empty() {
                return Ok((false, vec![]));
            }
            state.set_filter_text("");
            Ok((true, vec![]))
        }
    }
}

fn lookup(state: &AppState, id: &str) -> Result<Choice> {
    state
        .choices
        .find(id)
        .cloned()
        .ok_or_else(|| ZelectError::UnknownChoice(id.to_string()))
}

/// Dispatches a pointer press to whatever was drawn under it.
fn handle_click(state: &mut AppState, point: Point) -> Result<(bool, Vec<Action>)> {
    let target = state.target_at(point).cloned();
    tracing::debug!(line = point.line, col = point.col, target = ?target, "click resolved");

    match target {
        Some(HitTarget::Trigger) => {
            state.toggle_dropdown();
            Ok((true, vec![]))
        }
        Some(HitTarget::RemoveBadge(id)) => {
            let choice = lookup(state, &id)?;
            Ok((state.remove_choice(&choice), vec![]))
        }
        Some(HitTarget::SearchBar) => Ok((state.focus_search(), vec![])),
        Some(HitTarget::Item(id)) => {
            let choice = lookup(state, &id)?;
            state.select_choice(&choice);
            Ok((true, vec![]))
        }
        None => Ok((state.on_outside_interaction(point), vec![])),
    }
}

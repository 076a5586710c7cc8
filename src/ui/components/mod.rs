//! Composable UI component renderers.
//!
//! Each component appends one part of the widget to a frame buffer and
//! returns the next free line, so the renderer can stack them top to bottom.
//!
//! # Components
//!
//! - [`label`]: text above the trigger
//! - [`trigger`]: the button box with value, placeholder or badges
//! - [`search`]: search input inside the open menu
//! - [`listbox`]: the visible choices with cursor and check marks
//! - [`empty`]: message shown when nothing is visible
//! - [`footer`]: keybinding hints

mod empty;
mod footer;
mod label;
mod listbox;
mod search;
mod trigger;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use label::render_label;
pub use listbox::render_listbox;
pub use search::render_search_bar;
pub use trigger::render_trigger;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Frame, MenuInfo};

/// Appends a horizontal box edge such as `┌───┐` at `line`.
///
/// Returns the next line.
fn render_edge(
    out: &mut String,
    line: usize,
    frame: &Frame,
    color: &str,
    (left, right): (char, char),
) -> usize {
    position_cursor(out, line, frame.col);
    out.push_str(&Theme::fg(color));
    out.push(left);
    out.push_str(&"─".repeat(frame.inner_width()));
    out.push(right);
    out.push_str(Theme::reset());
    line + 1
}

/// Appends the open menu: top border, optional search bar, items or the
/// empty state, and the bottom border.
///
/// # Layout
///
/// ```text
/// ┌──────────────┐   menu.line
/// │ Search: fi▏  │   multi only
/// ├──────────────┤
/// │ ✓ Figma      │   menu.items_line
/// └──────────────┘   menu.bottom_line
/// ```
pub fn render_menu(out: &mut String, menu: &MenuInfo, frame: &Frame, theme: &Theme) -> usize {
    let border = &theme.colors.border_open;
    let mut line = render_edge(out, menu.line, frame, border, ('┌', '┐'));

    if let Some(search) = &menu.search_bar {
        line = render_search_bar(out, line, search, frame, theme);
        line = render_edge(out, line, frame, border, ('├', '┤'));
    }

    line = match &menu.empty_state {
        Some(empty) => render_empty_state(out, line, empty, frame, theme),
        None => render_listbox(out, line, &menu.items, frame, theme),
    };

    render_edge(out, line.max(menu.bottom_line), frame, border, ('└', '┘'))
}

/// Appends the side borders of an inner row, leaving the cursor after `│`.
fn open_row(out: &mut String, line: usize, frame: &Frame, border: &str) {
    position_cursor(out, line, frame.col);
    out.push_str(&Theme::fg(border));
    out.push('│');
    out.push_str(Theme::reset());
}

/// Closes an inner row with the right border.
fn close_row(out: &mut String, border: &str) {
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(border));
    out.push('│');
    out.push_str(Theme::reset());
}

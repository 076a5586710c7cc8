//! Empty state component renderer.

use super::{close_row, open_row};
use crate::ui::helpers::{truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, Frame};

/// Appends the empty state message centered in one listbox row.
///
/// Shown instead of items when the choice set is empty or the filter text
/// matches nothing. Returns the next line.
pub fn render_empty_state(
    out: &mut String,
    line: usize,
    empty: &EmptyState,
    frame: &Frame,
    theme: &Theme,
) -> usize {
    let inner = frame.inner_width();
    let message = truncate(&empty.message, inner);
    let msg_len = width_of(&message);
    let padding = inner.saturating_sub(msg_len) / 2;

    open_row(out, line, frame, &theme.colors.border_open);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&" ".repeat(padding));
    out.push_str(&message);
    out.push_str(&" ".repeat(inner.saturating_sub(padding + msg_len)));
    close_row(out, &theme.colors.border_open);
    line + 1
}

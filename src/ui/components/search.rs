//! Search bar component renderer.

use super::{close_row, open_row};
use crate::ui::helpers::{tail, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Frame, SearchBarInfo};

const PROMPT: &str = " Search: ";

/// Appends the search input row. Returns the next line.
///
/// A focused bar shows a `▏` caret after the query. When the query is wider
/// than the box, its tail is shown so the caret stays visible.
///
/// ```text
/// │ Search: fig▏             │
/// ```
pub fn render_search_bar(
    out: &mut String,
    line: usize,
    search: &SearchBarInfo,
    frame: &Frame,
    theme: &Theme,
) -> usize {
    let inner = frame.inner_width();
    let caret = if search.focused { "▏" } else { "" };
    let room = inner.saturating_sub(width_of(PROMPT) + width_of(caret) + 1);

    let query = tail(&search.query, room);

    let text = format!("{PROMPT}{query}{caret}");
    let used = width_of(&text);

    open_row(out, line, frame, &theme.colors.border_open);
    out.push_str(&Theme::fg(&theme.colors.search_bar_fg));
    out.push_str(PROMPT);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&query);
    out.push_str(&Theme::fg(&theme.colors.search_bar_fg));
    out.push_str(caret);
    out.push_str(&" ".repeat(inner.saturating_sub(used)));
    close_row(out, &theme.colors.border_open);
    line + 1
}

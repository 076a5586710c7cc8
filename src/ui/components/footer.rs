//! Footer component renderer.

use crate::ui::helpers::{position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends keybinding hints centered on `line`, dimmed and padded to the
/// full pane width. Returns the next line.
///
/// Hints wider than the pane are cut so narrow panes keep their layout.
pub fn render_footer(out: &mut String, line: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = width_of(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, line, 0);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(padding));
    out.push_str(&help_text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));
    out.push_str(Theme::reset());
    line + 1
}

//! Listbox component renderer.

use super::{close_row, open_row};
use crate::ui::helpers::{clip_ranges, push_highlighted, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, Frame};

/// Appends one row per visible item. Returns the next line.
pub fn render_listbox(
    out: &mut String,
    line: usize,
    items: &[DisplayItem],
    frame: &Frame,
    theme: &Theme,
) -> usize {
    let mut current = line;
    for item in items {
        current = render_item(out, current, item, frame, theme);
    }
    current
}

/// Appends a single item row.
///
/// # Layout
///
/// ```text
/// │ ✓ Figma           │
/// ```
///
/// # Styling Precedence
///
/// 1. Cursor colors on the whole row (if `is_highlighted`)
/// 2. Filter match highlights (otherwise)
/// 3. Normal text color
fn render_item(out: &mut String, line: usize, item: &DisplayItem, frame: &Frame, theme: &Theme) -> usize {
    let inner = frame.inner_width();
    // " ✓ " before the text, one space after
    let display = truncate(&item.display, inner.saturating_sub(4));
    let used = 3 + width_of(&display);

    open_row(out, line, frame, &theme.colors.border_open);

    let base_fg = if item.is_highlighted {
        out.push_str(&Theme::bg(&theme.colors.cursor_bg));
        &theme.colors.cursor_fg
    } else {
        &theme.colors.text_normal
    };

    out.push(' ');
    if item.is_selected {
        if !item.is_highlighted {
            out.push_str(&Theme::fg(&theme.colors.checkmark_fg));
        } else {
            out.push_str(&Theme::fg(base_fg));
        }
        out.push('✓');
    } else {
        out.push(' ');
    }
    out.push(' ');

    if item.is_highlighted {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(base_fg));
        out.push_str(&display);
    } else {
        let kept = if display == item.display {
            display.chars().count()
        } else {
            display.chars().count().saturating_sub(1)
        };
        let ranges = clip_ranges(&item.highlight_ranges, kept);
        push_highlighted(out, &display, &ranges, theme, base_fg);
    }

    out.push_str(&" ".repeat(inner.saturating_sub(used)));
    close_row(out, &theme.colors.border_open);
    line + 1
}

//! Label component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Frame, LabelInfo};

/// Appends the bold label text, cut to the frame width. Returns the next line.
pub fn render_label(out: &mut String, label: &LabelInfo, frame: &Frame, theme: &Theme) -> usize {
    position_cursor(out, label.line, frame.col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.label_fg));
    out.push_str(&truncate(&label.text, frame.width));
    out.push_str(Theme::reset());
    label.line + 1
}

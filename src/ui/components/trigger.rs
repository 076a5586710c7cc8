//! Trigger component renderer.

use crate::ui::helpers::{position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BadgeInfo, Frame, TriggerContent, TriggerInfo};

/// Appends the 3-line trigger box. Returns the line after its bottom border.
///
/// # Layout
///
/// ```text
/// ┌────────────────────────────┐
/// │ [Sketch ×] [Figma ×] +2  ▾ │
/// └────────────────────────────┘
/// ```
///
/// The chevron points up while the menu is open. Badge positions come from
/// the view model so they line up with the hit map.
pub fn render_trigger(out: &mut String, trigger: &TriggerInfo, frame: &Frame, theme: &Theme) -> usize {
    let border = if trigger.expanded {
        &theme.colors.border_open
    } else {
        &theme.colors.border
    };
    let inner = frame.inner_width();
    let content_col = frame.col + 2;
    let content_width = frame.width.saturating_sub(6);

    position_cursor(out, trigger.line, frame.col);
    out.push_str(&Theme::fg(border));
    out.push_str(&format!("┌{}┐", "─".repeat(inner)));

    position_cursor(out, trigger.line + 1, frame.col);
    out.push_str("│ ");
    out.push_str(Theme::reset());

    let used = match &trigger.content {
        TriggerContent::Placeholder(text) => {
            out.push_str(&Theme::fg(&theme.colors.placeholder_fg));
            out.push_str(text);
            width_of(text)
        }
        TriggerContent::Value(text) => {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(text);
            width_of(text)
        }
        TriggerContent::Badges { badges, overflow } => {
            render_badges(out, badges, *overflow, content_col, content_width, theme)
        }
    };

    out.push_str(Theme::reset());
    out.push_str(&" ".repeat(content_width.saturating_sub(used)));
    out.push_str(&Theme::fg(border));
    out.push(' ');
    out.push(if trigger.expanded { '▴' } else { '▾' });
    out.push_str(" │");

    position_cursor(out, trigger.line + 2, frame.col);
    out.push_str(&format!("└{}┘", "─".repeat(inner)));
    out.push_str(Theme::reset());

    trigger.line + 3
}

/// Appends badges and the `+N` overflow marker. Returns the columns used.
fn render_badges(
    out: &mut String,
    badges: &[BadgeInfo],
    overflow: usize,
    content_col: usize,
    content_width: usize,
    theme: &Theme,
) -> usize {
    let mut x = content_col;

    for badge in badges {
        out.push_str(&" ".repeat(badge.col.saturating_sub(x)));
        out.push_str(&Theme::bg(&theme.colors.badge_bg));
        out.push_str(&Theme::fg(&theme.colors.badge_fg));
        out.push('[');
        out.push_str(&badge.display);
        out.push(' ');
        out.push_str(&Theme::fg(&theme.colors.badge_remove_fg));
        out.push('×');
        out.push_str(&Theme::fg(&theme.colors.badge_fg));
        out.push(']');
        out.push_str(Theme::reset());
        x = badge.col + width_of(&badge.display) + 4;
    }

    if overflow > 0 {
        let room = (content_col + content_width).saturating_sub(x);
        let marker = truncate(&format!(" +{overflow}"), room);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&marker);
        x += width_of(&marker);
    }

    x - content_col
}

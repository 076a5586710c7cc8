//! Shared rendering utilities.
//!
//! Components build each frame into a `String` buffer instead of printing
//! directly, so a frame can be inspected in tests and written to stdout in
//! one go. Widths are terminal cells as reported by `unicode-width`, so wide
//! CJK and emoji characters count as two. Highlight ranges are character
//! indices.
//!
//! # Example
//!
//! ```
//! use zelect::ui::helpers::{push_highlighted, truncate};
//! use zelect::ui::Theme;
//!
//! assert_eq!(truncate("Framer Motion", 7), "Framer…");
//! assert_eq!(truncate("日本語", 4), "日…");
//!
//! let mut out = String::new();
//! push_highlighted(&mut out, "Figma", &[(0, 2)], &Theme::default(), "#cdd6f4");
//! assert!(out.contains("Fi"));
//! assert!(out.ends_with("gma"));
//! ```

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Appends a cursor move to a zero-based pane position.
///
/// ANSI coordinates are 1-indexed, the conversion happens here so callers
/// can use view model lines and columns unchanged.
pub fn position_cursor(out: &mut String, line: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{};{}H", line + 1, col + 1));
}

/// Shortens `text` to at most `max` cells, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    // one cell for the ellipsis
    let target = max - 1;
    let mut cut = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            break;
        }
        cut.push(c);
        used += w;
    }
    cut.push('…');
    cut
}

/// Keeps the end of `text` that fits in `max` cells.
#[must_use]
pub fn tail(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

/// Terminal cell width of `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Restricts highlight ranges to the first `visible` characters.
///
/// Used after [`truncate`] so a match past the cut never lights up the `…`.
#[must_use]
pub fn clip_ranges(ranges: &[(usize, usize)], visible: usize) -> Vec<(usize, usize)> {
    ranges
        .iter()
        .filter(|&&(start, _)| start < visible)
        .map(|&(start, end)| (start, end.min(visible)))
        .collect()
}

/// Appends text with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Outside the ranges text is drawn in `base_fg`; after each
/// highlight the base color is restored.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) {
    out.push_str(&Theme::fg(base_fg));
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Figma", 5), "Figma");
        assert_eq!(truncate("Figma", 4), "Fig…");
        assert_eq!(truncate("Ünïcödé", 3), "Ün…");
        assert_eq!(truncate("Figma", 0), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn wide_characters_take_two_cells() {
        assert_eq!(width_of("日本語"), 6);
        assert_eq!(width_of("Figma"), 5);
        assert_eq!(truncate("日本語", 6), "日本語");
        // a wide char that would overflow is dropped, not split
        assert_eq!(truncate("日本語", 5), "日本…");
        assert_eq!(width_of(&truncate("日本語", 5)), 5);
    }

    #[test]
    fn tail_keeps_the_end_within_width() {
        assert_eq!(tail("framer", 3), "mer");
        assert_eq!(tail("日本語", 5), "本語");
        assert_eq!(tail("ab", 10), "ab");
    }

    #[test]
    fn ranges_are_clipped_to_visible_chars() {
        assert_eq!(clip_ranges(&[(0, 2), (4, 9), (12, 14)], 6), vec![(0, 2), (4, 6)]);
        assert!(clip_ranges(&[(6, 8)], 6).is_empty());
    }

    #[test]
    fn cursor_positions_are_one_based() {
        let mut out = String::new();
        position_cursor(&mut out, 0, 0);
        assert_eq!(out, "\u{1b}[1;1H");
    }

    #[test]
    fn highlight_keeps_all_text() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Framer", &[(1, 3), (4, 99)], &theme, &theme.colors.text_normal);

        let plain: String = strip_ansi(&out);
        assert_eq!(plain, "Framer");
    }

    fn strip_ansi(s: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match c {
                '\u{1b}' => in_escape = true,
                'm' | 'H' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => plain.push(c),
            }
        }
        plain
    }
}

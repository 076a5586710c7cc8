//! Filter text matching and match highlighting.
//!
//! [`ChoiceFilter`] decides which choice labels stay visible for the current
//! filter text and which character ranges of a label to highlight. Ranges are
//! `(start, end)` character indices with an exclusive end.

use super::modes::FilterMode;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Matcher built from a filter mode and the current filter text.
pub struct ChoiceFilter<'q> {
    query: &'q str,
    fuzzy: Option<SkimMatcherV2>,
}

impl<'q> ChoiceFilter<'q> {
    #[must_use]
    pub fn new(mode: FilterMode, query: &'q str) -> Self {
        let fuzzy = match mode {
            FilterMode::Fuzzy if !query.is_empty() => Some(SkimMatcherV2::default().ignore_case()),
            _ => None,
        };
        Self { query, fuzzy }
    }

    /// Returns `true` if the label passes the filter. Empty text matches all.
    #[must_use]
    pub fn matches(&self, display: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }

        match &self.fuzzy {
            Some(matcher) => matcher.fuzzy_match(display, self.query).is_some(),
            None => substring_range(display, self.query).is_some(),
        }
    }

    /// Character ranges of `display` matched by the filter text.
    #[must_use]
    pub fn highlight(&self, display: &str) -> Vec<(usize, usize)> {
        if self.query.is_empty() {
            return vec![];
        }

        match &self.fuzzy {
            Some(matcher) => matcher
                .fuzzy_indices(display, self.query)
                .map_or_else(Vec::new, |(_score, indices)| coalesce(&indices)),
            None => substring_range(display, self.query).into_iter().collect(),
        }
    }
}

/// Finds the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Comparison is per character, so the returned range is in character
/// indices of the original `haystack` even when lowercasing would change its
/// byte length.
#[must_use]
pub fn substring_range(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let hay: Vec<char> = haystack.chars().collect();
    let pat: Vec<char> = needle.chars().collect();

    if pat.is_empty() {
        return Some((0, 0));
    }
    if pat.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - pat.len())
        .find(|&start| {
            hay[start..start + pat.len()]
                .iter()
                .zip(&pat)
                .all(|(a, b)| chars_eq_ignore_case(*a, *b))
        })
        .map(|start| (start, start + pat.len()))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Merges sorted match indices into contiguous `(start, end)` runs.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substring_is_case_insensitive() {
        assert_eq!(substring_range("InVision Studio", "STU"), Some((9, 12)));
        assert_eq!(substring_range("Figma", "f"), Some((0, 1)));
        assert_eq!(substring_range("Sketch", "f"), None);
    }

    #[test]
    fn substring_uses_char_indices() {
        assert_eq!(substring_range("Ünïcode", "ïc"), Some((2, 4)));
    }

    #[test]
    fn empty_query_matches_everything_without_highlight() {
        let filter = ChoiceFilter::new(FilterMode::Substring, "");
        assert!(filter.matches("anything"));
        assert!(filter.highlight("anything").is_empty());
    }

    #[test]
    fn fuzzy_matches_scattered_letters() {
        let filter = ChoiceFilter::new(FilterMode::Fuzzy, "axd");
        assert!(filter.matches("Adobe XD"));
        assert!(!ChoiceFilter::new(FilterMode::Substring, "axd").matches("Adobe XD"));
    }

    #[test]
    fn coalesce_groups_runs() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }
}

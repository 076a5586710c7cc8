//! Choice model and the ordered choice set a menu is built from.
//!
//! A [`ChoiceSet`] is supplied once by the embedding configuration and never
//! mutated afterwards. The controller only reads and filters it.

use super::error::{Result, ZelectError};
use serde::{Deserialize, Serialize};

/// One selectable item with a stable id and a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Unique, stable identifier. Selection membership is keyed by this.
    pub id: String,
    /// Label shown in the list, the trigger and badges.
    pub display: String,
}

impl Choice {
    /// Creates a choice from an id and a display label.
    #[must_use]
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
        }
    }

    /// Creates a choice whose id is derived from its label.
    ///
    /// The id is the lowercased label with every run of non-alphanumeric
    /// characters collapsed into a single `-`.
    ///
    /// ```
    /// use zelect::domain::Choice;
    ///
    /// let choice = Choice::from_display("InVision Studio");
    /// assert_eq!(choice.id, "invision-studio");
    /// assert_eq!(choice.display, "InVision Studio");
    /// ```
    #[must_use]
    pub fn from_display(display: impl Into<String>) -> Self {
        let display = display.into();
        Self {
            id: slugify(&display),
            display,
        }
    }
}

fn slugify(display: &str) -> String {
    let mut slug = String::with_capacity(display.len());
    let mut pending_dash = false;

    for c in display.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Ordered, immutable sequence of choices.
///
/// Ids are unique: when constructed from a list containing the same id twice,
/// the first occurrence wins and later ones are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    choices: Vec<Choice>,
}

impl ChoiceSet {
    /// Builds a choice set, keeping the first choice for each id.
    #[must_use]
    pub fn new(choices: Vec<Choice>) -> Self {
        let mut seen = std::collections::HashSet::with_capacity(choices.len());
        let total = choices.len();

        let choices: Vec<Choice> = choices
            .into_iter()
            .filter(|choice| seen.insert(choice.id.clone()))
            .collect();

        if choices.len() != total {
            tracing::debug!(
                dropped = total - choices.len(),
                "dropped choices with duplicate ids"
            );
        }

        Self { choices }
    }

    /// Parses a choice set from a plugin configuration value.
    ///
    /// Two formats are accepted:
    ///
    /// - a JSON array of `{"id": ..., "display": ...}` objects
    /// - a comma-separated list where each entry is either `id:Display` or
    ///   just `Display` (the id is then derived from the label)
    ///
    /// Empty entries are skipped, so an empty string yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`ZelectError::Config`] if the value is valid JSON but not an
    /// array of choices, or if a `id:Display` entry has an empty id or label.
    /// Text that is not JSON at all, such as `[Beta] Tool, Figma`, is read as
    /// a comma list.
    ///
    /// ```
    /// use zelect::domain::ChoiceSet;
    ///
    /// let set = ChoiceSet::parse("framer:Framer, Adobe XD")?;
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.find("adobe-xd").map(|c| c.display.as_str()), Some("Adobe XD"));
    /// # Ok::<(), zelect::ZelectError>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.starts_with('[') {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
                let choices: Vec<Choice> = serde_json::from_value(value)
                    .map_err(|e| ZelectError::Config(format!("invalid choices JSON: {e}")))?;
                return Ok(Self::new(choices));
            }
        }

        let choices = trimmed
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((id, display)) => {
                    let (id, display) = (id.trim(), display.trim());
                    if id.is_empty() || display.is_empty() {
                        Err(ZelectError::Config(format!("invalid choice entry: {entry}")))
                    } else {
                        Ok(Choice::new(id, display))
                    }
                }
                None => Ok(Choice::from_display(entry)),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(choices))
    }

    /// Number of choices in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns `true` if the set has no choices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Returns the choice at `index` in original order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Looks up a choice by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Iterates choices in original order.
    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }
}

impl<'a> IntoIterator for &'a ChoiceSet {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Choice> for ChoiceSet {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

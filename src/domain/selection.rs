//! Selection state for single and multi-select menus.
//!
//! Multi selection is an [`IndexMap`] keyed by choice id: membership checks
//! are O(1) and iteration yields choices in the order they were selected,
//! which is the order badges are shown in.

use super::choice::Choice;
use indexmap::IndexMap;

/// The chosen value (single mode) or values (multi mode) of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// At most one choice.
    Single(Option<Choice>),
    /// Any number of distinct choices in selection order.
    Multi(IndexMap<String, Choice>),
}

impl Selection {
    /// An empty single selection.
    #[must_use]
    pub const fn single() -> Self {
        Self::Single(None)
    }

    /// An empty multi selection.
    #[must_use]
    pub fn multi() -> Self {
        Self::Multi(IndexMap::new())
    }

    /// Returns `true` if a choice with this id is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Self::Single(current) => current.as_ref().is_some_and(|c| c.id == id),
            Self::Multi(selected) => selected.contains_key(id),
        }
    }

    /// Number of selected choices.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(current) => usize::from(current.is_some()),
            Self::Multi(selected) => selected.len(),
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes `choice` the only selected choice.
    pub fn set_only(&mut self, choice: &Choice) {
        match self {
            Self::Single(current) => *current = Some(choice.clone()),
            Self::Multi(selected) => {
                selected.clear();
                selected.insert(choice.id.clone(), choice.clone());
            }
        }
    }

    /// Flips membership of `choice` and returns whether it is now selected.
    ///
    /// Newly selected choices go to the end of the selection order. In single
    /// mode toggling the current value clears it; toggling another value
    /// replaces it.
    pub fn toggle(&mut self, choice: &Choice) -> bool {
        if self.contains(&choice.id) {
            self.remove(&choice.id);
            false
        } else {
            match self {
                Self::Single(current) => *current = Some(choice.clone()),
                Self::Multi(selected) => {
                    selected.insert(choice.id.clone(), choice.clone());
                }
            }
            true
        }
    }

    /// Removes the choice with this id. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        match self {
            Self::Single(current) => {
                if current.as_ref().is_some_and(|c| c.id == id) {
                    *current = None;
                    true
                } else {
                    false
                }
            }
            Self::Multi(selected) => selected.shift_remove(id).is_some(),
        }
    }

    /// Iterates selected choices in selection order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Choice> + '_> {
        match self {
            Self::Single(current) => Box::new(current.iter()),
            Self::Multi(selected) => Box::new(selected.values()),
        }
    }

    /// Ids of the selected choices in selection order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|c| c.id.as_str()).collect()
    }
}

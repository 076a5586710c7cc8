//! The selectable list controller and its view model computation.
//!
//! [`AppState`] owns the immutable [`ChoiceSet`] plus everything that changes
//! while the menu is used: the selection, the filter text, the open flag, the
//! keyboard cursor, the pointer subscription and the last rendered layout.
//!
//! # Invariants
//!
//! - A choice is selected iff its id is in `selection`.
//! - `visible` always equals the choice set filtered by `filter_text`, in
//!   original order. Filtering never touches the selection.
//! - `cursor` is a valid index into `visible` whenever `visible` is non-empty.
//!
//! # Example
//!
//! ```
//! use zelect::app::{AppState, SelectMode};
//! use zelect::domain::{Choice, ChoiceSet};
//! use zelect::ui::Theme;
//!
//! let choices = ChoiceSet::new(vec![
//!     Choice::new("framer", "Framer"),
//!     Choice::new("figma", "Figma"),
//! ]);
//! let mut state = AppState::new(choices, SelectMode::Single, Theme::default());
//! state.toggle_dropdown();
//! state.select_choice(&Choice::new("figma", "Figma"));
//! assert!(state.is_selected("figma"));
//! assert!(!state.is_open());
//! ```

use super::filter::ChoiceFilter;
use super::lifecycle::PointerSubscription;
use super::modes::{FilterMode, InputMode, SelectMode};
use crate::domain::{Choice, ChoiceSet, Point, Rect, Selection};
use crate::ui::helpers::{truncate, width_of};
use crate::ui::layout::{HitMap, HitTarget};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BadgeInfo, DisplayItem, EmptyState, FooterInfo, Frame, LabelInfo, ListboxAttributes,
    MenuInfo, SearchBarInfo, TriggerContent, TriggerInfo, UIViewModel,
};

/// Columns kept free on each side of the widget.
const FRAME_MARGIN: usize = 2;

/// The widget never grows wider than this.
const MAX_FRAME_WIDTH: usize = 48;

/// Items shown at once in the open listbox.
const MAX_MENU_ITEMS: usize = 8;

/// Badge labels longer than this are truncated.
const MAX_BADGE_LABEL: usize = 16;

const LABEL_LINE: usize = 1;
const TRIGGER_LINE: usize = 2;

/// Default trigger text when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select one...";

/// Selectable list controller state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Caller-supplied choices, never mutated.
    pub choices: ChoiceSet,

    /// Single or multi selection semantics.
    pub mode: SelectMode,

    /// How filter text is matched.
    pub filter_mode: FilterMode,

    /// Text shown above the trigger.
    pub label: String,

    /// Trigger text while the selection is empty.
    pub placeholder: String,

    /// Color scheme for rendering.
    pub theme: Theme,

    selection: Selection,
    filter_text: String,
    /// Indices into `choices` that pass the filter, in original order.
    visible: Vec<usize>,
    cursor: usize,
    open: bool,
    input_mode: InputMode,
    pointer: PointerSubscription,
    layout: Option<HitMap>,
}

impl AppState {
    /// Creates a closed menu with an empty selection and no filter.
    ///
    /// An empty choice set is valid and yields a menu that can open but has
    /// nothing to select.
    #[must_use]
    pub fn new(choices: ChoiceSet, mode: SelectMode, theme: Theme) -> Self {
        let visible = (0..choices.len()).collect();
        let selection = match mode {
            SelectMode::Single => Selection::single(),
            SelectMode::Multi => Selection::multi(),
        };

        Self {
            choices,
            mode,
            filter_mode: FilterMode::default(),
            label: mode.default_label().to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            theme,
            selection,
            filter_text: String::new(),
            visible,
            cursor: 0,
            open: false,
            input_mode: InputMode::Normal,
            pointer: PointerSubscription::default(),
            layout: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self.apply_filter();
        self
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pointer(&mut self) -> &mut PointerSubscription {
        &mut self.pointer
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.pointer.is_active()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Choices passing the filter, in original order.
    pub fn visible_choices(&self) -> impl Iterator<Item = &Choice> + '_ {
        self.visible.iter().filter_map(|&idx| self.choices.get(idx))
    }

    /// The choice under the keyboard cursor, if any are visible.
    #[must_use]
    pub fn highlighted_choice(&self) -> Option<&Choice> {
        self.visible
            .get(self.cursor)
            .and_then(|&idx| self.choices.get(idx))
    }

    /// Flips the open flag.
    ///
    /// Opening a multi-select menu puts input into search mode. Opening a
    /// single-select menu moves the cursor onto the current value if it is
    /// visible.
    pub fn toggle_dropdown(&mut self) {
        if self.open {
            self.close();
            return;
        }

        self.open = true;
        self.input_mode = match self.mode {
            SelectMode::Single => InputMode::Normal,
            SelectMode::Multi => InputMode::Search,
        };

        let current_pos = match self.mode {
            SelectMode::Single => self
                .selection
                .iter()
                .next()
                .and_then(|current| self.visible_position(&current.id)),
            SelectMode::Multi => None,
        };
        if let Some(pos) = current_pos {
            self.cursor = pos;
        }

        tracing::debug!(mode = ?self.mode, cursor = self.cursor, "dropdown opened");
    }

    fn close(&mut self) {
        if self.open {
            tracing::debug!("dropdown closed");
        }
        self.open = false;
        self.input_mode = InputMode::Normal;
    }

    /// Closes the menu if `point` lies outside the last rendered bounds.
    ///
    /// Returns `true` if the open flag changed. Before the first render there
    /// are no bounds, so every point counts as outside.
    pub fn on_outside_interaction(&mut self, point: Point) -> bool {
        if self.contains_point(point) {
            return false;
        }

        let was_open = self.open;
        self.close();
        was_open
    }

    /// Returns `true` if the point lies within the last rendered bounds.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.layout.as_ref().is_some_and(|layout| layout.contains(point))
    }

    /// Replaces the filter text and recomputes the visible items.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.apply_filter();
    }

    /// Appends one character to the filter text.
    pub fn push_filter_char(&mut self, c: char) {
        self.filter_text.push(c);
        self.apply_filter();
    }

    /// Removes the last character of the filter text. Returns `false` if it
    /// was already empty.
    pub fn pop_filter_char(&mut self) -> bool {
        let popped = self.filter_text.pop().is_some();
        if popped {
            self.apply_filter();
        }
        popped
    }

    fn apply_filter(&mut self) {
        let _span = tracing::debug_span!("apply_filter",
            total_choices = self.choices.len(),
            query_len = self.filter_text.len(),
            filter_mode = ?self.filter_mode
        )
        .entered();

        let filter = ChoiceFilter::new(self.filter_mode, &self.filter_text);
        self.visible = self
            .choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| filter.matches(&choice.display))
            .map(|(idx, _)| idx)
            .collect();

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }

        tracing::debug!(visible_count = self.visible.len(), "filter applied");
    }

    fn visible_position(&self, id: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|&idx| self.choices.get(idx).is_some_and(|c| c.id == id))
    }

    /// Selects a choice.
    ///
    /// Single mode replaces the value and closes the menu. Multi mode toggles
    /// membership and leaves the menu as it is.
    pub fn select_choice(&mut self, choice: &Choice) {
        match self.mode {
            SelectMode::Single => {
                self.selection.set_only(choice);
                self.close();
                tracing::debug!(choice_id = %choice.id, "choice selected");
            }
            SelectMode::Multi => {
                let now_selected = self.selection.toggle(choice);
                tracing::debug!(
                    choice_id = %choice.id,
                    selected = now_selected,
                    selected_count = self.selection.len(),
                    "choice toggled"
                );
            }
        }
    }

    /// Removes a choice from a multi selection.
    ///
    /// Never touches the open flag. Returns `false` if the choice was not
    /// selected or the menu is single-select.
    pub fn remove_choice(&mut self, choice: &Choice) -> bool {
        if self.mode != SelectMode::Multi {
            tracing::debug!(choice_id = %choice.id, "remove ignored in single mode");
            return false;
        }

        let removed = self.selection.remove(&choice.id);
        tracing::debug!(choice_id = %choice.id, removed = removed, "choice removed");
        removed
    }

    /// Selects the choice under the cursor. Returns `false` if none is visible.
    pub fn select_highlighted(&mut self) -> bool {
        let Some(choice) = self.highlighted_choice().cloned() else {
            return false;
        };
        self.select_choice(&choice);
        true
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.visible.len() - 1
        } else {
            self.cursor - 1
        };
    }

    /// Gives keyboard input to the search bar. Only meaningful while a
    /// multi-select menu is open.
    pub fn focus_search(&mut self) -> bool {
        if self.open && self.mode == SelectMode::Multi && self.input_mode != InputMode::Search {
            self.input_mode = InputMode::Search;
            return true;
        }
        false
    }

    /// Returns keyboard input to navigation. Returns `false` if search was
    /// not focused.
    pub fn blur_search(&mut self) -> bool {
        if self.input_mode == InputMode::Search {
            self.input_mode = InputMode::Normal;
            return true;
        }
        false
    }

    /// Stores the hit map of the frame that was just drawn.
    pub fn remember_layout(&mut self, layout: HitMap) {
        self.layout = Some(layout);
    }

    /// Resolves a pointer position against the last rendered frame.
    #[must_use]
    pub fn target_at(&self, point: Point) -> Option<&HitTarget> {
        self.layout.as_ref().and_then(|layout| layout.resolve(point))
    }

    /// Listbox attributes for the current state.
    #[must_use]
    pub fn listbox_attributes(&self) -> ListboxAttributes {
        ListboxAttributes {
            role: "listbox",
            labelled_by: "listbox-label",
            expanded: self.open,
            multiselectable: self.mode == SelectMode::Multi,
            active_descendant: if self.open {
                self.highlighted_choice().map(|c| c.id.clone())
            } else {
                None
            },
            selected: self.selection.iter().map(|c| c.id.clone()).collect(),
        }
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    ///
    /// # Layout Algorithm
    ///
    /// 1. Center a frame of at most `MAX_FRAME_WIDTH` columns inside the margins
    /// 2. Place label, trigger and (if open) the menu top to bottom
    /// 3. Window the visible items around the cursor so it stays on screen
    /// 4. Record every clickable part in the hit map
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let width = cols.saturating_sub(FRAME_MARGIN * 2).min(MAX_FRAME_WIDTH);
        let frame = Frame {
            col: FRAME_MARGIN,
            width,
        };

        let mut hit_map = HitMap::default();
        hit_map.include(Rect::new(LABEL_LINE, frame.col, 1, frame.width));
        hit_map.push(
            Rect::new(TRIGGER_LINE, frame.col, 3, frame.width),
            HitTarget::Trigger,
        );

        let content = self.compute_trigger_content(&frame, &mut hit_map);
        let menu = self
            .open
            .then(|| self.compute_menu(&frame, rows, &mut hit_map));

        UIViewModel {
            frame,
            label: LabelInfo {
                text: self.label.clone(),
                line: LABEL_LINE,
            },
            trigger: TriggerInfo {
                line: TRIGGER_LINE,
                content,
                expanded: self.open,
            },
            menu,
            footer: self.compute_footer(),
            listbox: self.listbox_attributes(),
            hit_map,
        }
    }

    /// Computes the trigger text or badges and registers badge remove buttons.
    fn compute_trigger_content(&self, frame: &Frame, hit_map: &mut HitMap) -> TriggerContent {
        // "│ " before, " ▾ │" after
        let content_col = frame.col + 2;
        let content_width = frame.width.saturating_sub(6);
        let content_line = TRIGGER_LINE + 1;

        if self.selection.is_empty() {
            return TriggerContent::Placeholder(truncate(&self.placeholder, content_width));
        }

        if self.mode == SelectMode::Single {
            let value = self
                .selection
                .iter()
                .next()
                .map(|c| truncate(&c.display, content_width))
                .unwrap_or_default();
            return TriggerContent::Value(value);
        }

        let limit = content_col + content_width;
        let total = self.selection.len();
        let mut badges = Vec::new();
        let mut overflow = 0;
        let mut x = content_col;

        for (i, choice) in self.selection.iter().enumerate() {
            let remaining = total - i - 1;
            let reserve = if remaining > 0 {
                format!(" +{remaining}").len()
            } else {
                0
            };
            let display = truncate(&choice.display, MAX_BADGE_LABEL);
            let badge_width = width_of(&display) + 4;
            let gap = usize::from(i > 0);

            if x + gap + badge_width + reserve > limit {
                overflow = total - i;
                break;
            }

            x += gap;
            let remove_col = x + width_of(&display) + 2;
            hit_map.push(
                Rect::new(content_line, remove_col, 1, 1),
                HitTarget::RemoveBadge(choice.id.clone()),
            );
            badges.push(BadgeInfo {
                id: choice.id.clone(),
                display,
                col: x,
                remove_col,
            });
            x += badge_width;
        }

        TriggerContent::Badges { badges, overflow }
    }

    /// Lays out the open menu below the trigger.
    fn compute_menu(&self, frame: &Frame, rows: usize, hit_map: &mut HitMap) -> MenuInfo {
        let line = TRIGGER_LINE + 3;
        let inner_col = frame.col + 1;
        let inner_width = frame.inner_width();

        let search_bar = (self.mode == SelectMode::Multi).then(|| SearchBarInfo {
            query: self.filter_text.clone(),
            focused: self.input_mode == InputMode::Search,
        });

        let items_line = if search_bar.is_some() {
            hit_map.push(Rect::new(line + 1, inner_col, 1, inner_width), HitTarget::SearchBar);
            // search row plus separator
            line + 3
        } else {
            line + 1
        };

        // bottom border, blank line, footer
        let available = rows
            .saturating_sub(items_line + 3)
            .clamp(1, MAX_MENU_ITEMS);

        let total = self.visible.len();
        let mut start = self.cursor.saturating_sub(available / 2);
        let end = (start + available).min(total);
        if end - start < available && total >= available {
            start = end.saturating_sub(available);
        }

        let filter = ChoiceFilter::new(self.filter_mode, &self.filter_text);
        let items: Vec<DisplayItem> = self.visible[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &idx)| {
                let choice = self.choices.get(idx)?;
                hit_map.push(
                    Rect::new(items_line + offset, inner_col, 1, inner_width),
                    HitTarget::Item(choice.id.clone()),
                );
                Some(DisplayItem {
                    id: choice.id.clone(),
                    display: choice.display.clone(),
                    is_selected: self.selection.contains(&choice.id),
                    is_highlighted: start + offset == self.cursor,
                    highlight_ranges: filter.highlight(&choice.display),
                })
            })
            .collect();

        let empty_state = if items.is_empty() {
            let message = if self.choices.is_empty() {
                "No choices available".to_string()
            } else {
                "No matches".to_string()
            };
            Some(EmptyState { message })
        } else {
            None
        };

        let bottom_line = items_line + items.len().max(1);
        hit_map.include(Rect::new(line, frame.col, bottom_line - line + 1, frame.width));

        MenuInfo {
            line,
            search_bar,
            items,
            empty_state,
            items_line,
            bottom_line,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.open, self.mode, self.input_mode) {
            (false, _, _) => "Enter/click: open  q: quit",
            (true, SelectMode::Single, _) => "j/k: navigate  Enter: select  Esc: close",
            (true, SelectMode::Multi, InputMode::Search) => {
                "Type to filter  ↑/↓: navigate  Enter: toggle  Ctrl+u: clear  Esc: close"
            }
            (true, SelectMode::Multi, InputMode::Normal) => {
                "/: search  j/k: navigate  Enter: toggle  Esc: close"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

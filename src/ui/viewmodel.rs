//! View model types representing one renderable frame of the menu.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They carry no behaviour, only display-ready data plus the
//! positions each part was laid out at. Line and column values are zero-based
//! pane coordinates, the same space as [`HitMap`].
//!
//! # Layout
//!
//! ```text
//!   Multi-Select                       ← label
//!   ┌──────────────────────────────┐
//!   │ [Sketch ×] [Figma ×]       ▴ │   ← trigger
//!   └──────────────────────────────┘
//!   ┌──────────────────────────────┐
//!   │ Search: f                    │   ← search bar (multi only)
//!   ├──────────────────────────────┤
//!   │   Framer                     │   ← listbox items
//!   │ ✓ Figma                      │
//!   └──────────────────────────────┘
//!
//!     ↑/↓: navigate  Enter: toggle  Esc: close   ← footer
//! ```

use super::layout::HitMap;

/// Complete view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Left edge and width shared by the label, trigger and menu boxes.
    pub frame: Frame,

    /// Label text above the trigger and the line it is drawn on.
    pub label: LabelInfo,

    /// The trigger button.
    pub trigger: TriggerInfo,

    /// The open menu, `None` while closed.
    pub menu: Option<MenuInfo>,

    /// Keybinding hints drawn on the last line.
    pub footer: FooterInfo,

    /// Listbox attributes reflecting open, cursor and selection state.
    pub listbox: ListboxAttributes,

    /// Clickable regions of this frame.
    pub hit_map: HitMap,
}

/// Horizontal placement of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub col: usize,
    pub width: usize,
}

impl Frame {
    /// Columns available between the left and right borders.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.width.saturating_sub(2)
    }
}

#[derive(Debug, Clone)]
pub struct LabelInfo {
    pub text: String,
    pub line: usize,
}

/// Trigger button state.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    /// First line of the 3-line trigger box.
    pub line: usize,
    pub content: TriggerContent,
    /// Whether the chevron points up (menu open).
    pub expanded: bool,
}

/// What the trigger shows between its borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerContent {
    /// Nothing is selected.
    Placeholder(String),
    /// Single-select value.
    Value(String),
    /// Multi-select badges, plus how many did not fit.
    Badges { badges: Vec<BadgeInfo>, overflow: usize },
}

/// One `[Display ×]` badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeInfo {
    pub id: String,
    /// Possibly truncated label.
    pub display: String,
    /// Column of the opening bracket.
    pub col: usize,
    /// Column of the `×` remove button.
    pub remove_col: usize,
}

/// The open dropdown.
#[derive(Debug, Clone)]
pub struct MenuInfo {
    /// Line of the top border.
    pub line: usize,
    /// Search input, shown in multi mode.
    pub search_bar: Option<SearchBarInfo>,
    /// Windowed visible items.
    pub items: Vec<DisplayItem>,
    /// Shown instead of items when nothing is visible.
    pub empty_state: Option<EmptyState>,
    /// Line of the first item (or of the empty state).
    pub items_line: usize,
    /// Line of the bottom border.
    pub bottom_line: usize,
}

/// One visible choice in the listbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: String,
    pub display: String,
    /// Whether the choice is part of the selection.
    pub is_selected: bool,
    /// Whether the keyboard cursor is on this item.
    pub is_highlighted: bool,
    /// Character ranges matched by the filter text.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search input state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether typed characters currently go to the query.
    pub focused: bool,
}

/// Message shown when the listbox has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Listbox attributes in the spirit of the ARIA listbox pattern.
///
/// A terminal has no accessibility tree, but these values are what a screen
/// reader binding or a test needs to know about the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxAttributes {
    /// Always `"listbox"`.
    pub role: &'static str,
    /// Id of the label element.
    pub labelled_by: &'static str,
    /// Whether the menu is open.
    pub expanded: bool,
    /// Whether more than one option may be selected.
    pub multiselectable: bool,
    /// Element id of the highlighted option while open.
    pub active_descendant: Option<String>,
    /// Ids of selected options in selection order.
    pub selected: Vec<String>,
}

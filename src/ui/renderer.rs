//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: turn `AppState` into a `UIViewModel`
//! 2. **Component Rendering**: stack label, trigger, menu and footer into a
//!    frame buffer
//!
//! After the frame is written, its hit map is handed back to the state so
//! the next pointer event resolves against what is actually on screen.
//!
//! # Example
//!
//! ```
//! use zelect::app::{AppState, SelectMode};
//! use zelect::domain::{Choice, ChoiceSet};
//! use zelect::ui::{render_viewmodel, Theme};
//!
//! let choices = ChoiceSet::new(vec![Choice::new("figma", "Figma")]);
//! let state = AppState::new(choices, SelectMode::Single, Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! let frame = render_viewmodel(&vm, &state.theme, 24, 80);
//! assert!(frame.contains("Select one..."));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout and records its hit map.
pub fn render(state: &mut AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let frame = render_viewmodel(&viewmodel, &state.theme, rows, cols);

    print!("{frame}");
    state.remember_layout(viewmodel.hit_map);
}

/// Renders a view model into a string of ANSI-positioned output.
///
/// The footer sits on the last line of the pane unless the widget already
/// reaches it, in which case it is left out.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();

    components::render_label(&mut out, &vm.label, &vm.frame, theme);
    let mut line = components::render_trigger(&mut out, &vm.trigger, &vm.frame, theme);

    if let Some(menu) = &vm.menu {
        line = components::render_menu(&mut out, menu, &vm.frame, theme);
    }

    let footer_line = rows.saturating_sub(1);
    if footer_line >= line {
        components::render_footer(&mut out, footer_line, &vm.footer, theme, cols);
    }

    out
}

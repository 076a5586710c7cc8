//! Controller behaviour driven through `handle_event`.

use pretty_assertions::assert_eq;
use zelect::app::{handle_event, AppState, Event, FilterMode, InputMode, SelectMode};
use zelect::domain::{Choice, ChoiceSet, Point};
use zelect::ui::{Theme, TriggerContent};
use zelect::ZelectError;

fn tools() -> ChoiceSet {
    ChoiceSet::new(vec![
        Choice::new("framer", "Framer"),
        Choice::new("sketch", "Sketch"),
        Choice::new("figma", "Figma"),
    ])
}

fn state(mode: SelectMode) -> AppState {
    AppState::new(tools(), mode, Theme::default())
}

fn send(state: &mut AppState, event: Event) -> bool {
    handle_event(state, &event).unwrap().0
}

fn select(state: &mut AppState, id: &str) {
    send(state, Event::SelectChoice { id: id.to_string() });
}

fn visible(state: &AppState) -> Vec<&str> {
    state.visible_choices().map(|c| c.display.as_str()).collect()
}

#[test]
fn design_tools_walkthrough() {
    let mut state = state(SelectMode::Multi);
    send(&mut state, Event::ToggleDropdown);

    select(&mut state, "sketch");
    assert_eq!(state.selection().ids(), vec!["sketch"]);

    select(&mut state, "figma");
    assert_eq!(state.selection().ids(), vec!["sketch", "figma"]);

    state.set_filter_text("f");
    assert_eq!(visible(&state), vec!["Framer", "Figma"]);
    assert_eq!(state.selection().ids(), vec!["sketch", "figma"]);

    send(&mut state, Event::RemoveChoice { id: "sketch".into() });
    assert_eq!(state.selection().ids(), vec!["figma"]);
    assert!(state.is_open());
}

#[test]
fn multi_toggle_parity() {
    let mut state = state(SelectMode::Multi);

    for round in 1..=5 {
        select(&mut state, "framer");
        assert_eq!(state.is_selected("framer"), round % 2 == 1, "after {round} selections");
    }

    send(&mut state, Event::RemoveChoice { id: "framer".into() });
    assert!(!state.is_selected("framer"));
    select(&mut state, "framer");
    assert!(state.is_selected("framer"));
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Select(&'static str),
    Remove(&'static str),
    Filter(&'static str),
}

const IDS: [&str; 3] = ["framer", "sketch", "figma"];

fn all_steps() -> Vec<Step> {
    let mut steps: Vec<Step> = IDS.iter().map(|&id| Step::Select(id)).collect();
    steps.extend(IDS.iter().map(|&id| Step::Remove(id)));
    steps.extend(["f", "zzz", ""].map(Step::Filter));
    steps
}

/// Every sequence of `len` steps, as indices into `all_steps()`.
fn sequences(len: u32, steps: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..steps.pow(len)).map(move |mut n| {
        (0..len)
            .map(|_| {
                let idx = n % steps;
                n /= steps;
                idx
            })
            .collect()
    })
}

#[test]
fn mixed_sequences_follow_toggle_parity() {
    let steps = all_steps();

    for len in 0..=4 {
        for sequence in sequences(len, steps.len()) {
            let mut state = state(SelectMode::Multi);
            // selections since the last removal, per id
            let mut counts = [0usize; 3];
            let mut expected: Vec<&str> = Vec::new();

            for &idx in &sequence {
                let step = steps[idx];
                let before: Vec<String> = state.selection().ids().iter().map(|s| s.to_string()).collect();

                match step {
                    Step::Select(id) => {
                        select(&mut state, id);
                        let slot = IDS.iter().position(|&x| x == id).unwrap();
                        counts[slot] += 1;
                        if let Some(pos) = expected.iter().position(|&x| x == id) {
                            expected.remove(pos);
                        } else {
                            expected.push(id);
                        }
                    }
                    Step::Remove(id) => {
                        send(&mut state, Event::RemoveChoice { id: id.to_string() });
                        let slot = IDS.iter().position(|&x| x == id).unwrap();
                        counts[slot] = 0;
                        expected.retain(|&x| x != id);
                    }
                    Step::Filter(text) => {
                        state.set_filter_text(text);
                        assert_eq!(state.selection().ids(), before, "filter changed selection: {sequence:?}");
                    }
                }

                assert_eq!(state.selection().ids(), expected, "steps {sequence:?}");
                for (slot, id) in IDS.iter().enumerate() {
                    assert_eq!(
                        state.is_selected(id),
                        counts[slot] % 2 == 1,
                        "{id} after steps {sequence:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn multi_select_keeps_menu_open() {
    let mut state = state(SelectMode::Multi);
    send(&mut state, Event::ToggleDropdown);
    select(&mut state, "sketch");
    select(&mut state, "sketch");

    assert!(state.is_open());
    assert!(state.selection().is_empty());
}

#[test]
fn single_select_replaces_and_closes() {
    let mut state = state(SelectMode::Single);

    send(&mut state, Event::ToggleDropdown);
    select(&mut state, "framer");
    assert_eq!(state.selection().ids(), vec!["framer"]);
    assert!(!state.is_open());

    send(&mut state, Event::ToggleDropdown);
    select(&mut state, "figma");
    assert_eq!(state.selection().ids(), vec!["figma"]);
    assert!(!state.is_open());

    // selecting again while closed still leaves exactly one value
    select(&mut state, "figma");
    assert_eq!(state.selection().ids(), vec!["figma"]);
}

#[test]
fn reopening_single_select_highlights_current_value() {
    let mut state = state(SelectMode::Single);
    select(&mut state, "figma");

    send(&mut state, Event::ToggleDropdown);
    assert_eq!(state.highlighted_choice().map(|c| c.id.as_str()), Some("figma"));
}

#[test]
fn filtering_never_touches_selection() {
    let mut state = state(SelectMode::Multi);
    select(&mut state, "sketch");

    for text in ["", "f", "zzz", "SKETCH", "  "] {
        state.set_filter_text(text);
        assert_eq!(state.filter_text(), text);
        assert_eq!(state.selection().ids(), vec!["sketch"]);
    }
}

#[test]
fn filter_is_case_insensitive_substring_in_original_order() {
    let mut state = state(SelectMode::Multi);

    state.set_filter_text("FI");
    assert_eq!(visible(&state), vec!["Figma"]);

    state.set_filter_text("e");
    assert_eq!(visible(&state), vec!["Framer", "Sketch"]);

    state.set_filter_text("");
    assert_eq!(visible(&state), vec!["Framer", "Sketch", "Figma"]);
}

#[test]
fn fuzzy_filter_matches_subsequences() {
    let mut state = state(SelectMode::Multi).with_filter_mode(FilterMode::Fuzzy);

    state.set_filter_text("fgm");
    assert_eq!(visible(&state), vec!["Figma"]);
}

#[test]
fn filter_editing_events() {
    let mut state = state(SelectMode::Multi);
    send(&mut state, Event::ToggleDropdown);

    send(&mut state, Event::Char('s'));
    send(&mut state, Event::Char('k'));
    assert_eq!(visible(&state), vec!["Sketch"]);

    assert!(send(&mut state, Event::Backspace));
    assert_eq!(state.filter_text(), "s");

    assert!(send(&mut state, Event::ClearFilter));
    assert_eq!(state.filter_text(), "");
    assert!(!send(&mut state, Event::ClearFilter));
    assert!(!send(&mut state, Event::Backspace));
}

#[test]
fn removing_unselected_choice_is_noop() {
    let mut state = state(SelectMode::Multi);
    select(&mut state, "figma");

    let changed = send(&mut state, Event::RemoveChoice { id: "framer".into() });
    assert!(!changed);
    assert_eq!(state.selection().ids(), vec!["figma"]);
}

#[test]
fn remove_is_ignored_in_single_mode() {
    let mut state = state(SelectMode::Single);
    select(&mut state, "figma");

    send(&mut state, Event::RemoveChoice { id: "figma".into() });
    assert_eq!(state.selection().ids(), vec!["figma"]);
}

#[test]
fn unknown_choice_is_an_error() {
    let mut state = state(SelectMode::Multi);

    let result = handle_event(&mut state, &Event::SelectChoice { id: "xd".into() });
    assert!(matches!(result, Err(ZelectError::UnknownChoice(id)) if id == "xd"));
    assert!(state.selection().is_empty());
}

#[test]
fn outside_interaction_inside_bounds_keeps_menu_open() {
    let mut state = state(SelectMode::Multi);
    send(&mut state, Event::ToggleDropdown);
    let vm = state.compute_viewmodel(24, 80);
    state.remember_layout(vm.hit_map);

    // label line, inside the widget but not clickable
    assert!(!state.on_outside_interaction(Point::new(1, 3)));
    assert!(state.is_open());

    assert!(state.on_outside_interaction(Point::new(20, 70)));
    assert!(!state.is_open());

    // idempotent
    assert!(!state.on_outside_interaction(Point::new(20, 70)));
    assert!(!state.is_open());
}

#[test]
fn cursor_wraps_and_clamps_after_filtering() {
    let mut state = state(SelectMode::Single);
    send(&mut state, Event::ToggleDropdown);

    send(&mut state, Event::CursorUp);
    assert_eq!(state.highlighted_choice().map(|c| c.id.as_str()), Some("figma"));
    send(&mut state, Event::CursorDown);
    assert_eq!(state.highlighted_choice().map(|c| c.id.as_str()), Some("framer"));

    send(&mut state, Event::CursorUp);
    state.set_filter_text("sk");
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.highlighted_choice().map(|c| c.id.as_str()), Some("sketch"));

    assert!(send(&mut state, Event::SelectHighlighted));
    assert_eq!(state.selection().ids(), vec!["sketch"]);
}

#[test]
fn search_focus_follows_mode() {
    let mut state = state(SelectMode::Multi);
    send(&mut state, Event::ToggleDropdown);
    assert_eq!(state.input_mode(), InputMode::Search);

    assert!(send(&mut state, Event::BlurSearch));
    assert_eq!(state.input_mode(), InputMode::Normal);
    assert!(send(&mut state, Event::FocusSearch));

    send(&mut state, Event::ToggleDropdown);
    assert_eq!(state.input_mode(), InputMode::Normal);

    let mut single = self::state(SelectMode::Single);
    send(&mut single, Event::ToggleDropdown);
    assert!(!send(&mut single, Event::FocusSearch));
}

#[test]
fn empty_choice_set_opens_to_empty_state() {
    let mut state = AppState::new(ChoiceSet::default(), SelectMode::Multi, Theme::default());
    send(&mut state, Event::ToggleDropdown);

    assert!(!send(&mut state, Event::SelectHighlighted));
    send(&mut state, Event::CursorDown);

    let vm = state.compute_viewmodel(24, 80);
    let menu = vm.menu.expect("menu is open");
    assert!(menu.items.is_empty());
    assert_eq!(
        menu.empty_state.map(|e| e.message),
        Some("No choices available".to_string())
    );
}

#[test]
fn unmatched_filter_shows_no_matches() {
    let mut state = state(SelectMode::Multi);
    send(&mut state, Event::ToggleDropdown);
    state.set_filter_text("zzz");

    let menu = state.compute_viewmodel(24, 80).menu.expect("menu is open");
    assert_eq!(menu.empty_state.map(|e| e.message), Some("No matches".to_string()));
}

#[test]
fn trigger_content_tracks_selection() {
    let mut single = state(SelectMode::Single);
    assert_eq!(
        single.compute_viewmodel(24, 80).trigger.content,
        TriggerContent::Placeholder("Select one...".to_string())
    );
    select(&mut single, "sketch");
    assert_eq!(
        single.compute_viewmodel(24, 80).trigger.content,
        TriggerContent::Value("Sketch".to_string())
    );

    let mut multi = state(SelectMode::Multi);
    select(&mut multi, "figma");
    select(&mut multi, "framer");
    let TriggerContent::Badges { badges, overflow } = multi.compute_viewmodel(24, 80).trigger.content
    else {
        panic!("expected badges");
    };
    let labels: Vec<&str> = badges.iter().map(|b| b.display.as_str()).collect();
    assert_eq!(labels, vec!["Figma", "Framer"]);
    assert_eq!(overflow, 0);
}

#[test]
fn badges_overflow_on_narrow_panes() {
    let choices: ChoiceSet = (0..10)
        .map(|i| Choice::new(format!("c{i}"), format!("Choice {i}")))
        .collect();
    let mut state = AppState::new(choices, SelectMode::Multi, Theme::default());
    for i in 0..10 {
        select(&mut state, &format!("c{i}"));
    }

    let TriggerContent::Badges { badges, overflow } = state.compute_viewmodel(24, 40).trigger.content
    else {
        panic!("expected badges");
    };
    assert!(!badges.is_empty());
    assert_eq!(badges.len() + overflow, 10);
}

#[test]
fn listbox_attributes_reflect_state() {
    let mut state = state(SelectMode::Multi);
    let closed = state.listbox_attributes();
    assert_eq!(closed.role, "listbox");
    assert!(closed.multiselectable);
    assert!(!closed.expanded);
    assert_eq!(closed.active_descendant, None);

    send(&mut state, Event::ToggleDropdown);
    select(&mut state, "sketch");
    send(&mut state, Event::CursorDown);

    let open = state.listbox_attributes();
    assert!(open.expanded);
    assert_eq!(open.active_descendant.as_deref(), Some("sketch"));
    assert_eq!(open.selected, vec!["sketch".to_string()]);
}

#[test]
fn close_focus_hides_the_pane() {
    let mut state = state(SelectMode::Single);
    let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![zelect::Action::CloseFocus]);
}

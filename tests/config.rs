//! Plugin configuration parsing and initialization.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::io::Write;
use zelect::app::{FilterMode, SelectMode};
use zelect::domain::Choice;
use zelect::{initialize, Config};

fn config(pairs: &[(&str, &str)]) -> Config {
    let map: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_zellij(&map)
}

#[test]
fn defaults_without_configuration() {
    let config = config(&[]);
    assert!(config.choices.is_empty());
    assert_eq!(config.mode, SelectMode::Single);
    assert_eq!(config.filter_mode, FilterMode::Substring);

    let state = initialize(&config);
    assert_eq!(state.label, "Single Select");
    assert_eq!(state.placeholder, "Select one...");
    assert_eq!(state.theme.name, "catppuccin-mocha");
}

#[test]
fn parses_json_choices() {
    let config = config(&[(
        "choices",
        r#"[{"id": "framer", "display": "Framer"}, {"id": "figma", "display": "Figma"}]"#,
    )]);

    let choices: Vec<&Choice> = config.choices.iter().collect();
    assert_eq!(
        choices,
        vec![&Choice::new("framer", "Framer"), &Choice::new("figma", "Figma")]
    );
}

#[test]
fn parses_comma_list_choices() {
    let config = config(&[("choices", "framer:Framer, Sketch App ,figma:Figma")]);

    let ids: Vec<&str> = config.choices.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["framer", "sketch-app", "figma"]);
}

#[test]
fn malformed_choices_fall_back_to_empty() {
    assert!(config(&[("choices", "[{\"id\": 1}]")]).choices.is_empty());
    assert!(config(&[("choices", ":Nameless")]).choices.is_empty());
}

#[test]
fn bracketed_label_is_not_mistaken_for_json() {
    let config = config(&[("choices", "[Beta] Tool, Figma")]);

    let displays: Vec<&str> = config.choices.iter().map(|c| c.display.as_str()).collect();
    assert_eq!(displays, vec!["[Beta] Tool", "Figma"]);
}

#[test]
fn mode_label_placeholder_and_filter() {
    let config = config(&[
        ("mode", "MULTI"),
        ("label", "Design tools"),
        ("placeholder", "Pick some..."),
        ("filter", "fuzzy"),
    ]);
    assert_eq!(config.mode, SelectMode::Multi);
    assert_eq!(config.filter_mode, FilterMode::Fuzzy);

    let state = initialize(&config);
    assert_eq!(state.label, "Design tools");
    assert_eq!(state.placeholder, "Pick some...");
    assert_eq!(state.filter_mode, FilterMode::Fuzzy);
}

#[test]
fn unknown_values_fall_back() {
    let config = config(&[("mode", "triple"), ("filter", "regex"), ("label", "  ")]);
    assert_eq!(config.mode, SelectMode::Single);
    assert_eq!(config.filter_mode, FilterMode::Substring);
    assert_eq!(config.label, None);
}

#[test]
fn theme_selection() {
    assert_eq!(
        config(&[("theme", "catppuccin-latte")]).load_theme().name,
        "catppuccin-latte"
    );
    assert_eq!(config(&[("theme", "nope")]).load_theme().name, "catppuccin-mocha");
    assert_eq!(
        config(&[("theme_file", "/nonexistent/theme.toml")]).load_theme().name,
        "catppuccin-mocha"
    );
}

#[test]
fn theme_file_takes_precedence() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let contents = include_str!("../themes/catppuccin-latte.toml")
        .replace("name = \"catppuccin-latte\"", "name = \"from-file\"");
    file.write_all(contents.as_bytes()).unwrap();

    let path = file.path().to_string_lossy().to_string();
    let theme = config(&[("theme", "catppuccin-latte"), ("theme_file", path.as_str())]).load_theme();
    assert_eq!(theme.name, "from-file");
}

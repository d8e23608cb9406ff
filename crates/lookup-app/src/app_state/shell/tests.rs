use lookup_config::sources::default_sources;
use lookup_config::{SourceMap, SourceRow};

use super::*;

fn two_sources() -> SourceMap {
    SourceMap::from_rows([
        SourceRow::new("Wiktionary", "https://en.wiktionary.org/wiki/{word}"),
        SourceRow::new("Merriam", "https://www.merriam-webster.com/dictionary/%s"),
    ])
}

#[test]
fn first_source_is_selected_initially() {
    let state = ShellState::new(two_sources());
    assert_eq!(state.selected(), Some("Wiktionary"));
    assert_eq!(state.search_text(), "");
}

#[test]
fn empty_sources_fall_back_to_defaults() {
    let state = ShellState::new(SourceMap::default());
    assert_eq!(state.sources(), &default_sources());
    assert_eq!(state.selected(), Some("Google"));
}

#[test]
fn unknown_source_selection_is_ignored() {
    let mut state = ShellState::new(two_sources());
    assert!(!state.select("Oxford"));
    assert_eq!(state.selected(), Some("Wiktionary"));
    assert!(state.select("Merriam"));
    assert_eq!(state.selected(), Some("Merriam"));
}

#[test]
fn lookup_uses_selected_source() {
    let mut state = ShellState::new(two_sources());
    assert_eq!(
        state.prepare_lookup("  serendipity ", None).as_deref(),
        Some("https://en.wiktionary.org/wiki/serendipity")
    );
    assert_eq!(state.search_text(), "serendipity");
}

#[test]
fn lookup_with_source_switches_selection() {
    let mut state = ShellState::new(two_sources());
    assert_eq!(
        state.prepare_lookup("quay", Some("Merriam")).as_deref(),
        Some("https://www.merriam-webster.com/dictionary/quay")
    );
    assert_eq!(state.selected(), Some("Merriam"));
}

#[test]
fn lookup_with_unknown_source_keeps_selection() {
    let mut state = ShellState::new(two_sources());
    assert_eq!(
        state.prepare_lookup("quay", Some("Oxford")).as_deref(),
        Some("https://en.wiktionary.org/wiki/quay")
    );
}

#[test]
fn blank_word_is_ignored() {
    let mut state = ShellState::new(two_sources());
    state.prepare_lookup("cat", None);
    assert_eq!(state.prepare_lookup("   ", None), None);
    assert_eq!(state.search_text(), "cat");
}

#[test]
fn replacing_sources_keeps_surviving_selection() {
    let mut state = ShellState::new(two_sources());
    state.select("Merriam");
    state.replace_sources(SourceMap::from_rows([
        SourceRow::new("Oxford", "https://www.oed.com/search?q={word}"),
        SourceRow::new("Merriam", "https://www.merriam-webster.com/dictionary/{word}"),
    ]));
    assert_eq!(state.selected(), Some("Merriam"));
}

#[test]
fn replacing_sources_reselects_first_when_selection_vanishes() {
    let mut state = ShellState::new(two_sources());
    state.select("Merriam");
    state.replace_sources(SourceMap::from_rows([SourceRow::new(
        "Oxford",
        "https://www.oed.com/search?q={word}",
    )]));
    assert_eq!(state.selected(), Some("Oxford"));
}

#[test]
fn saving_no_rows_restores_defaults() {
    let mut state = ShellState::new(two_sources());
    state.replace_sources(SourceMap::from_rows([SourceRow::new("  ", "https://x.example/")]));
    assert_eq!(state.sources(), &default_sources());
    assert_eq!(state.selected(), Some("Google"));
}

#[test]
fn sources_message_is_ordered() {
    let mut state = ShellState::new(two_sources());
    state.select("Merriam");
    let json = serde_json::to_value(state.sources_message()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "sources": [
                {"name": "Wiktionary", "template": "https://en.wiktionary.org/wiki/{word}"},
                {"name": "Merriam", "template": "https://www.merriam-webster.com/dictionary/%s"},
            ],
            "selected": "Merriam",
        })
    );
}

#[test]
fn lookup_request_source_is_optional() {
    let req: LookupRequest = serde_json::from_str(r#"{"word":"hello"}"#).unwrap();
    assert_eq!(
        req,
        LookupRequest {
            word: "hello".into(),
            source: None
        }
    );
}

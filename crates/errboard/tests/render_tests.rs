//! Rendering of the panel into a test terminal.

use errboard::panel::PanelState;
use errboard::tui::draw_ui;
use errboard::tui::render::{EMPTY_MESSAGE, LOADING_MESSAGE, LOAD_FAILED_MESSAGE};
use errboard_common::{decode_groups, FetchError};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const SCENARIO: &str = r#"[
  {"_id":1,"count":5,"representative":{"command":"build","error":"xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"},"errors":[]},
  {"_id":2,"count":9,"representative":{"command":"test","error":"y"},"errors":[]}
]"#;

fn render(state: &PanelState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw_ui(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn settled(result: Result<Vec<errboard_common::ErrorGroup>, FetchError>) -> PanelState {
    let mut state = PanelState::new("http://localhost:3001");
    let generation = state.begin_mount();
    state.apply_fetch(generation, result);
    state
}

fn find_row(screen: &[String], needle: &str) -> Option<usize> {
    screen.iter().position(|line| line.contains(needle))
}

#[test]
fn test_loading_state_rendered() {
    let mut state = PanelState::new("http://localhost:3001");
    state.begin_mount();
    let screen = render(&state, 100, 20);
    assert!(find_row(&screen, LOADING_MESSAGE).is_some());
}

#[test]
fn test_ranked_rows_and_truncated_summary() {
    let groups = decode_groups(SCENARIO.as_bytes()).unwrap();
    let state = settled(Ok(groups));
    let screen = render(&state, 100, 20);

    let test_row = find_row(&screen, "test").expect("test row missing");
    let build_row = find_row(&screen, "build").expect("build row missing");
    assert!(test_row < build_row, "higher count must come first");

    let truncated = format!("{}...", "x".repeat(65));
    assert!(screen.iter().any(|l| l.contains(&truncated)));
    assert!(!screen.iter().any(|l| l.contains(&"x".repeat(66))));

    assert!(screen[test_row].contains(" 9"));
}

#[test]
fn test_empty_result_shows_placeholder() {
    let state = settled(Ok(vec![]));
    let screen = render(&state, 100, 20);
    assert!(find_row(&screen, EMPTY_MESSAGE).is_some());
    assert!(find_row(&screen, LOAD_FAILED_MESSAGE).is_none());
}

#[test]
fn test_failure_shows_inline_message() {
    let state = settled(Err(FetchError::Decode("expected a JSON array of error groups, got an object".into())));
    let screen = render(&state, 100, 20);
    assert!(find_row(&screen, LOAD_FAILED_MESSAGE).is_some());
    assert!(find_row(&screen, EMPTY_MESSAGE).is_none());
}

#[test]
fn test_popup_shows_full_error() {
    let groups = decode_groups(SCENARIO.as_bytes()).unwrap();
    let mut state = settled(Ok(groups));
    // ranked: id 2 first, id 1 second
    state.select_row(1);

    let screen = render(&state, 120, 40);
    assert!(find_row(&screen, "Error group #1").is_some());
    assert!(screen.iter().any(|l| l.contains(&"x".repeat(80))));
}

#[test]
fn test_popup_gone_after_dismiss() {
    let groups = decode_groups(SCENARIO.as_bytes()).unwrap();
    let mut state = settled(Ok(groups));
    state.select_row(0);
    state.dismiss_popup(errboard::panel::DismissReason::CloseAction);

    let screen = render(&state, 120, 40);
    assert!(find_row(&screen, "Error group #").is_none());
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let groups = decode_groups(SCENARIO.as_bytes()).unwrap();
    let mut state = settled(Ok(groups));
    state.select_row(0);
    state.show_help = true;
    let _ = render(&state, 10, 3);
}

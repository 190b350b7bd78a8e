//! Input - keyboard and mouse handling
//!
//! Pure with respect to the terminal: takes an event and the current frame
//! area, mutates panel state, and tells the loop whether to keep going.

use crate::panel::{DismissReason, PanelState};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use super::layout;

/// Lines moved per PgUp/PgDn inside the popup
const POPUP_PAGE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle_event(state: &mut PanelState, event: &Event, frame_area: Rect) -> Flow {
    match event {
        Event::Key(key) => handle_key(state, key, frame_area),
        Event::Mouse(mouse) => {
            handle_mouse(state, mouse, frame_area);
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}

fn handle_key(state: &mut PanelState, key: &KeyEvent, frame_area: Rect) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    if state.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return Flow::Continue;
    }

    if state.popup_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                state.dismiss_popup(DismissReason::CloseAction)
            }
            KeyCode::Up | KeyCode::Char('k') => state.scroll_popup(-1),
            KeyCode::Down | KeyCode::Char('j') => state.scroll_popup(1),
            KeyCode::PageUp => state.scroll_popup(-POPUP_PAGE),
            KeyCode::PageDown => state.scroll_popup(POPUP_PAGE),
            KeyCode::F(1) => state.show_help = true,
            _ => {}
        }
        return Flow::Continue;
    }

    let page = layout::visible_rows(layout::compute_layout(frame_area).table).max(1) as isize;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1),
        KeyCode::PageUp => state.move_cursor(-page),
        KeyCode::PageDown => state.move_cursor(page),
        KeyCode::Home | KeyCode::Char('g') => state.cursor_to_start(),
        KeyCode::End | KeyCode::Char('G') => state.cursor_to_end(),
        KeyCode::Enter => state.select_highlighted(),
        KeyCode::F(1) => state.show_help = true,
        _ => {}
    }
    Flow::Continue
}

fn handle_mouse(state: &mut PanelState, mouse: &MouseEvent, frame_area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.show_help {
                state.show_help = false;
                return;
            }
            if state.popup_open() {
                let popup = layout::popup_area(frame_area);
                if !layout::contains(popup, mouse.column, mouse.row) {
                    state.dismiss_popup(DismissReason::OutsideClick);
                }
                return;
            }
            let table = layout::compute_layout(frame_area).table;
            if let Some(index) = layout::row_at(
                table,
                state.table_offset,
                state.rows().len(),
                mouse.column,
                mouse.row,
            ) {
                state.select_row(index);
            }
        }
        MouseEventKind::ScrollUp => {
            if state.popup_open() {
                state.scroll_popup(-3);
            } else {
                state.move_cursor(-1);
            }
        }
        MouseEventKind::ScrollDown => {
            if state.popup_open() {
                state.scroll_popup(3);
            } else {
                state.move_cursor(1);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errboard_common::{ErrorGroup, Occurrence};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    fn loaded_state(n: i64) -> PanelState {
        let mut state = PanelState::new("http://x");
        let generation = state.begin_mount();
        let groups = (1..=n)
            .map(|id| ErrorGroup {
                id,
                count: id,
                representative: Occurrence {
                    command: format!("cmd {}", id),
                    error: "failed".into(),
                },
                occurrences: vec![],
            })
            .collect();
        state.apply_fetch(generation, Ok(groups));
        state
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_enter_opens_highlighted_group() {
        let mut state = loaded_state(3);
        handle_event(&mut state, &key(KeyCode::Down), AREA);
        handle_event(&mut state, &key(KeyCode::Enter), AREA);
        // ranked: ids 3, 2, 1
        assert_eq!(state.selected().map(|g| g.id), Some(2));
    }

    #[test]
    fn test_escape_closes_popup_before_quitting() {
        let mut state = loaded_state(2);
        state.select_row(0);
        assert_eq!(handle_event(&mut state, &key(KeyCode::Esc), AREA), Flow::Continue);
        assert!(!state.popup_open());
        assert_eq!(handle_event(&mut state, &key(KeyCode::Esc), AREA), Flow::Quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut state = loaded_state(1);
        state.select_row(0);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut state, &ctrl_c, AREA), Flow::Quit);
    }

    #[test]
    fn test_click_on_row_selects_it() {
        let mut state = loaded_state(3);
        // table starts at y=1; body at y=3; second row at y=5..6
        handle_event(&mut state, &click(10, 5), AREA);
        assert_eq!(state.selected().map(|g| g.id), Some(2));
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_click_on_header_does_nothing() {
        let mut state = loaded_state(3);
        handle_event(&mut state, &click(10, 2), AREA);
        assert!(!state.popup_open());
    }

    #[test]
    fn test_click_outside_popup_dismisses() {
        let mut state = loaded_state(3);
        state.select_row(2);
        handle_event(&mut state, &click(0, 0), AREA);
        assert!(!state.popup_open());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_click_inside_popup_keeps_it_open() {
        let mut state = loaded_state(3);
        state.select_row(0);
        let popup = layout::popup_area(AREA);
        handle_event(&mut state, &click(popup.x + 2, popup.y + 2), AREA);
        assert_eq!(state.selected().map(|g| g.id), Some(3));
    }

    #[test]
    fn test_popup_keys_scroll_instead_of_moving_cursor() {
        let mut state = loaded_state(3);
        state.select_row(0);
        handle_event(&mut state, &key(KeyCode::Down), AREA);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.popup_scroll, 1);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut state = loaded_state(3);
        handle_event(&mut state, &key(KeyCode::F(1)), AREA);
        assert!(state.show_help);
        assert_eq!(handle_event(&mut state, &key(KeyCode::Char('q')), AREA), Flow::Continue);
        assert!(!state.show_help);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = loaded_state(3);
        let mut release = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_event(&mut state, &Event::Key(release), AREA);
        assert_eq!(state.cursor, 0);
    }
}

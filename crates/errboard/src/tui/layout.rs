//! Layout - panel geometry and mouse hit-testing
//!
//! Rendering and input handling both go through these functions so a click
//! lands on the row that was actually drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal lines per table row (command line + error line)
pub const ROW_HEIGHT: u16 = 2;

const HEADER_HEIGHT: u16 = 1;
const STATUS_BAR_HEIGHT: u16 = 1;

/// Width reserved for the count column
pub const COUNT_COLUMN_WIDTH: u16 = 8;

/// Popup size as a percentage of the terminal
const POPUP_PERCENT_X: u16 = 80;
const POPUP_PERCENT_Y: u16 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub table: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(frame_area: Rect) -> PanelLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    PanelLayout {
        header: chunks[0],
        table: chunks[1],
        status_bar: chunks[2],
    }
}

/// Area of the table rows: inside the border, below the column header line
pub fn table_body(table: Rect) -> Rect {
    let inner_y = table.y.saturating_add(1);
    let inner_height = table.height.saturating_sub(2);
    Rect::new(
        table.x.saturating_add(1),
        inner_y.saturating_add(1),
        table.width.saturating_sub(2),
        inner_height.saturating_sub(1),
    )
}

/// How many whole rows fit in the table body
pub fn visible_rows(table: Rect) -> usize {
    (table_body(table).height / ROW_HEIGHT) as usize
}

/// Ranked row index under terminal cell (`column`, `row`), if any
pub fn row_at(table: Rect, offset: usize, row_count: usize, column: u16, row: u16) -> Option<usize> {
    let body = table_body(table);
    if !contains(body, column, row) {
        return None;
    }
    let slot = ((row - body.y) / ROW_HEIGHT) as usize;
    if slot >= visible_rows(table) {
        return None;
    }
    let index = offset + slot;
    (index < row_count).then_some(index)
}

/// Detail popup rectangle for a given terminal area
pub fn popup_area(frame_area: Rect) -> Rect {
    centered_rect(POPUP_PERCENT_X, POPUP_PERCENT_Y, frame_area)
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

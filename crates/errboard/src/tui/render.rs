//! Rendering - header, ranked error table, and status bar

use crate::panel::{LoadState, PanelState};
use errboard_common::ErrorGroup;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::layout::{self, COUNT_COLUMN_WIDTH, ROW_HEIGHT};
use super::popup::draw_detail_popup;
use super::utils::draw_help_overlay;

pub const PANEL_TITLE: &str = " Error Frequency - select one to add a solution ";
pub const LOAD_FAILED_MESSAGE: &str = "could not load errors";
pub const EMPTY_MESSAGE: &str = "no errors";
pub const LOADING_MESSAGE: &str = "loading...";

const BORDER_COLOR: Color = Color::Rgb(80, 180, 255);
const ERROR_TEXT_COLOR: Color = Color::Rgb(255, 90, 90);

pub fn draw_ui(f: &mut Frame, state: &PanelState) {
    let size = f.size();
    let grid = layout::compute_layout(size);

    draw_header(f, grid.header, state);
    draw_table_panel(f, grid.table, state);
    draw_status_bar(f, grid.status_bar, state);

    if let Some(group) = state.selected() {
        draw_detail_popup(f, layout::popup_area(size), group, state.popup_scroll);
    }

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &PanelState) {
    let header = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("errboard v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Rgb(150, 200, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | {}", state.api_url),
            Style::default().fg(Color::Rgb(150, 200, 255)),
        ),
    ]);

    f.render_widget(
        Paragraph::new(header).style(Style::default().bg(Color::Rgb(0, 0, 0))),
        area,
    );
}

fn panel_block() -> Block<'static> {
    Block::default()
        .title(PANEL_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR))
}

/// Draw the row area: loading, failure message, or the ranked table
pub fn draw_table_panel(f: &mut Frame, area: Rect, state: &PanelState) {
    match state.load_state() {
        LoadState::Loading => {
            let body = Paragraph::new(Line::from(Span::styled(
                LOADING_MESSAGE,
                Style::default().fg(Color::Gray),
            )))
            .block(panel_block());
            f.render_widget(body, area);
        }
        LoadState::Failed(reason) => {
            let body = Paragraph::new(vec![
                Line::from(Span::styled(
                    LOAD_FAILED_MESSAGE,
                    Style::default()
                        .fg(ERROR_TEXT_COLOR)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    reason.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ])
            .wrap(Wrap { trim: false })
            .block(panel_block());
            f.render_widget(body, area);
        }
        LoadState::Loaded(groups) => draw_group_table(f, area, groups, state),
    }
}

fn group_row(group: &ErrorGroup) -> Row<'_> {
    let summary = Text::from(vec![
        Line::from(Span::styled(
            group.representative.command.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            group.summary_error().into_owned(),
            Style::default().fg(ERROR_TEXT_COLOR),
        )),
    ]);
    let count = Line::from(Span::styled(
        group.count.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    Row::new(vec![Cell::from(summary), Cell::from(count)]).height(ROW_HEIGHT)
}

fn draw_group_table(f: &mut Frame, area: Rect, groups: &[ErrorGroup], state: &PanelState) {
    let widths = [Constraint::Min(10), Constraint::Length(COUNT_COLUMN_WIDTH)];
    let header = Row::new(vec![
        Cell::from("Command / error"),
        Cell::from(Line::from("Count").alignment(Alignment::Right)),
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::UNDERLINED));

    let rows: Vec<Row> = if groups.is_empty() {
        vec![Row::new(vec![Cell::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(Color::Gray),
        ))])
        .height(ROW_HEIGHT)]
    } else {
        groups.iter().map(group_row).collect()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block())
        .highlight_style(Style::default().bg(Color::Rgb(50, 50, 50)))
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    *table_state.offset_mut() = state.table_offset;
    if !groups.is_empty() {
        table_state.select(Some(state.cursor));
    }

    f.render_stateful_widget(table, area, &mut table_state);
}

fn status_text(state: &PanelState) -> String {
    let load = match state.load_state() {
        LoadState::Loading => "loading".to_string(),
        LoadState::Failed(_) => "load failed".to_string(),
        LoadState::Loaded(groups) => {
            let fetched = state
                .fetched_at
                .map(|t| format!(" at {}", t.format("%H:%M:%S")))
                .unwrap_or_default();
            format!("{} groups{}", groups.len(), fetched)
        }
    };
    format!(
        "{} | ↑/↓ move  Enter details  Esc close  F1 help  q quit",
        load
    )
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &PanelState) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text(state), Style::default().fg(Color::Rgb(180, 180, 180))),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20))),
        area,
    );
}

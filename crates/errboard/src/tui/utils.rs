//! Utilities - help overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Move highlight"),
    ("PgUp/PgDn", "Move by a page"),
    ("Home/End", "First / last group"),
    ("Enter, click", "Show error group details"),
    ("Esc, q", "Close details"),
    ("Click outside", "Close details"),
    ("F1", "Toggle help"),
    ("q, Ctrl+C", "Exit"),
];

/// Draw help overlay
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (keys, action) in SHORTCUTS {
        help_text.push(Line::from(vec![
            Span::styled(format!("{:<14}", keys), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" - {}", action)),
        ]));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Press F1 to close",
        Style::default().fg(Color::Gray),
    )));

    let help_area = centered_rect(50, 50, area);

    let help_block = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, help_area);
    f.render_widget(help_block, help_area);
}

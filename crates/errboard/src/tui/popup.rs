//! Detail popup - full, untruncated content of the selected error group

use errboard_common::ErrorGroup;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 11;

fn label(name: &str) -> Span<'static> {
    Span::styled(
        format!("{:<width$}", name, width = LABEL_WIDTH),
        Style::default().fg(Color::Cyan),
    )
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, indent: &str, style: Style) {
    let usable = width.saturating_sub(indent.len()).max(1);
    // Keep explicit newlines from the captured error output
    for raw in text.split('\n') {
        if raw.is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        for piece in textwrap::wrap(raw, usable) {
            lines.push(Line::from(vec![
                Span::raw(indent.to_string()),
                Span::styled(piece.into_owned(), style),
            ]));
        }
    }
}

/// Popup body for `group`, wrapped to `width` columns
pub fn popup_lines(group: &ErrorGroup, width: usize) -> Vec<Line<'static>> {
    let error_style = Style::default().fg(Color::Rgb(255, 90, 90));
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        label("Command"),
        Span::styled(
            group.representative.command.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![label("Count"), Span::raw(group.count.to_string())]));
    let listed = if group.occurrence_mismatch() {
        format!("{} (count says {})", group.occurrences.len(), group.count)
    } else {
        group.occurrences.len().to_string()
    };
    lines.push(Line::from(vec![label("Listed"), Span::raw(listed)]));
    lines.push(Line::from(vec![label("Group id"), Span::raw(group.id.to_string())]));
    lines.push(Line::from(""));

    lines.push(heading("Error"));
    push_wrapped(&mut lines, &group.representative.error, width, "", error_style);
    lines.push(Line::from(""));

    lines.push(heading("Occurrences"));
    if group.occurrences.is_empty() {
        lines.push(Line::from(Span::styled(
            "none listed",
            Style::default().fg(Color::Gray),
        )));
    }
    for (i, occurrence) in group.occurrences.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::Gray)),
            Span::styled(
                occurrence.command.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        push_wrapped(&mut lines, &occurrence.error, width, "     ", error_style);
    }

    lines
}

pub fn draw_detail_popup(f: &mut Frame, area: Rect, group: &ErrorGroup, scroll: u16) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2) as usize;
    let lines = popup_lines(group, inner_width);
    let max_scroll = lines.len().saturating_sub(visible);
    let actual_scroll = (scroll as usize).min(max_scroll) as u16;

    let can_scroll_up = actual_scroll > 0;
    let can_scroll_down = (actual_scroll as usize) < max_scroll;
    let indicator = match (can_scroll_up, can_scroll_down) {
        (false, false) => String::new(),
        (up, down) => format!(
            " {}{}",
            if up { "▲" } else { " " },
            if down { "▼" } else { " " }
        ),
    };

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Error group #{}{} ", group.id, indicator))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black))
        .scroll((actual_scroll, 0));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

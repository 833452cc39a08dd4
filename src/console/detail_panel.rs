use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::session::AssistSession;

pub fn render(
    f: &mut Frame,
    area: Rect,
    session: &AssistSession,
    active: bool,
    cursor_blink: bool,
    theme: &Theme,
) {
    let border_color = if active {
        theme.border_active
    } else {
        theme.border_inactive
    };
    let block = Block::default()
        .title(Span::styled(
            " TICKET ",
            Style::default().fg(theme.title_fg).bg(theme.title_bg),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(ticket) = session.selected_ticket.as_ref() else {
        let placeholder = Paragraph::new("\n\n   Select a ticket to view the conversation")
            .style(Style::default().fg(theme.dim));
        f.render_widget(placeholder, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(inner);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            ticket.subject.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} <{}>", ticket.requester_name, ticket.requester_email),
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            format!(
                "{} | {} | {} | tags: {}",
                ticket.status,
                ticket.priority,
                ticket.created_at.format("%Y-%m-%d %H:%M"),
                ticket.tags.join(", ")
            ),
            Style::default().fg(theme.dim),
        )),
        Line::default(),
    ];
    for text_line in ticket.query.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(theme.text),
        )));
    }

    if session.composer.sent {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "AGENT REPLY (sent ✓)",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for text_line in session.composer.sent_message.lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Style::default().fg(theme.text),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Customer satisfaction survey sent",
            Style::default().fg(theme.dim),
        )));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(body, chunks[0]);

    let reply_block = Block::default()
        .title(Span::styled(
            " REPLY ",
            Style::default().fg(theme.title_fg).bg(theme.title_bg),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let cursor = if active && cursor_blink { "_" } else { " " };
    let reply_text = format!("{}{}", session.composer.draft, cursor);
    let reply = Paragraph::new(reply_text)
        .block(reply_block)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false });
    f.render_widget(reply, chunks[1]);

    let hint = Paragraph::new(Line::from(Span::styled(
        " Type to draft | Enter: Send | Ctrl+R: Insert AI answer",
        Style::default().fg(theme.dim),
    )));
    f.render_widget(hint, chunks[2]);
}

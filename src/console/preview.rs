use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::session::PreviewSession;
use crate::shared::models::MessageRole;

pub fn render(f: &mut Frame, preview: &PreviewSession, scroll: u16, theme: &Theme) {
    let area = centered_rect(86, 85, f.area());
    f.render_widget(Clear, area);

    let outer = Block::default()
        .title(Span::styled(
            format!(" {} ({}) ", preview.document.title, preview.document.kind),
            Style::default()
                .fg(theme.title_fg)
                .bg(theme.title_bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_active))
        .style(Style::default().bg(theme.bg));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let body = Paragraph::new(preview.body.as_str())
        .block(
            Block::default()
                .title(" DOCUMENT ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_inactive)),
        )
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(body, columns[0]);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    let mut lines: Vec<Line> = Vec::new();
    if preview.messages.is_empty() && !preview.typing {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Ask a question about this document",
            Style::default().fg(theme.dim),
        )));
    }
    for message in &preview.messages {
        let (prefix, style) = match message.role {
            MessageRole::User => ("You: ", Style::default().fg(theme.accent)),
            MessageRole::Assistant => ("AI: ", Style::default().fg(theme.text)),
        };
        let mut first = true;
        for text_line in message.content.lines() {
            let label = if first { prefix } else { "     " };
            lines.push(Line::from(vec![
                Span::styled(label, style.add_modifier(Modifier::BOLD)),
                Span::styled(text_line.to_string(), Style::default().fg(theme.text)),
            ]));
            first = false;
        }
        lines.push(Line::default());
    }
    if preview.typing {
        lines.push(Line::from(Span::styled(
            "AI is typing...",
            Style::default().fg(theme.dim),
        )));
    }
    let chat = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" CHAT ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_inactive)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(chat, chat_chunks[0]);

    let input = Paragraph::new(preview.input.as_str())
        .block(
            Block::default()
                .title(" ASK ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_active)),
        )
        .style(Style::default().fg(theme.text));
    f.render_widget(input, chat_chunks[1]);

    let hint = Paragraph::new(Line::from(Span::styled(
        " Enter: Send | ↑/↓: Scroll | Esc: Close",
        Style::default().fg(theme.dim),
    )));
    f.render_widget(hint, chat_chunks[2]);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

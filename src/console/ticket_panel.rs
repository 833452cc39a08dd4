use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::Theme;
use crate::shared::state::AppState;
use crate::tickets::{Ticket, TicketPriority, TicketStatus};

// Rotating "received" labels, one per queue position.
const TIME_LABELS: [&str; 6] = [
    "2 minutes ago",
    "5 minutes ago",
    "8 minutes ago",
    "12 minutes ago",
    "19 minutes ago",
    "1 minute ago",
];

#[derive(Debug, Default)]
pub struct TicketPanel {
    pub selected: usize,
}

impl TicketPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn selected_id<'a>(&self, state: &'a AppState) -> Option<&'a str> {
        state.tickets.get(self.selected).map(|t| t.id.as_str())
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        open_ticket: Option<&Ticket>,
        active: bool,
        theme: &Theme,
    ) {
        let border_color = if active {
            theme.border_active
        } else {
            theme.border_inactive
        };
        let block = Block::default()
            .title(Span::styled(
                " TICKETS ",
                Style::default().fg(theme.title_fg).bg(theme.title_bg),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(block.inner(area));
        f.render_widget(block, area);

        let items: Vec<ListItem> = state
            .tickets
            .iter()
            .enumerate()
            .map(|(idx, ticket)| {
                let cursor_here = idx == self.selected;
                let is_open = open_ticket.map(|t| t.id == ticket.id).unwrap_or(false);
                let subject_style = if cursor_here {
                    Style::default()
                        .bg(theme.highlight)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else if is_open {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                let first = Line::from(vec![
                    Span::styled("● ", Style::default().fg(status_color(ticket.status))),
                    Span::styled(ticket.subject.clone(), subject_style),
                ]);
                let second = Line::from(vec![
                    Span::styled(
                        format!("  {} · {}", ticket.requester_name, TIME_LABELS[idx % TIME_LABELS.len()]),
                        Style::default().fg(theme.dim),
                    ),
                    Span::styled(
                        format!(" [{}]", ticket.priority),
                        Style::default().fg(priority_color(ticket.priority)),
                    ),
                ]);
                ListItem::new(vec![first, second])
            })
            .collect();

        f.render_widget(List::new(items), chunks[0]);

        let hint = Paragraph::new(Line::from(Span::styled(
            " ↑/↓: Move | Enter: Open | q: Quit",
            Style::default().fg(theme.dim),
        )));
        f.render_widget(hint, chunks[1]);
    }
}

fn status_color(status: TicketStatus) -> Color {
    match status {
        TicketStatus::Open => Color::Rgb(34, 197, 94),
        TicketStatus::Pending => Color::Rgb(234, 179, 8),
        TicketStatus::Solved => Color::DarkGray,
    }
}

fn priority_color(priority: TicketPriority) -> Color {
    match priority {
        TicketPriority::Urgent => Color::Rgb(239, 68, 68),
        TicketPriority::High => Color::Rgb(249, 115, 22),
        TicketPriority::Normal | TicketPriority::Low => Color::DarkGray,
    }
}

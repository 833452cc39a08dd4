use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::session::{AssistPhase, AssistSession};
use crate::shared::state::AppState;

#[derive(Debug, Default)]
pub struct SidebarPanel {
    /// Cursor over the visible document list: ranked results when the
    /// session is ready, the recent-documents catalog otherwise.
    pub cursor: usize,
}

impl SidebarPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_len(&self, state: &AppState, session: &AssistSession) -> usize {
        match session.phase {
            AssistPhase::Ready => session.results.len(),
            _ => state.documents.len(),
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
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
                " ASSISTANT ",
                Style::default().fg(theme.title_fg).bg(theme.title_bg),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(block.inner(area));
        f.render_widget(block, area);

        self.render_search_box(f, chunks[0], session, active, cursor_blink, theme);

        match session.phase {
            AssistPhase::Searching => self.render_searching(f, chunks[1], theme),
            AssistPhase::Ready => self.render_results(f, chunks[1], session, theme),
            AssistPhase::Idle => self.render_recent(f, chunks[1], state, theme),
        }

        let hint = Paragraph::new(Line::from(Span::styled(
            " Enter: Search | Esc: Clear | ↑/↓: Select | Ctrl+O: Preview",
            Style::default().fg(theme.dim),
        )));
        f.render_widget(hint, chunks[2]);
    }

    fn render_search_box(
        &self,
        f: &mut Frame,
        area: Rect,
        session: &AssistSession,
        active: bool,
        cursor_blink: bool,
        theme: &Theme,
    ) {
        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_inactive));
        let search_text = if session.query.is_empty() && !active {
            Span::styled(
                "Ask a question or search...",
                Style::default().fg(theme.dim),
            )
        } else {
            let cursor = if active && cursor_blink { "_" } else { "" };
            Span::styled(
                format!("{}{}", session.query, cursor),
                Style::default().fg(theme.text),
            )
        };
        f.render_widget(Paragraph::new(Line::from(search_text)).block(search_block), area);
    }

    fn render_searching(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "  ◌ Searching and generating answer...",
                Style::default().fg(theme.accent),
            )),
            Line::default(),
            Line::from(Span::styled("  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒", Style::default().fg(theme.dim))),
            Line::from(Span::styled("  ▒▒▒▒▒▒▒▒▒▒▒▒▒", Style::default().fg(theme.dim))),
            Line::from(Span::styled("  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒", Style::default().fg(theme.dim))),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_results(&self, f: &mut Frame, area: Rect, session: &AssistSession, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(answer) = session.answer.as_ref() {
            lines.push(Line::from(Span::styled(
                " AI ANSWER",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for text_line in answer.content.lines() {
                lines.push(Line::from(Span::styled(
                    format!(" {text_line}"),
                    Style::default().fg(theme.text),
                )));
            }
            if !answer.citations.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    " Sources:",
                    Style::default().fg(theme.dim),
                )));
                for (idx, citation) in answer.citations.iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("  [{}] {} — {}", idx + 1, citation.source, citation.text),
                        Style::default().fg(theme.dim),
                    )));
                }
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            " RELATED DOCUMENTS",
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        )));
        for (idx, result) in session.results.iter().enumerate() {
            let style = if idx == self.cursor {
                Style::default().bg(theme.highlight).fg(Color::White)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", result.title), style),
                Span::styled(format!("({})", result.kind), Style::default().fg(theme.dim)),
                Span::styled(
                    format!(" {}%", result.relevance),
                    Style::default().fg(theme.accent),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", result.excerpt),
                Style::default().fg(theme.dim),
            )));
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_recent(&self, f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            " RECENT DOCUMENTS",
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        ))];
        for (idx, doc) in state.documents.iter().enumerate() {
            let style = if idx == self.cursor {
                Style::default().bg(theme.highlight).fg(Color::White)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", doc.title), style),
                Span::styled(format!("({})", doc.kind), Style::default().fg(theme.dim)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {} · {}", doc.last_viewed, doc.excerpt),
                Style::default().fg(theme.dim),
            )));
        }
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}

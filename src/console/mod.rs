use std::io;
use std::sync::{Arc, Mutex};

use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

mod detail_panel;
mod log_panel;
mod preview;
mod sidebar;
mod ticket_panel;

use crate::session::{AssistPhase, AssistSession, PreviewSession};
use crate::shared::state::AppState;
use crate::tickets;
use log_panel::{init_logger, LogPanel};
use sidebar::SidebarPanel;
use ticket_panel::TicketPanel;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub bg: Color,
    pub text: Color,
    pub dim: Color,
    pub border_active: Color,
    pub border_inactive: Color,
    pub highlight: Color,
    pub title_bg: Color,
    pub title_fg: Color,
    pub accent: Color,
}

const THEME: Theme = Theme {
    bg: Color::Rgb(26, 26, 46),
    text: Color::Rgb(229, 231, 235),
    dim: Color::DarkGray,
    border_active: Color::Rgb(96, 165, 250),
    border_inactive: Color::Rgb(75, 85, 99),
    highlight: Color::Rgb(55, 48, 163),
    title_bg: Color::Rgb(37, 99, 235),
    title_fg: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(129, 140, 248),
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ActivePanel {
    Tickets,
    Detail,
    Sidebar,
}

pub struct ConsoleUI {
    state: Arc<AppState>,
    session: AssistSession,
    preview: Option<PreviewSession>,
    preview_scroll: u16,
    ticket_panel: TicketPanel,
    sidebar: SidebarPanel,
    log_panel: Arc<Mutex<LogPanel>>,
    active_panel: ActivePanel,
    should_quit: bool,
}

pub fn start_ui(state: Arc<AppState>) -> Result<()> {
    ConsoleUI::new(state).run()
}

impl ConsoleUI {
    pub fn new(state: Arc<AppState>) -> Self {
        let session = AssistSession::new(state.clone());
        Self {
            state,
            session,
            preview: None,
            preview_scroll: 0,
            ticket_panel: TicketPanel::new(),
            sidebar: SidebarPanel::new(),
            log_panel: Arc::new(Mutex::new(LogPanel::new())),
            active_panel: ActivePanel::Tickets,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        if let Err(e) = init_logger(self.log_panel.clone()) {
            eprintln!("Warning: could not initialize UI logger: {}", e);
        }
        info!(
            "support desk console ready: {} tickets, {} documents",
            self.state.tickets.len(),
            self.state.documents.len()
        );
        let result = self.run_event_loop(&mut terminal);
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let tick = std::time::Duration::from_millis(self.state.config.console.tick_ms);
        let mut cursor_blink = false;
        let mut last_blink = std::time::Instant::now();
        loop {
            self.session.poll();
            if let Some(preview) = self.preview.as_mut() {
                preview.poll();
            }
            if last_blink.elapsed() >= std::time::Duration::from_millis(500) {
                cursor_blink = !cursor_blink;
                last_blink = std::time::Instant::now();
            }
            terminal.draw(|f| self.render(f, cursor_blink))?;
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_input(key.code, key.modifiers);
                    if self.should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.preview.is_some() {
            self.handle_preview_input(code, modifiers);
            return;
        }
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('o') => self.open_selected_document(),
                KeyCode::Char('r') => self.insert_answer_into_reply(),
                _ => {}
            }
            return;
        }
        if code == KeyCode::Tab {
            self.cycle_panel();
            return;
        }
        match self.active_panel {
            ActivePanel::Tickets => self.handle_ticket_keys(code),
            ActivePanel::Detail => self.handle_detail_keys(code),
            ActivePanel::Sidebar => self.handle_sidebar_keys(code),
        }
    }

    fn cycle_panel(&mut self) {
        self.active_panel = match self.active_panel {
            ActivePanel::Tickets => ActivePanel::Detail,
            ActivePanel::Detail => ActivePanel::Sidebar,
            ActivePanel::Sidebar => ActivePanel::Tickets,
        };
    }

    fn handle_ticket_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.ticket_panel.move_up(),
            KeyCode::Down => self.ticket_panel.move_down(self.state.tickets.len()),
            KeyCode::Enter => {
                if let Some(id) = self.ticket_panel.selected_id(&self.state).map(String::from) {
                    self.session.select_ticket(&id);
                    self.sidebar.reset_cursor();
                    self.active_panel = ActivePanel::Sidebar;
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.session.composer.draft.push(c),
            KeyCode::Backspace => {
                self.session.composer.draft.pop();
            }
            KeyCode::Enter => {
                if self.session.composer.send() {
                    info!("reply sent to customer");
                }
            }
            _ => {}
        }
    }

    fn handle_sidebar_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.session.push_query_char(c),
            KeyCode::Backspace => self.session.backspace_query(),
            KeyCode::Enter => {
                self.sidebar.reset_cursor();
                self.session.start_search();
            }
            KeyCode::Esc => {
                self.session.set_query("");
                self.sidebar.reset_cursor();
            }
            KeyCode::Up => self.sidebar.move_up(),
            KeyCode::Down => {
                let len = self.sidebar.visible_len(&self.state, &self.session);
                self.sidebar.move_down(len);
            }
            _ => {}
        }
    }

    fn handle_preview_input(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(code, KeyCode::Char('q') | KeyCode::Char('c')) {
                self.should_quit = true;
            }
            return;
        }
        let Some(preview) = self.preview.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                info!("document preview closed: {}", preview.document.id);
                self.preview = None;
                self.preview_scroll = 0;
            }
            KeyCode::Enter => preview.send_message(),
            KeyCode::Backspace => {
                preview.input.pop();
            }
            KeyCode::Char(c) => preview.input.push(c),
            KeyCode::Up => self.preview_scroll = self.preview_scroll.saturating_sub(1),
            KeyCode::Down => {
                let max = preview.body.lines().count() as u16;
                self.preview_scroll = (self.preview_scroll + 1).min(max);
            }
            _ => {}
        }
    }

    fn open_selected_document(&mut self) {
        let doc_id = match self.session.phase {
            AssistPhase::Ready => self
                .session
                .results
                .get(self.sidebar.cursor)
                .map(|r| r.id.clone()),
            _ => self
                .state
                .documents
                .get(self.sidebar.cursor)
                .map(|d| d.id.clone()),
        };
        if let Some(id) = doc_id {
            if let Some(doc) = self.state.find_document(&id).cloned() {
                self.preview = Some(PreviewSession::open(&self.state, &doc));
                self.preview_scroll = 0;
            }
        }
    }

    fn insert_answer_into_reply(&mut self) {
        let Some(content) = self.session.answer.as_ref().map(|a| a.content.clone()) else {
            return;
        };
        self.session.composer.insert(&content);
        info!("AI answer inserted into reply draft");
    }

    fn render(&mut self, f: &mut Frame, cursor_blink: bool) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(10),
            ])
            .split(f.area());

        self.render_header(f, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(40),
                Constraint::Percentage(35),
            ])
            .split(main_chunks[1]);

        self.ticket_panel.render(
            f,
            content_chunks[0],
            &self.state,
            self.session.selected_ticket.as_ref(),
            self.active_panel == ActivePanel::Tickets,
            &THEME,
        );
        detail_panel::render(
            f,
            content_chunks[1],
            &self.session,
            self.active_panel == ActivePanel::Detail,
            cursor_blink,
            &THEME,
        );
        self.sidebar.render(
            f,
            content_chunks[2],
            &self.state,
            &self.session,
            self.active_panel == ActivePanel::Sidebar,
            cursor_blink,
            &THEME,
        );
        self.render_logs(f, main_chunks[2]);

        if let Some(preview) = self.preview.as_ref() {
            preview::render(f, preview, self.preview_scroll, &THEME);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().style(Style::default().bg(THEME.title_bg));
        f.render_widget(block, area);

        let stats = tickets::stats(&self.state.tickets);
        let title = format!(
            " SUPPORT DESK ┃ Open {} ┃ Pending {} ┃ Solved {} ",
            stats.open, stats.pending, stats.solved
        );
        let title_len = title.chars().count() as u16;
        let centered_x = (area.width.saturating_sub(title_len)) / 2;
        let title_span = Span::styled(
            title,
            Style::default()
                .fg(THEME.title_fg)
                .bg(THEME.title_bg)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(
            Paragraph::new(Line::from(title_span)),
            Rect {
                x: area.x + centered_x,
                y: area.y + 1,
                width: title_len.min(area.width),
                height: 1,
            },
        );
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                " SYSTEM LOGS ",
                Style::default().fg(THEME.title_fg).bg(THEME.title_bg),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(THEME.border_inactive))
            .style(Style::default().bg(THEME.bg));

        let visible_lines = area.height.saturating_sub(2) as usize;
        let content = if let Ok(panel) = self.log_panel.lock() {
            panel.render(visible_lines)
        } else {
            String::from("  Waiting for logs...")
        };
        let logs = Paragraph::new(content)
            .block(block)
            .style(Style::default().fg(THEME.text))
            .wrap(Wrap { trim: false });
        f.render_widget(logs, area);
    }
}

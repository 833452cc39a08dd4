//! Per-ticket assist session state: the search state machine, the reply
//! composer, and the preview-modal chat thread. Searches run as spawned
//! tasks that sleep the configured delay (standing in for network latency)
//! and deliver over an mpsc channel; the console drains with `try_recv`
//! every tick.

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use crate::assist::{self, AssistAnswer};
use crate::kb::{self, KbDocument};
use crate::search::{self, SearchResult};
use crate::shared::models::ChatMessage;
use crate::shared::state::AppState;
use crate::tickets::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistPhase {
    /// No results shown; either no search ran yet or the query was cleared.
    Idle,
    /// The artificial delay is running.
    Searching,
    /// Answer and ranked results are available.
    Ready,
}

#[derive(Debug)]
struct AssistOutcome {
    answer: AssistAnswer,
    results: Vec<SearchResult>,
}

/// The agent's reply draft under the ticket detail view.
#[derive(Debug, Default, Clone)]
pub struct ReplyComposer {
    pub draft: String,
    pub sent_message: String,
    pub sent: bool,
}

impl ReplyComposer {
    fn reset(&mut self) {
        self.draft.clear();
        self.sent_message.clear();
        self.sent = false;
    }

    /// Append answer content to the draft, blank-line separated when the
    /// draft already has text. Un-marks any previously sent state.
    pub fn insert(&mut self, content: &str) {
        if self.draft.trim().is_empty() {
            self.draft = content.to_string();
        } else {
            self.draft = format!("{}\n\n{}", self.draft, content);
        }
        self.sent = false;
    }

    /// Record the draft as sent and clear it. Blank drafts are a no-op.
    pub fn send(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        self.sent_message = self.draft.clone();
        self.sent = true;
        self.draft.clear();
        true
    }
}

pub struct AssistSession {
    state: Arc<AppState>,
    pub selected_ticket: Option<Ticket>,
    pub query: String,
    pub phase: AssistPhase,
    pub answer: Option<AssistAnswer>,
    pub results: Vec<SearchResult>,
    pub composer: ReplyComposer,
    outcome_rx: Option<mpsc::Receiver<AssistOutcome>>,
}

impl AssistSession {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            selected_ticket: None,
            query: String::new(),
            phase: AssistPhase::Idle,
            answer: None,
            results: Vec::new(),
            composer: ReplyComposer::default(),
            outcome_rx: None,
        }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Select a ticket: reset the composer, auto-fill the search field with
    /// the ticket's query, and start the search immediately.
    pub fn select_ticket(&mut self, id: &str) -> bool {
        let Some(ticket) = self.state.find_ticket(id).cloned() else {
            return false;
        };
        info!("ticket selected: {} ({})", ticket.id, ticket.subject);
        self.composer.reset();
        self.query = ticket.query.clone();
        self.selected_ticket = Some(ticket);
        self.start_search();
        true
    }

    /// Replace the query text. Clearing it to blank discards any results and
    /// returns the session to idle.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if self.query.trim().is_empty() {
            self.clear_results();
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace_query(&mut self) {
        self.query.pop();
        if self.query.trim().is_empty() {
            self.clear_results();
        }
    }

    pub fn clear_results(&mut self) {
        self.phase = AssistPhase::Idle;
        self.answer = None;
        self.results.clear();
        self.outcome_rx = None;
    }

    /// Kick off a search over the current query. Empty queries are a no-op.
    /// The spawned task always completes; there is no cancellation, timeout
    /// or retry.
    pub fn start_search(&mut self) {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return;
        }
        debug!("assist search started: {query:?}");
        self.phase = AssistPhase::Searching;
        self.answer = None;
        self.results.clear();

        let (tx, rx) = mpsc::channel(1);
        self.outcome_rx = Some(rx);
        let delay = Duration::from_millis(self.state.config.assist.answer_delay_ms);
        tokio::spawn(async move {
            sleep(delay).await;
            let outcome = AssistOutcome {
                answer: assist::generate_answer(&query),
                results: search::rank_documents(&query),
            };
            let _ = tx.send(outcome).await;
        });
    }

    /// Non-blocking drain, called once per UI tick.
    pub fn poll(&mut self) {
        let outcome = match self.outcome_rx.as_mut() {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(outcome) = outcome {
            self.apply(outcome);
        }
    }

    /// Await the in-flight search, for headless mode and tests.
    pub async fn wait_ready(&mut self) {
        if let Some(mut rx) = self.outcome_rx.take() {
            if let Some(outcome) = rx.recv().await {
                self.apply(outcome);
            }
        }
    }

    fn apply(&mut self, outcome: AssistOutcome) {
        debug!(
            "assist search finished: {} citations, {} results",
            outcome.answer.citations.len(),
            outcome.results.len()
        );
        self.answer = Some(outcome.answer);
        self.results = outcome.results;
        self.phase = AssistPhase::Ready;
        self.outcome_rx = None;
    }
}

/// Chat thread inside the document preview modal. Messages live only in
/// memory for the lifetime of the modal.
pub struct PreviewSession {
    pub document: KbDocument,
    pub body: String,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub typing: bool,
    reply_rx: Option<mpsc::Receiver<ChatMessage>>,
    delay_ms: u64,
}

impl PreviewSession {
    pub fn open(state: &AppState, document: &KbDocument) -> Self {
        info!("document preview opened: {}", document.id);
        Self {
            document: document.clone(),
            body: kb::preview::preview_body(document),
            messages: Vec::new(),
            input: String::new(),
            typing: false,
            reply_rx: None,
            delay_ms: state.config.assist.answer_delay_ms,
        }
    }

    /// Send the typed message: append it, then reveal a canned reply about
    /// this document after the artificial delay. Blank input is a no-op.
    pub fn send_message(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.input.clear();
        self.messages.push(ChatMessage::user(&text));
        self.typing = true;

        let (tx, rx) = mpsc::channel(1);
        self.reply_rx = Some(rx);
        let title = self.document.title.clone();
        let delay = Duration::from_millis(self.delay_ms);
        tokio::spawn(async move {
            sleep(delay).await;
            let content = format!(
                "Based on \"{title}\", here's what I found:\n\nThis document covers important information related to your question. The key points include following the step-by-step instructions and ensuring you have the necessary permissions.\n\nWould you like me to explain any specific section in more detail?"
            );
            let _ = tx.send(ChatMessage::assistant(content)).await;
        });
    }

    pub fn poll(&mut self) {
        let reply = match self.reply_rx.as_mut() {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(reply) = reply {
            self.messages.push(reply);
            self.typing = false;
            self.reply_rx = None;
        }
    }

    /// Await the pending canned reply, for tests.
    pub async fn wait_reply(&mut self) {
        if let Some(mut rx) = self.reply_rx.take() {
            if let Some(reply) = rx.recv().await {
                self.messages.push(reply);
                self.typing = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::shared::models::MessageRole;
    use crate::tests::test_util;

    fn fast_state() -> Arc<AppState> {
        test_util::setup();
        let mut config = AppConfig::default();
        config.assist.answer_delay_ms = 0;
        Arc::new(AppState::new(config))
    }

    #[tokio::test]
    async fn selecting_a_ticket_autofills_and_searches() {
        let mut session = AssistSession::new(fast_state());
        assert!(session.select_ticket("ticket-1"));
        assert_eq!(session.phase, AssistPhase::Searching);
        assert!(session.query.starts_with("I forgot my password"));

        session.wait_ready().await;
        assert_eq!(session.phase, AssistPhase::Ready);
        let answer = session.answer.as_ref().unwrap();
        assert_eq!(answer.citations[0].source_id, "doc-2");
        assert_eq!(session.results[0].id, "doc-2");
        assert_eq!(session.results[0].relevance, 95);
    }

    #[tokio::test]
    async fn clearing_the_query_discards_results() {
        let mut session = AssistSession::new(fast_state());
        session.set_query("billing");
        session.start_search();
        session.wait_ready().await;
        assert_eq!(session.phase, AssistPhase::Ready);

        session.set_query("");
        assert_eq!(session.phase, AssistPhase::Idle);
        assert!(session.answer.is_none());
        assert!(session.results.is_empty());
    }

    #[tokio::test]
    async fn blank_search_is_a_noop() {
        let mut session = AssistSession::new(fast_state());
        session.set_query("   ");
        session.start_search();
        assert_eq!(session.phase, AssistPhase::Idle);
        assert!(session.answer.is_none());
    }

    #[tokio::test]
    async fn unknown_ticket_id_is_rejected() {
        let mut session = AssistSession::new(fast_state());
        assert!(!session.select_ticket("ticket-42"));
        assert_eq!(session.phase, AssistPhase::Idle);
    }

    #[test]
    fn composer_inserts_with_blank_line_separator() {
        let mut composer = ReplyComposer::default();
        composer.insert("first block");
        composer.insert("second block");
        assert_eq!(composer.draft, "first block\n\nsecond block");
    }

    #[test]
    fn composer_send_records_and_clears() {
        let mut composer = ReplyComposer::default();
        assert!(!composer.send());

        composer.insert("the answer");
        assert!(composer.send());
        assert!(composer.sent);
        assert_eq!(composer.sent_message, "the answer");
        assert!(composer.draft.is_empty());

        // Inserting after a send starts a fresh, unsent draft.
        composer.insert("followup");
        assert!(!composer.sent);
    }

    #[tokio::test]
    async fn preview_chat_replies_about_the_document() {
        let state = fast_state();
        let doc = state.find_document("doc-3").unwrap().clone();
        let mut preview = PreviewSession::open(&state, &doc);
        assert!(preview.body.starts_with("# Meeting Scheduling FAQ"));

        preview.input = "how do I fix the error?".to_string();
        preview.send_message();
        assert!(preview.typing);
        assert_eq!(preview.messages.len(), 1);
        assert_eq!(preview.messages[0].role, MessageRole::User);

        preview.wait_reply().await;
        assert!(!preview.typing);
        assert_eq!(preview.messages.len(), 2);
        assert_eq!(preview.messages[1].role, MessageRole::Assistant);
        assert!(preview.messages[1].content.contains("Meeting Scheduling FAQ"));
    }

    #[tokio::test]
    async fn preview_ignores_blank_input() {
        let state = fast_state();
        let doc = state.find_document("doc-1").unwrap().clone();
        let mut preview = PreviewSession::open(&state, &doc);
        preview.input = "   ".to_string();
        preview.send_message();
        assert!(preview.messages.is_empty());
        assert!(!preview.typing);
    }
}

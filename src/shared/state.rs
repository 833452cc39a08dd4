use crate::config::AppConfig;
use crate::kb::{self, KbDocument};
use crate::tickets::{self, Ticket};

/// Shared read-only application state: the configuration plus the seeded
/// catalogs. Wrapped in an `Arc` by callers; nothing here mutates after
/// construction.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub tickets: Vec<Ticket>,
    pub documents: Vec<KbDocument>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            tickets: tickets::seed_tickets(),
            documents: kb::seed_documents(),
        }
    }

    pub fn find_ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn find_document(&self, id: &str) -> Option<&KbDocument> {
        self.documents.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_resolves_ids() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.tickets.len(), 6);
        assert_eq!(state.documents.len(), 5);
        assert!(state.find_ticket("ticket-4").is_some());
        assert!(state.find_document("doc-5").is_some());
        assert!(state.find_ticket("ticket-99").is_none());
    }
}

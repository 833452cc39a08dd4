use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Pending,
    Solved,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Pending => write!(f, "pending"),
            Self::Solved => write!(f, "solved"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

/// A simulated support conversation record. Seed data only; tickets are
/// read-only for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub requester_name: String,
    pub requester_email: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: DateTime<Utc>,
    pub query: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub pending: usize,
    pub solved: usize,
}

pub fn stats(tickets: &[Ticket]) -> TicketStats {
    let count = |status: TicketStatus| tickets.iter().filter(|t| t.status == status).count();
    TicketStats {
        total: tickets.len(),
        open: count(TicketStatus::Open),
        pending: count(TicketStatus::Pending),
        solved: count(TicketStatus::Solved),
    }
}

struct TicketSeed {
    id: &'static str,
    subject: &'static str,
    requester_name: &'static str,
    requester_email: &'static str,
    status: TicketStatus,
    priority: TicketPriority,
    created_at: (i32, u32, u32, u32, u32),
    query: &'static str,
    tags: &'static [&'static str],
}

const TICKET_SEEDS: &[TicketSeed] = &[
    TicketSeed {
        id: "ticket-1",
        subject: "How do I reset my password?",
        requester_name: "John Smith",
        requester_email: "john.smith@example.com",
        status: TicketStatus::Open,
        priority: TicketPriority::Normal,
        created_at: (2024, 1, 14, 10, 23),
        query: "I forgot my password and cannot log in to my account. How can I reset it? I tried clicking the forgot password link but did not receive any email.",
        tags: &["password", "login", "account"],
    },
    TicketSeed {
        id: "ticket-2",
        subject: "Unable to schedule a meeting",
        requester_name: "Sarah Johnson",
        requester_email: "sarah.j@company.com",
        status: TicketStatus::Open,
        priority: TicketPriority::High,
        created_at: (2024, 1, 14, 9, 45),
        query: "When I try to schedule a meeting, I get an error message saying \"Unable to create meeting\". I have tried multiple times but the issue persists. This is urgent as I have client calls scheduled.",
        tags: &["meeting", "scheduling", "error"],
    },
    TicketSeed {
        id: "ticket-3",
        subject: "How to enable recording transcription?",
        requester_name: "Michael Chen",
        requester_email: "mchen@tech.io",
        status: TicketStatus::Pending,
        priority: TicketPriority::Normal,
        created_at: (2024, 1, 13, 16, 30),
        query: "I would like to enable automatic transcription for my meeting recordings. Where can I find this setting? Is this feature available on the Pro plan?",
        tags: &["recording", "transcription", "settings"],
    },
    TicketSeed {
        id: "ticket-4",
        subject: "Billing inquiry - double charged",
        requester_name: "Emma Wilson",
        requester_email: "emma.w@startup.co",
        status: TicketStatus::Open,
        priority: TicketPriority::Urgent,
        created_at: (2024, 1, 14, 8, 15),
        query: "I noticed that I was charged twice for my monthly subscription this month. Please help me understand why and process a refund for the duplicate charge.",
        tags: &["billing", "refund", "payment"],
    },
    TicketSeed {
        id: "ticket-5",
        subject: "Integration with Slack not working",
        requester_name: "David Lee",
        requester_email: "david@agency.com",
        status: TicketStatus::Open,
        priority: TicketPriority::Normal,
        created_at: (2024, 1, 13, 14, 0),
        query: "I set up the Slack integration yesterday but notifications are not coming through. I followed the setup guide but something seems wrong. Can you help troubleshoot?",
        tags: &["integration", "slack", "notifications"],
    },
    TicketSeed {
        id: "ticket-6",
        subject: "Request for enterprise features demo",
        requester_name: "Lisa Brown",
        requester_email: "lisa.brown@enterprise.com",
        status: TicketStatus::Pending,
        priority: TicketPriority::High,
        created_at: (2024, 1, 12, 11, 0),
        query: "Our company is considering upgrading to the Enterprise plan. Can you provide a demo of the advanced admin controls and SSO features? We have about 500 users.",
        tags: &["enterprise", "demo", "sales"],
    },
];

pub fn seed_tickets() -> Vec<Ticket> {
    TICKET_SEEDS
        .iter()
        .map(|seed| {
            let (y, mo, d, h, mi) = seed.created_at;
            Ticket {
                id: seed.id.to_string(),
                subject: seed.subject.to_string(),
                requester_name: seed.requester_name.to_string(),
                requester_email: seed.requester_email.to_string(),
                status: seed.status,
                priority: seed.priority,
                created_at: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
                query: seed.query.to_string(),
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_queue_has_six_tickets() {
        let tickets = seed_tickets();
        assert_eq!(tickets.len(), 6);
        assert_eq!(tickets[0].id, "ticket-1");
        assert_eq!(tickets[3].priority, TicketPriority::Urgent);
    }

    #[test]
    fn stats_count_by_status() {
        let tickets = seed_tickets();
        let stats = stats(&tickets);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.open, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.solved, 0);
    }

    #[test]
    fn status_labels_round_trip() {
        assert_eq!(TicketStatus::Solved.to_string(), "solved");
        assert_eq!(
            serde_json::to_string(&TicketPriority::Urgent).unwrap(),
            "\"urgent\""
        );
    }
}

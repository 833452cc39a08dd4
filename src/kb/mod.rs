use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub mod preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Doc,
    Article,
    Guide,
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Doc => write!(f, "doc"),
            Self::Article => write!(f, "article"),
            Self::Guide => write!(f, "guide"),
        }
    }
}

/// A knowledge-base document stub. The catalog is static; answers cite into
/// it by id and the preview modal renders the full body on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KbDocument {
    pub id: String,
    pub title: String,
    pub kind: DocKind,
    pub last_viewed: String,
    pub excerpt: String,
}

struct DocumentSeed {
    id: &'static str,
    title: &'static str,
    kind: DocKind,
    last_viewed: &'static str,
    excerpt: &'static str,
}

const DOCUMENT_SEEDS: &[DocumentSeed] = &[
    DocumentSeed {
        id: "doc-1",
        title: "Getting Started Guide",
        kind: DocKind::Guide,
        last_viewed: "2 hours ago",
        excerpt: "Learn how to set up your account and start using the platform effectively...",
    },
    DocumentSeed {
        id: "doc-2",
        title: "Password Reset Instructions",
        kind: DocKind::Article,
        last_viewed: "5 hours ago",
        excerpt: "Step-by-step guide to reset your password and secure your account...",
    },
    DocumentSeed {
        id: "doc-3",
        title: "Meeting Scheduling FAQ",
        kind: DocKind::Doc,
        last_viewed: "1 day ago",
        excerpt: "Frequently asked questions about scheduling, rescheduling, and managing meetings...",
    },
    DocumentSeed {
        id: "doc-4",
        title: "Billing and Subscription Guide",
        kind: DocKind::Guide,
        last_viewed: "2 days ago",
        excerpt: "Understanding your billing cycle, invoices, and subscription management...",
    },
    DocumentSeed {
        id: "doc-5",
        title: "Integration Setup Documentation",
        kind: DocKind::Doc,
        last_viewed: "3 days ago",
        excerpt: "Complete guide to setting up integrations with third-party applications...",
    },
];

pub static DOCUMENT_CATALOG: Lazy<Vec<KbDocument>> = Lazy::new(|| {
    DOCUMENT_SEEDS
        .iter()
        .map(|seed| KbDocument {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            kind: seed.kind,
            last_viewed: seed.last_viewed.to_string(),
            excerpt: seed.excerpt.to_string(),
        })
        .collect()
});

pub fn seed_documents() -> Vec<KbDocument> {
    DOCUMENT_CATALOG.clone()
}

pub fn find_document(id: &str) -> Option<&'static KbDocument> {
    DOCUMENT_CATALOG.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_documents() {
        assert_eq!(DOCUMENT_CATALOG.len(), 5);
        assert_eq!(find_document("doc-4").map(|d| d.kind), Some(DocKind::Guide));
        assert!(find_document("doc-9").is_none());
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&DocKind::Article).unwrap(), "\"article\"");
        assert_eq!(DocKind::Guide.to_string(), "guide");
    }
}

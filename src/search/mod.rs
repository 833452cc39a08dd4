//! Relevance-ranked document results for the assistant sidebar. Unlike the
//! answer classifier, rank groups are tested independently: a query can
//! accumulate entries from several groups before the final sort.

use serde::{Deserialize, Serialize};

use crate::kb::DocKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub kind: DocKind,
    /// Static score in [0, 100], used only for sort ordering.
    pub relevance: u8,
    pub excerpt: String,
}

struct ResultSeed {
    doc_id: &'static str,
    title: &'static str,
    kind: DocKind,
    relevance: u8,
    excerpt: &'static str,
}

impl ResultSeed {
    fn build(&self) -> SearchResult {
        SearchResult {
            id: self.doc_id.to_string(),
            title: self.title.to_string(),
            kind: self.kind,
            relevance: self.relevance,
            excerpt: self.excerpt.to_string(),
        }
    }
}

struct RankGroup {
    keywords: &'static [&'static str],
    entries: &'static [ResultSeed],
}

// The keyword sets deliberately differ from the answer table's: "error",
// "charged" and "notification" select an answer but rank no documents.
const RANK_TABLE: &[RankGroup] = &[
    RankGroup {
        keywords: &["password", "reset", "login"],
        entries: &[
            ResultSeed {
                doc_id: "doc-2",
                title: "Password Reset Instructions",
                kind: DocKind::Article,
                relevance: 95,
                excerpt: "Step-by-step guide to reset your password...",
            },
            ResultSeed {
                doc_id: "doc-1",
                title: "Getting Started Guide",
                kind: DocKind::Guide,
                relevance: 75,
                excerpt: "Account setup and security settings...",
            },
        ],
    },
    RankGroup {
        keywords: &["meeting", "schedule"],
        entries: &[
            ResultSeed {
                doc_id: "doc-3",
                title: "Meeting Scheduling FAQ",
                kind: DocKind::Doc,
                relevance: 92,
                excerpt: "Troubleshooting common scheduling issues...",
            },
            ResultSeed {
                doc_id: "doc-1",
                title: "Getting Started Guide",
                kind: DocKind::Guide,
                relevance: 70,
                excerpt: "How to schedule your first meeting...",
            },
        ],
    },
    RankGroup {
        keywords: &["billing", "payment", "refund"],
        entries: &[ResultSeed {
            doc_id: "doc-4",
            title: "Billing and Subscription Guide",
            kind: DocKind::Guide,
            relevance: 98,
            excerpt: "Understanding charges, refunds, and billing cycles...",
        }],
    },
    RankGroup {
        keywords: &["integration", "slack"],
        entries: &[ResultSeed {
            doc_id: "doc-5",
            title: "Integration Setup Documentation",
            kind: DocKind::Doc,
            relevance: 94,
            excerpt: "Setting up and troubleshooting integrations...",
        }],
    },
    RankGroup {
        keywords: &["recording", "transcription"],
        entries: &[ResultSeed {
            doc_id: "doc-1",
            title: "Getting Started Guide",
            kind: DocKind::Guide,
            relevance: 85,
            excerpt: "Recording and transcription features...",
        }],
    },
];

const DEFAULT_RESULTS: &[ResultSeed] = &[
    ResultSeed {
        doc_id: "doc-1",
        title: "Getting Started Guide",
        kind: DocKind::Guide,
        relevance: 60,
        excerpt: "General platform documentation...",
    },
    ResultSeed {
        doc_id: "doc-3",
        title: "Meeting Scheduling FAQ",
        kind: DocKind::Doc,
        relevance: 50,
        excerpt: "Frequently asked questions...",
    },
];

/// Accumulate entries for every matching group, fall back to the default set
/// when nothing matched, then sort descending by relevance. Total function;
/// equal scores keep accumulation order (stable sort).
pub fn rank_documents(query: &str) -> Vec<SearchResult> {
    let lower = query.to_lowercase();
    let mut results: Vec<SearchResult> = RANK_TABLE
        .iter()
        .filter(|g| g.keywords.iter().any(|k| lower.contains(k)))
        .flat_map(|g| g.entries.iter().map(ResultSeed::build))
        .collect();

    if results.is_empty() {
        results = DEFAULT_RESULTS.iter().map(ResultSeed::build).collect();
    }

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_and_scores(results: &[SearchResult]) -> Vec<(&str, u8)> {
        results.iter().map(|r| (r.id.as_str(), r.relevance)).collect()
    }

    #[test]
    fn forgot_password_ranks_reset_doc_first() {
        let results = rank_documents("I forgot my password");
        assert_eq!(ids_and_scores(&results), vec![("doc-2", 95), ("doc-1", 75)]);
    }

    #[test]
    fn unmatched_query_gets_low_relevance_defaults() {
        let results = rank_documents("random unrelated text");
        assert_eq!(ids_and_scores(&results), vec![("doc-1", 60), ("doc-3", 50)]);
    }

    #[test]
    fn groups_accumulate_independently() {
        let results = rank_documents("billing for my meeting recording");
        assert_eq!(
            ids_and_scores(&results),
            vec![("doc-4", 98), ("doc-3", 92), ("doc-1", 85), ("doc-1", 70)]
        );
    }

    #[test]
    fn output_is_sorted_descending() {
        for query in ["password meeting slack", "schedule", "", "charged"] {
            let results = rank_documents(query);
            assert!(results.windows(2).all(|w| w[0].relevance >= w[1].relevance));
        }
    }

    #[test]
    fn classifier_only_keywords_rank_nothing_extra() {
        // "charged" selects the billing answer but ranks no documents.
        let results = rank_documents("charged");
        assert_eq!(ids_and_scores(&results), vec![("doc-1", 60), ("doc-3", 50)]);
    }

    #[test]
    fn ranked_ids_resolve_in_the_catalog() {
        for query in ["password", "meeting", "billing", "slack", "recording", "???"] {
            for result in rank_documents(query) {
                assert!(crate::kb::find_document(&result.id).is_some());
            }
        }
    }
}

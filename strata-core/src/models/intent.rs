use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// The six query intent kinds.
///
/// Declaration order is load-bearing: intent classification resolves ties
/// by first-max over tables declared in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Factual,
    Analytical,
    Comparative,
    Procedural,
    Exploratory,
    Summarization,
}

impl IntentKind {
    /// All variants in tie-break order.
    pub const ALL: [IntentKind; 6] = [
        Self::Factual,
        Self::Analytical,
        Self::Comparative,
        Self::Procedural,
        Self::Exploratory,
        Self::Summarization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Analytical => "analytical",
            Self::Comparative => "comparative",
            Self::Procedural => "procedural",
            Self::Exploratory => "exploratory",
            Self::Summarization => "summarization",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of the collection a query wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryScope {
    Specific,
    Broad,
    Comprehensive,
}

impl QueryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Specific => "specific",
            Self::Broad => "broad",
            Self::Comprehensive => "comprehensive",
        }
    }
}

/// The classified purpose of a query. Per-query and ephemeral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryIntent {
    pub kind: IntentKind,
    pub confidence: Confidence,
    /// Capitalized words and quoted phrases found in the query.
    pub entities: Vec<String>,
    /// Stop-word-filtered query tokens.
    pub keywords: Vec<String>,
    /// Temporal expressions found in the query.
    pub temporal_aspects: Vec<String>,
    pub scope: QueryScope,
}

impl QueryIntent {
    /// The default intent for an empty or unclassifiable query.
    pub fn exploratory_default() -> Self {
        Self {
            kind: IntentKind::Exploratory,
            confidence: Confidence::new(0.3),
            entities: Vec::new(),
            keywords: Vec::new(),
            temporal_aspects: Vec::new(),
            scope: QueryScope::Broad,
        }
    }
}

/// A query widened with synonyms, related terms, and contextual variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandedQuery {
    pub original: String,
    /// Keywords plus their synonym substitutions. The term set the keyword
    /// score is computed against.
    pub expanded_terms: Vec<String>,
    /// Related terms from the static contextual table.
    pub related_terms: Vec<String>,
    /// Intent-specific rephrasings plus entity co-occurrence variants.
    pub contextual_queries: Vec<String>,
}

impl ExpandedQuery {
    /// All terms that count toward keyword matching: expanded plus related.
    pub fn all_terms(&self) -> impl Iterator<Item = &str> {
        self.expanded_terms
            .iter()
            .chain(self.related_terms.iter())
            .map(String::as_str)
    }
}

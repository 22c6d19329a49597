use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a retrieval should weight its signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Semantic,
    Keyword,
    Hybrid,
    GraphTraversal,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Keyword => "keyword",
            Self::Hybrid => "hybrid",
            Self::GraphTraversal => "graph_traversal",
        }
    }
}

/// Signal weights for the relevance blend.
///
/// Non-negative and deliberately not normalized to sum to 1 — only the
/// relative proportions matter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub semantic: f64,
    pub keyword: f64,
    pub temporal: f64,
    pub hierarchical: f64,
}

impl StrategyWeights {
    /// The baseline hybrid weighting.
    pub fn hybrid_baseline() -> Self {
        Self {
            semantic: 0.6,
            keyword: 0.3,
            temporal: 0.05,
            hierarchical: 0.05,
        }
    }
}

/// An inclusive time window filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Hard filters applied after scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyFilters {
    pub document_types: Option<Vec<String>>,
    pub time_range: Option<TimeRange>,
    /// Minimum chunk importance.
    pub min_importance: Option<f64>,
    /// Entity names that must appear in a chunk's text or tags.
    pub entities: Option<Vec<String>>,
}

/// A weighted scoring/filter configuration controlling relevance
/// computation. Per-query and ephemeral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalStrategy {
    pub kind: StrategyKind,
    pub weights: StrategyWeights,
    pub filters: StrategyFilters,
}

impl RetrievalStrategy {
    /// The baseline strategy before intent and scope adjustments.
    pub fn hybrid_default() -> Self {
        Self {
            kind: StrategyKind::Hybrid,
            weights: StrategyWeights::hybrid_baseline(),
            filters: StrategyFilters::default(),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::chunk::Chunk;
use super::entity::Entity;
use super::intent::QueryIntent;
use super::strategy::RetrievalStrategy;

/// The four component scores behind a blended relevance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Cosine similarity of query and chunk embeddings.
    pub semantic: f64,
    /// Fraction of expanded query terms found in the chunk.
    pub keyword: f64,
    /// Structure affinity: base + intent/kind match + importance.
    pub hierarchical: f64,
    /// Related-entity mention signal.
    pub context: f64,
}

/// One ranked, explainable retrieval hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub chunk: Chunk,
    pub scores: ScoreBreakdown,
    /// Weighted blend of the component scores.
    pub relevance: f64,
    /// Human-readable account of which signals drove the rank.
    pub explanation: String,
}

/// The full response of a context-aware retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextualResponse {
    /// Sorted by non-increasing relevance; every entry is above the
    /// relevance floor.
    pub results: Vec<RetrievalResult>,
    pub intent: QueryIntent,
    pub strategy: RetrievalStrategy,
    /// Graph neighborhood of the query.
    pub related_entities: Vec<Entity>,
    /// Whole-response observations: intent summary, entity highlights,
    /// document coverage, strong-match count.
    pub insights: Vec<String>,
}

//! ContextAwareRetriever: the staged retrieval pipeline.
//!
//! intent → expansion → strategy → graph neighborhood → per-chunk 4-signal
//! scoring → filter → rank → truncate → insights + explanations.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use strata_core::config::{RetrievalConfig, StrataConfig};
use strata_core::constants::RELEVANCE_FLOOR;
use strata_core::errors::StrataResult;
use strata_core::models::{
    Chunk, ContextualResponse, ExpandedQuery, RetrievalResult, ScoreBreakdown,
};
use strata_core::traits::EmbeddingProvider;
use strata_embeddings::cosine_similarity;
use strata_graph::KnowledgeGraph;
use strata_intent::IntentRecognizer;

use crate::{insights, scoring};

/// Owns the chunk collection, a per-chunk embedding cache, and the
/// collaborators it orchestrates. Construct one per collection; there is
/// no process-wide instance.
///
/// Single-writer: `add_chunks` must not run concurrently with another
/// ingestion call or an in-flight `retrieve` on the same instance.
pub struct ContextAwareRetriever {
    chunks: Vec<Chunk>,
    embeddings: HashMap<String, Vec<f32>>,
    embedder: Arc<dyn EmbeddingProvider>,
    recognizer: IntentRecognizer,
    graph: KnowledgeGraph,
    config: RetrievalConfig,
    traversal_depth: usize,
}

impl ContextAwareRetriever {
    /// Reads the retrieval and graph sections of the configuration; the
    /// embedding section sizes the provider and is the caller's concern.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, config: StrataConfig) -> Self {
        Self {
            chunks: Vec::new(),
            embeddings: HashMap::new(),
            embedder,
            recognizer: IntentRecognizer::new(),
            graph: KnowledgeGraph::new(),
            traversal_depth: config.graph.traversal_depth,
            config: config.retrieval,
        }
    }

    /// Append chunks, embedding and indexing each chunk id once. Chunks
    /// whose ids are already present are skipped, so re-ingesting the same
    /// batch is a no-op (idempotent per chunk id).
    ///
    /// All-or-nothing: an embedding failure leaves the collection, cache,
    /// and graph unchanged, so the failed batch can be retried whole.
    pub fn add_chunks(&mut self, chunks: &[Chunk]) -> StrataResult<()> {
        let mut added: Vec<Chunk> = Vec::new();
        let mut embedded: Vec<(String, Vec<f32>)> = Vec::new();
        for chunk in chunks {
            if self.embeddings.contains_key(&chunk.id)
                || embedded.iter().any(|(id, _)| *id == chunk.id)
            {
                continue;
            }
            let embedding = match &chunk.embedding {
                Some(precomputed) => precomputed.clone(),
                None => self.embedder.embed(&chunk.content)?,
            };
            embedded.push((chunk.id.clone(), embedding));
            added.push(chunk.clone());
        }
        if !added.is_empty() {
            self.embeddings.extend(embedded);
            self.graph.build(&added);
            debug!(
                added = added.len(),
                total = self.chunks.len() + added.len(),
                entities = self.graph.len(),
                "ingested chunks"
            );
            self.chunks.extend(added);
        }
        Ok(())
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The knowledge graph built from the ingested chunks.
    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    /// Run the full pipeline for a query. `max_results` defaults to the
    /// configured cap. An empty collection or an unmatched query yields an
    /// empty result list, not an error; errors surface only from the
    /// embedding provider.
    pub async fn retrieve(
        &self,
        query: &str,
        max_results: Option<usize>,
    ) -> StrataResult<ContextualResponse> {
        let limit = max_results.unwrap_or(self.config.max_results);

        let intent = self.recognizer.analyze_query(query);
        debug!(
            kind = %intent.kind,
            confidence = intent.confidence.value(),
            "classified intent"
        );

        let expanded = if self.config.query_expansion {
            self.recognizer.expand_query(query, &intent)
        } else {
            ExpandedQuery {
                original: query.trim().to_string(),
                expanded_terms: intent.keywords.clone(),
                related_terms: Vec::new(),
                contextual_queries: Vec::new(),
            }
        };
        let strategy = self.recognizer.determine_strategy(&expanded, &intent);
        let related = self
            .graph
            .find_related_entities(query, self.traversal_depth);
        debug!(
            strategy = strategy.kind.as_str(),
            related = related.len(),
            "derived strategy"
        );

        let query_embedding = self.embedder.embed(query)?;

        let mut scored: Vec<RetrievalResult> = Vec::new();
        for chunk in &self.chunks {
            // No cached embedding means the chunk never finished ingestion;
            // skip it silently.
            let Some(chunk_embedding) = self.embeddings.get(&chunk.id) else {
                continue;
            };
            if !scoring::passes_filters(chunk, &strategy.filters) {
                continue;
            }

            let scores = ScoreBreakdown {
                semantic: cosine_similarity(&query_embedding, chunk_embedding),
                keyword: scoring::keyword_score(chunk, &expanded),
                hierarchical: scoring::hierarchical_score(chunk, &intent),
                context: scoring::context_score(chunk, &related),
            };
            let relevance = scoring::blend(&scores, &strategy.weights);
            if relevance <= RELEVANCE_FLOOR {
                continue;
            }
            scored.push(RetrievalResult {
                chunk: chunk.clone(),
                scores,
                relevance,
                explanation: String::new(),
            });
        }

        scored.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
                .then(
                    b.chunk
                        .metadata
                        .importance
                        .partial_cmp(&a.chunk.metadata.importance)
                        .unwrap_or(Ordering::Equal),
                )
        });
        scored.truncate(limit);

        for result in &mut scored {
            result.explanation =
                insights::explain(&result.scores, result.chunk.metadata.importance);
        }
        let insights = insights::summarize(&intent, &related, &scored);

        info!(results = scored.len(), query_len = query.len(), "retrieval complete");
        Ok(ContextualResponse {
            results: scored,
            intent,
            strategy,
            related_entities: related,
            insights,
        })
    }
}

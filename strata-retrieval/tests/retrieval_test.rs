//! End-to-end retrieval pipeline tests over the shared sample corpus.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use strata_core::config::StrataConfig;
use strata_core::errors::{EmbeddingError, StrataResult};
use strata_core::models::IntentKind;
use strata_core::traits::EmbeddingProvider;
use strata_embeddings::HashedEmbedder;
use strata_retrieval::{CitationAwareRetriever, ContextAwareRetriever};

/// Wraps the default embedder and counts embed calls, for idempotence
/// checks.
struct CountingEmbedder {
    inner: HashedEmbedder,
    calls: AtomicUsize,
}

impl CountingEmbedder {
    fn new() -> Self {
        Self {
            inner: HashedEmbedder::default(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl EmbeddingProvider for CountingEmbedder {
    fn embed(&self, text: &str) -> StrataResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed(text)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Wraps the default embedder and fails one designated call, for batch
/// atomicity checks.
struct FlakyEmbedder {
    inner: HashedEmbedder,
    calls: AtomicUsize,
    fail_on_call: usize,
}

impl EmbeddingProvider for FlakyEmbedder {
    fn embed(&self, text: &str) -> StrataResult<Vec<f32>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.fail_on_call {
            return Err(EmbeddingError::EmbeddingFailed {
                reason: "transient provider failure".into(),
            }
            .into());
        }
        self.inner.embed(text)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

fn corpus_retriever() -> ContextAwareRetriever {
    let config = StrataConfig::default();
    let embedder = Arc::new(HashedEmbedder::from_config(&config.embedding));
    let mut retriever = ContextAwareRetriever::new(embedder, config);
    retriever
        .add_chunks(&test_fixtures::corpus_chunks())
        .expect("ingestion");
    retriever
}

#[tokio::test]
async fn results_are_sorted_and_above_the_floor() {
    let retriever = corpus_retriever();
    let response = retriever
        .retrieve("What is machine learning research?", None)
        .await
        .unwrap();

    assert_eq!(response.intent.kind, IntentKind::Factual);
    assert!(!response.results.is_empty());
    for pair in response.results.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
    for result in &response.results {
        assert!(result.relevance > 0.3);
        assert!(!result.explanation.is_empty());
    }
    assert!(!response.insights.is_empty());
}

#[tokio::test]
async fn empty_query_returns_exploratory_without_error() {
    let retriever = corpus_retriever();
    let response = retriever.retrieve("", None).await.unwrap();
    assert_eq!(response.intent.kind, IntentKind::Exploratory);
}

#[tokio::test]
async fn empty_collection_yields_empty_results() {
    let retriever = ContextAwareRetriever::new(
        Arc::new(HashedEmbedder::default()),
        StrataConfig::default(),
    );
    let response = retriever.retrieve("anything at all", None).await.unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn re_adding_chunks_embeds_each_id_once() {
    let embedder = Arc::new(CountingEmbedder::new());
    let mut retriever =
        ContextAwareRetriever::new(embedder.clone(), StrataConfig::default());

    let chunks = test_fixtures::corpus_chunks();
    retriever.add_chunks(&chunks).unwrap();
    retriever.add_chunks(&chunks).unwrap();

    assert_eq!(embedder.calls.load(Ordering::SeqCst), chunks.len());
    assert_eq!(retriever.chunk_count(), chunks.len());
}

#[test]
fn failed_batch_leaves_no_partial_state_and_can_be_retried() {
    let chunks = vec![
        test_fixtures::paragraph_chunk("doc_n1", "doc", "First paragraph about indexing."),
        test_fixtures::paragraph_chunk("doc_n2", "doc", "Second paragraph about ranking."),
    ];
    let embedder = Arc::new(FlakyEmbedder {
        inner: HashedEmbedder::default(),
        calls: AtomicUsize::new(0),
        fail_on_call: 1,
    });
    let mut retriever = ContextAwareRetriever::new(embedder, StrataConfig::default());

    // The second embed call fails; the whole batch must be rolled back.
    assert!(retriever.add_chunks(&chunks).is_err());
    assert_eq!(retriever.chunk_count(), 0);

    // A retry of the same batch ingests every chunk.
    retriever.add_chunks(&chunks).unwrap();
    assert_eq!(retriever.chunk_count(), 2);
}

#[tokio::test]
async fn traversal_depth_comes_from_the_graph_config() {
    let chunk = test_fixtures::paragraph_chunk(
        "brief_n1",
        "brief",
        "Jane Smith of Acme Inc directs the applied machine learning research program and its annual evaluation cycle.",
    );
    let query = "What does Jane Smith direct?";

    let mut shallow_config = StrataConfig::default();
    shallow_config.graph.traversal_depth = 0;
    let mut shallow =
        ContextAwareRetriever::new(Arc::new(HashedEmbedder::default()), shallow_config);
    shallow.add_chunks(std::slice::from_ref(&chunk)).unwrap();

    let mut deep =
        ContextAwareRetriever::new(Arc::new(HashedEmbedder::default()), StrataConfig::default());
    deep.add_chunks(std::slice::from_ref(&chunk)).unwrap();

    // Depth 0 stops at direct query matches; the default depth also walks
    // the strong person-organization edge.
    let shallow_related = shallow.retrieve(query, None).await.unwrap().related_entities;
    assert!(shallow_related.iter().any(|e| e.name == "Jane Smith"));
    assert!(shallow_related.iter().all(|e| e.name != "Acme Inc"));

    let deep_related = deep.retrieve(query, None).await.unwrap().related_entities;
    assert!(deep_related.iter().any(|e| e.name == "Acme Inc"));
}

#[tokio::test]
async fn max_results_caps_the_result_list() {
    let retriever = corpus_retriever();
    let response = retriever
        .retrieve("What is machine learning research?", Some(1))
        .await
        .unwrap();
    assert!(response.results.len() <= 1);
}

#[tokio::test]
async fn entity_queries_surface_the_graph_neighborhood() {
    let retriever = corpus_retriever();
    let response = retriever
        .retrieve("What does Jane Smith research at Acme Inc?", None)
        .await
        .unwrap();

    assert!(response
        .related_entities
        .iter()
        .any(|e| e.name == "Jane Smith"));
    assert!(response
        .insights
        .iter()
        .any(|i| i.contains("related entities")));
}

#[test]
fn citations_cover_the_research_document() {
    let mut retriever = CitationAwareRetriever::new();
    for (id, _, text) in test_fixtures::corpus() {
        retriever.index_document(id, text);
    }

    let answer = retriever.retrieve_with_citations("machine learning research group");
    assert!(!answer.citations.is_empty());
    assert_eq!(answer.citations[0].document_id, "research");
    assert!(answer.text.contains("[1]"));
}

//! Retrieval hot-path benchmark over the shared sample corpus.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use strata_core::config::StrataConfig;
use strata_embeddings::HashedEmbedder;
use strata_retrieval::ContextAwareRetriever;

fn bench_retrieve(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let runtime = tokio::runtime::Runtime::new().expect("runtime");

    let config = StrataConfig::default();
    let mut retriever = ContextAwareRetriever::new(
        Arc::new(HashedEmbedder::from_config(&config.embedding)),
        config,
    );
    retriever
        .add_chunks(&test_fixtures::corpus_chunks())
        .expect("ingestion");

    c.bench_function("retrieve_factual", |b| {
        b.iter(|| {
            runtime
                .block_on(retriever.retrieve("What is machine learning?", None))
                .expect("retrieve")
        })
    });

    c.bench_function("retrieve_entity_query", |b| {
        b.iter(|| {
            runtime
                .block_on(retriever.retrieve("What does Jane Smith research at Acme Inc?", None))
                .expect("retrieve")
        })
    });
}

fn bench_ingestion(c: &mut Criterion) {
    let chunks = test_fixtures::corpus_chunks();
    c.bench_function("add_chunks_corpus", |b| {
        b.iter(|| {
            let mut retriever = ContextAwareRetriever::new(
                Arc::new(HashedEmbedder::default()),
                StrataConfig::default(),
            );
            retriever.add_chunks(&chunks).expect("ingestion");
            retriever.chunk_count()
        })
    });
}

criterion_group!(benches, bench_retrieve, bench_ingestion);
criterion_main!(benches);

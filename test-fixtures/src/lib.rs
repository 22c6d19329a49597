//! Shared sample corpus and chunk builders for integration tests and
//! benches. Not part of the public surface; `publish = false`.

use strata_core::models::{Chunk, ChunkMetadata, NodeKind};
use strata_chunker::HierarchicalChunker;

/// A markdown research document with people, organizations, and concepts.
pub const RESEARCH_DOC: &str = "\
# Machine Learning Research

Dr. Jane Smith leads the machine learning research group at Acme Inc. \
Her research covers neural network training, model evaluation, and data quality.

## Methodology

The study applies a deep learning algorithm to a large annotated dataset. \
The methodology section describes the training process, the evaluation metrics, \
and the analysis of failure cases in detail.

## Results

The experiment shows that the new model improves retrieval accuracy. \
Acme Inc plans to publish the findings in 2025.
";

/// A markdown company overview with an organization and a second person.
pub const COMPANY_DOC: &str = "\
# Acme Inc Overview

Acme Inc is a technology company founded by John Carter. The company builds \
document retrieval systems, knowledge graph tooling, and indexing infrastructure.

## Products

- Strata index engine
- Citation toolkit
- Graph explorer
";

/// Plain text with no overlap with the query vocabulary of most tests.
pub const OFF_TOPIC_DOC: &str = "\
Slow-braised vegetables develop a deep flavor when cooked gently for hours.

A pinch of smoked paprika and a splash of vinegar brighten the final dish.
";

/// The full sample corpus as `(document_id, document_kind, text)` triples.
pub fn corpus() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("research", "md", RESEARCH_DOC),
        ("company", "md", COMPANY_DOC),
        ("cooking", "txt", OFF_TOPIC_DOC),
    ]
}

/// Chunk the whole sample corpus with default chunker settings.
pub fn corpus_chunks() -> Vec<Chunk> {
    let chunker = HierarchicalChunker::default();
    corpus()
        .into_iter()
        .flat_map(|(id, kind, text)| chunker.process_document(text, id, kind))
        .collect()
}

/// A minimal standalone paragraph chunk for unit-style tests.
pub fn paragraph_chunk(id: &str, document_id: &str, content: &str) -> Chunk {
    Chunk {
        id: id.to_string(),
        document_id: document_id.to_string(),
        content: content.to_string(),
        level: 1,
        metadata: ChunkMetadata {
            level: 1,
            parent_id: None,
            child_ids: Vec::new(),
            kind: NodeKind::Paragraph,
            importance: 0.5,
            keywords: Vec::new(),
            entities: Vec::new(),
        },
        context_window: String::new(),
        embedding: None,
    }
}

/// Same as [`paragraph_chunk`] with an explicit kind and importance.
pub fn chunk_with(
    id: &str,
    document_id: &str,
    content: &str,
    kind: NodeKind,
    importance: f64,
) -> Chunk {
    let mut chunk = paragraph_chunk(id, document_id, content);
    chunk.metadata.kind = kind;
    chunk.metadata.importance = importance;
    chunk
}

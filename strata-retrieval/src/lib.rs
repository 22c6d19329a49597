//! # strata-retrieval
//!
//! The retrieval orchestrators. [`ContextAwareRetriever`] owns the chunk
//! collection and its embedding cache and composes the chunker's output,
//! the knowledge graph, and the intent recognizer into ranked, explained
//! results. [`CitationAwareRetriever`] is its precision-oriented sibling:
//! a phrase n-gram index over sentences that answers with bracketed
//! inline citations.
//!
//! The pipeline is synchronous and in-memory; `retrieve` is the single
//! async suspension point. Ingestion is single-writer: callers must not
//! interleave `add_chunks` with an in-flight `retrieve` on the same
//! instance (mutate, then query).

pub mod citation;
pub mod engine;
pub mod insights;
pub mod scoring;

pub use citation::CitationAwareRetriever;
pub use engine::ContextAwareRetriever;

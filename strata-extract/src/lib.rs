//! # strata-extract
//!
//! Pattern-based entity extraction shared by the chunker and the knowledge
//! graph. Five pattern families: person names, organization suffixes,
//! dates, a concept dictionary, and location cues. Heuristic by design —
//! this is not an NER system.
//!
//! The two call sites differ only in what they keep: the graph keeps full
//! [`Entity`] records with confidence; the chunker keeps name tags.

pub mod extractor;
pub mod patterns;

pub use extractor::EntityExtractor;

//! # strata-graph
//!
//! In-memory knowledge graph built from chunk text. Entities are extracted
//! per chunk, merged by lowercase name, and connected by weighted
//! co-occurrence relationships stored as mirrored directed edge pairs.
//! Traversal is breadth-first, depth-bounded, and follows only strong
//! edges.
//!
//! Unknown ids return `None`; extraction that matches nothing is a normal
//! empty result. Nothing here returns an error.

pub mod knowledge_graph;
pub mod traversal;

pub use knowledge_graph::KnowledgeGraph;

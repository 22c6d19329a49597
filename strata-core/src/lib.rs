//! # strata-core
//!
//! Foundation crate for the Strata retrieval index.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StrataConfig;
pub use errors::{StrataError, StrataResult};
pub use models::{
    Chunk, ChunkMetadata, Confidence, DocumentNode, Entity, EntityKind, IntentKind, NodeKind,
    QueryIntent, QueryScope, RelationKind, Relationship, RetrievalStrategy, StrategyKind,
};
pub use traits::EmbeddingProvider;

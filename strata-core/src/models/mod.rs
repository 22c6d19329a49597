//! Data model for the Strata pipeline.
//!
//! Trees and chunks are created once at ingestion and treated as immutable
//! afterward. Entities and relationships are created incrementally and
//! merged, never replaced. Intents, strategies, and results are per-query
//! and ephemeral.

pub mod chunk;
pub mod citation;
pub mod confidence;
pub mod entity;
pub mod intent;
pub mod knowledge;
pub mod node;
pub mod relationship;
pub mod result;
pub mod strategy;

pub use chunk::{Chunk, ChunkMetadata};
pub use citation::{Citation, CitedAnswer, SentenceRef};
pub use confidence::Confidence;
pub use entity::{Entity, EntityKind};
pub use intent::{ExpandedQuery, IntentKind, QueryIntent, QueryScope};
pub use knowledge::{EntityContext, KnowledgeNode};
pub use node::{DocumentNode, NodeKind, NodeMetadata};
pub use relationship::{RelationKind, Relationship};
pub use result::{ContextualResponse, RetrievalResult, ScoreBreakdown};
pub use strategy::{RetrievalStrategy, StrategyFilters, StrategyKind, StrategyWeights, TimeRange};

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::relationship::Relationship;

/// A merged entity together with its connections and derived importance.
///
/// Assembled on demand from the graph; connections are the outgoing edges
/// of the entity's node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub entity: Entity,
    pub connections: Vec<Relationship>,
    /// Times the entity was observed across all chunks.
    pub mentions: usize,
    /// confidence + ln(mentions + 1) × 0.1 + type weight.
    pub importance: f64,
}

/// An entity plus its strong relationships and their evidence snippets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityContext {
    pub entity: Entity,
    /// Relationships with weight above the context floor.
    pub relationships: Vec<Relationship>,
    /// Evidence snippets from the retained relationships.
    pub snippets: Vec<String>,
}

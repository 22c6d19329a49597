use serde::{Deserialize, Serialize};

use super::node::NodeKind;

/// Hierarchy and enrichment metadata carried by a chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Depth of the originating node.
    pub level: usize,
    /// Id of the parent chunk within the same document, if any.
    pub parent_id: Option<String>,
    /// Ids of child chunks within the same document.
    pub child_ids: Vec<String>,
    /// Structural role of the originating node.
    pub kind: NodeKind,
    /// Importance in [0.0, 1.0].
    pub importance: f64,
    pub keywords: Vec<String>,
    /// Locally tagged entity names.
    pub entities: Vec<String>,
}

/// The atomic retrievable unit: a flattened projection of one tree node.
///
/// Chunk ids are unique per document and, because they embed the document
/// id, globally unique across a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub document_id: String,
    pub content: String,
    pub level: usize,
    pub metadata: ChunkMetadata,
    /// Parent content plus up to two truncated sibling excerpts. Extra
    /// scoring signal, not part of the retrievable text.
    pub context_window: String,
    /// Optionally precomputed by an ingestion collaborator; the retriever
    /// keeps its own cache either way.
    pub embedding: Option<Vec<f32>>,
}

impl Chunk {
    /// Word count of the chunk content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

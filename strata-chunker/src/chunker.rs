//! The chunking pipeline: parse structure → enrich → pre-order flatten.

use tracing::debug;

use strata_core::config::ChunkerConfig;
use strata_core::models::{Chunk, DocumentNode};

use crate::{enrich, flatten, structure};

/// Converts raw text (plain, markdown, or HTML-stripped) into ordered
/// chunks carrying hierarchy metadata and derived context windows.
///
/// Stateless between documents; safe to reuse across a corpus.
pub struct HierarchicalChunker {
    config: ChunkerConfig,
}

impl HierarchicalChunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Parse, enrich, and flatten one document.
    ///
    /// Empty or garbage content yields an empty chunk list; an unknown
    /// `document_kind` falls back to plain-text parsing. Never fails.
    pub fn process_document(
        &self,
        content: &str,
        document_id: &str,
        document_kind: &str,
    ) -> Vec<Chunk> {
        let mut tree = structure::parse(content, document_id, document_kind, &self.config);
        enrich::enrich(&mut tree, &self.config);
        let chunks = flatten::flatten(&tree, &self.config);
        debug!(
            document_id,
            document_kind,
            nodes = tree.nodes.len(),
            chunks = chunks.len(),
            "processed document"
        );
        chunks
    }

    /// Parse only, returning the owned structural tree. Useful for callers
    /// that want the hierarchy without the chunk projection.
    pub fn parse_tree(&self, content: &str, document_id: &str, document_kind: &str) -> DocumentNode {
        let mut tree = structure::parse(content, document_id, document_kind, &self.config);
        enrich::enrich(&mut tree, &self.config);
        tree.to_document_node()
    }
}

impl Default for HierarchicalChunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::models::NodeKind;

    #[test]
    fn header_and_paragraph_scenario() {
        let chunker = HierarchicalChunker::default();
        let chunks = chunker.process_document(
            "# Title\n\nSome paragraph about research methodology.",
            "doc1",
            "md",
        );

        assert_eq!(chunks.len(), 2);
        let header = &chunks[0];
        assert_eq!(header.metadata.kind, NodeKind::Header);
        assert_eq!(header.level, 1);

        let paragraph = &chunks[1];
        assert_eq!(paragraph.metadata.kind, NodeKind::Paragraph);
        assert_eq!(paragraph.metadata.parent_id.as_deref(), Some(header.id.as_str()));
    }

    #[test]
    fn garbage_content_never_panics() {
        let chunker = HierarchicalChunker::default();
        assert!(chunker.process_document("", "doc1", "md").is_empty());
        assert!(chunker.process_document("\n\n\n", "doc1", "txt").is_empty());
        let noise = chunker.process_document("%%%%", "doc1", "md");
        assert!(noise.len() <= 1);
    }

    #[test]
    fn parse_tree_exposes_hierarchy() {
        let chunker = HierarchicalChunker::default();
        let root = chunker.parse_tree("# A\n\ntext", "doc1", "md");
        assert_eq!(root.kind, NodeKind::Document);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(root.children[0].children[0].parent_id.as_deref(), Some(root.children[0].id.as_str()));
    }

    #[test]
    fn paragraph_entities_are_tagged() {
        let chunker = HierarchicalChunker::default();
        let chunks = chunker.process_document(
            "Dr. Jane Smith presented the machine learning results.",
            "doc1",
            "txt",
        );
        assert_eq!(chunks.len(), 1);
        let entities = &chunks[0].metadata.entities;
        assert!(entities.iter().any(|e| e == "Jane Smith"));
    }
}

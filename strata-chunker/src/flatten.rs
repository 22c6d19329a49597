//! Pre-order flattening of the parsed tree into chunks, plus context-window
//! derivation.

use strata_core::config::ChunkerConfig;
use strata_core::models::{Chunk, ChunkMetadata};

use crate::structure::Tree;
use crate::text;

/// Parent excerpt length in a context window.
const PARENT_EXCERPT_LEN: usize = 200;

/// Flatten the tree into chunks in pre-order, attaching context windows.
///
/// The synthetic root is never emitted, so a top-level chunk has no parent
/// id — every parent id that is set references a chunk in the same result.
pub fn flatten(tree: &Tree, config: &ChunkerConfig) -> Vec<Chunk> {
    tree.preorder()
        .into_iter()
        .map(|index| {
            let node = &tree.nodes[index];
            let parent = node.parent.filter(|&p| p != 0);

            let metadata = ChunkMetadata {
                level: node.level,
                parent_id: parent.map(|p| tree.nodes[p].id.clone()),
                child_ids: node
                    .children
                    .iter()
                    .map(|&c| tree.nodes[c].id.clone())
                    .collect(),
                kind: node.kind,
                importance: node.metadata.importance,
                keywords: node.metadata.keywords.clone(),
                entities: node.metadata.entities.clone(),
            };

            Chunk {
                id: node.id.clone(),
                document_id: tree.document_id.clone(),
                content: node.content.clone(),
                level: node.level,
                metadata,
                context_window: context_window(tree, index, config),
                embedding: None,
            }
        })
        .collect()
}

/// Parent content plus up to `sibling_excerpts` truncated sibling excerpts:
/// the nearest preceding and following siblings under the same parent.
fn context_window(tree: &Tree, index: usize, config: &ChunkerConfig) -> String {
    let node = &tree.nodes[index];
    let mut parts: Vec<String> = Vec::new();

    if let Some(parent) = node.parent {
        let parent_node = &tree.nodes[parent];
        if !parent_node.content.is_empty() {
            parts.push(text::excerpt(&parent_node.content, PARENT_EXCERPT_LEN));
        }

        let siblings = &parent_node.children;
        if let Some(position) = siblings.iter().position(|&c| c == index) {
            let mut picked = 0usize;
            if position > 0 && picked < config.sibling_excerpts {
                let prev = &tree.nodes[siblings[position - 1]];
                parts.push(text::excerpt(&prev.content, config.sibling_excerpt_len));
                picked += 1;
            }
            if position + 1 < siblings.len() && picked < config.sibling_excerpts {
                let next = &tree.nodes[siblings[position + 1]];
                parts.push(text::excerpt(&next.content, config.sibling_excerpt_len));
            }
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich;
    use crate::structure;

    fn chunks_for(content: &str, kind: &str) -> Vec<Chunk> {
        let config = ChunkerConfig::default();
        let mut tree = structure::parse(content, "doc1", kind, &config);
        enrich::enrich(&mut tree, &config);
        flatten(&tree, &config)
    }

    #[test]
    fn ids_are_unique_and_parents_resolve() {
        let chunks = chunks_for(
            "# A\n\npara one\n\n## B\n\npara two\n\n# C\n\npara three",
            "md",
        );
        let ids: std::collections::HashSet<_> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), chunks.len());
        for chunk in &chunks {
            if let Some(parent) = &chunk.metadata.parent_id {
                assert!(ids.contains(parent.as_str()));
            }
        }
    }

    #[test]
    fn top_level_chunks_have_no_parent() {
        let chunks = chunks_for("Just a paragraph.", "txt");
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].metadata.parent_id.is_none());
    }

    #[test]
    fn context_window_includes_parent_and_siblings() {
        let chunks = chunks_for("# Section\n\nfirst para\n\nsecond para\n\nthird para", "md");
        let second = chunks
            .iter()
            .find(|c| c.content == "second para")
            .expect("second paragraph chunk");
        assert!(second.context_window.contains("Section"));
        assert!(second.context_window.contains("first para"));
        assert!(second.context_window.contains("third para"));
    }

    #[test]
    fn preorder_keeps_document_order() {
        let chunks = chunks_for("# A\n\npara a\n\n# B\n\npara b", "md");
        let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "para a", "B", "para b"]);
    }
}

//! petgraph-backed knowledge graph with name and id indexes.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use tracing::debug;
use uuid::Uuid;

use strata_core::constants::{
    CONCEPT_PAIR_BONUS, CONTEXT_WEIGHT_FLOOR, MAX_PROXIMITY_WEIGHT, MENTION_LOG_WEIGHT,
    PERSON_ORG_PAIR_BONUS,
};
use strata_core::models::{
    Chunk, Entity, EntityContext, EntityKind, KnowledgeNode, RelationKind, Relationship,
};
use strata_extract::EntityExtractor;

use crate::traversal;

/// A merged entity plus its observation count.
#[derive(Debug, Clone)]
pub struct GraphEntity {
    pub entity: Entity,
    /// Raw extraction occurrences merged into this node.
    pub mentions: usize,
}

pub(crate) type EntityGraph = StableGraph<GraphEntity, Relationship, Directed>;

/// The knowledge graph. Entities merge by lowercase name; every logical
/// relationship is two mirrored directed edges sharing one id.
///
/// Ingestion (`build`) is single-writer: do not interleave it with reads
/// on the same instance.
pub struct KnowledgeGraph {
    pub(crate) graph: EntityGraph,
    /// lowercase name → node, the merge index.
    name_index: HashMap<String, NodeIndex>,
    /// entity id → node.
    id_index: HashMap<String, NodeIndex>,
    extractor: EntityExtractor,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            name_index: HashMap::new(),
            id_index: HashMap::new(),
            extractor: EntityExtractor::new(),
        }
    }

    /// Extract candidate entities from raw text. The graph call site keeps
    /// the extractor's full confidence weighting.
    pub fn extract_entities(&self, text: &str, document_id: &str, chunk_id: &str) -> Vec<Entity> {
        self.extractor.extract(text, document_id, chunk_id)
    }

    /// Incorporate chunks into the graph. Incremental: entities already
    /// known by name are merged (alias union, max confidence, mention
    /// count), never replaced. Every co-occurring pair within a chunk
    /// yields one logical relationship; re-observed pairs keep the higher
    /// weight.
    pub fn build(&mut self, chunks: &[Chunk]) {
        for chunk in chunks {
            let extracted = self
                .extractor
                .extract(&chunk.content, &chunk.document_id, &chunk.id);
            if extracted.is_empty() {
                continue;
            }

            // Merge candidates into nodes; collect the distinct nodes seen
            // in this chunk for pair creation.
            let mut seen: Vec<NodeIndex> = Vec::new();
            for candidate in extracted {
                let index = self.merge_entity(candidate);
                if !seen.contains(&index) {
                    seen.push(index);
                }
            }

            // Quadratic in entities per chunk; fine at prototype scale.
            for i in 0..seen.len() {
                for j in (i + 1)..seen.len() {
                    self.relate_pair(seen[i], seen[j], chunk);
                }
            }
        }
        debug!(
            entities = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "graph build pass complete"
        );
    }

    fn merge_entity(&mut self, candidate: Entity) -> NodeIndex {
        let key = candidate.merge_key();
        if let Some(&index) = self.name_index.get(&key) {
            let node = &mut self.graph[index];
            node.mentions += 1;
            node.entity.confidence = node.entity.confidence.max(candidate.confidence);
            for alias in candidate.aliases {
                if !node.entity.aliases.contains(&alias) {
                    node.entity.aliases.push(alias);
                }
            }
            return index;
        }

        let id = candidate.id.clone();
        let index = self.graph.add_node(GraphEntity {
            entity: candidate,
            mentions: 1,
        });
        self.name_index.insert(key, index);
        self.id_index.insert(id, index);
        index
    }

    /// Create or strengthen the mirrored relationship between two nodes.
    fn relate_pair(&mut self, a: NodeIndex, b: NodeIndex, chunk: &Chunk) {
        let weight = self.pair_weight(a, b, &chunk.content);

        if let Some(edge) = self.graph.find_edge(a, b) {
            // Mirror edge exists too; raise both to the stronger weight.
            if self.graph[edge].weight < weight {
                self.graph[edge].weight = weight;
                if let Some(back) = self.graph.find_edge(b, a) {
                    self.graph[back].weight = weight;
                }
            }
            return;
        }

        let id = Uuid::new_v4().to_string();
        let snippet = snippet_of(&chunk.content);
        let forward = Relationship::new(
            id.clone(),
            self.graph[a].entity.id.clone(),
            self.graph[b].entity.id.clone(),
            RelationKind::RelatedTo,
            weight,
            snippet.clone(),
            chunk.document_id.clone(),
            chunk.id.clone(),
        );
        let backward = forward.mirrored();
        self.graph.add_edge(a, b, forward);
        self.graph.add_edge(b, a, backward);
    }

    /// Inverse-text-distance component (up to the proximity cap) plus
    /// kind-pair bonuses, clamped by `Relationship::new`.
    fn pair_weight(&self, a: NodeIndex, b: NodeIndex, content: &str) -> f64 {
        let lower = content.to_lowercase();
        let pos_a = lower.find(&self.graph[a].entity.merge_key());
        let pos_b = lower.find(&self.graph[b].entity.merge_key());

        let proximity = match (pos_a, pos_b) {
            (Some(x), Some(y)) if !content.is_empty() => {
                let distance = x.abs_diff(y) as f64;
                MAX_PROXIMITY_WEIGHT * (1.0 - (distance / content.len() as f64)).max(0.0)
            }
            _ => 0.0,
        };

        let kinds = (self.graph[a].entity.kind, self.graph[b].entity.kind);
        let bonus = match kinds {
            (EntityKind::Person, EntityKind::Organization)
            | (EntityKind::Organization, EntityKind::Person) => PERSON_ORG_PAIR_BONUS,
            (EntityKind::Concept, EntityKind::Concept) => CONCEPT_PAIR_BONUS,
            _ => 0.0,
        };

        proximity + bonus
    }

    /// Entities matching the query directly, widened by bounded traversal
    /// over strong edges. Deduplicated.
    pub fn find_related_entities(&self, query: &str, max_depth: usize) -> Vec<Entity> {
        traversal::find_related(self, query, max_depth)
    }

    /// Entity plus its strong relationships and evidence snippets.
    /// Unknown ids return `None`.
    pub fn get_entity_context(&self, entity_id: &str) -> Option<EntityContext> {
        let &index = self.id_index.get(entity_id)?;
        let relationships: Vec<Relationship> = self
            .graph
            .edges(index)
            .map(|e| e.weight().clone())
            .filter(|r| r.weight > CONTEXT_WEIGHT_FLOOR)
            .collect();
        let snippets = relationships.iter().map(|r| r.context.clone()).collect();
        Some(EntityContext {
            entity: self.graph[index].entity.clone(),
            relationships,
            snippets,
        })
    }

    /// The merged view of one entity: connections and derived importance.
    pub fn node(&self, entity_id: &str) -> Option<KnowledgeNode> {
        let &index = self.id_index.get(entity_id)?;
        Some(self.assemble_node(index))
    }

    pub(crate) fn assemble_node(&self, index: NodeIndex) -> KnowledgeNode {
        let graph_entity = &self.graph[index];
        let connections: Vec<Relationship> =
            self.graph.edges(index).map(|e| e.weight().clone()).collect();
        let importance = graph_entity.entity.confidence.value()
            + ((graph_entity.mentions + 1) as f64).ln() * MENTION_LOG_WEIGHT
            + graph_entity.entity.kind.type_weight();
        KnowledgeNode {
            entity: graph_entity.entity.clone(),
            connections,
            mentions: graph_entity.mentions,
            importance,
        }
    }

    /// All merged entities, in insertion order of their node indices.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.graph.node_weights().map(|g| &g.entity)
    }

    pub(crate) fn seed_nodes(&self, query_lower: &str, tokens: &[String]) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&i| {
                let entity = &self.graph[i].entity;
                let key = entity.merge_key();
                query_lower.contains(&key)
                    || tokens.iter().any(|t| entity.matches_term(t))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Directed edge count; one logical relationship counts twice.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

fn snippet_of(content: &str) -> String {
    const SNIPPET_LEN: usize = 160;
    if content.len() <= SNIPPET_LEN {
        return content.to_string();
    }
    let mut end = SNIPPET_LEN;
    while end > 0 && !content.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &content[..end])
}

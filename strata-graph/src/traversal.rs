//! Breadth-first, depth-bounded traversal over strong edges.

use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use strata_core::constants::TRAVERSAL_WEIGHT_FLOOR;
use strata_core::models::Entity;

use crate::knowledge_graph::KnowledgeGraph;

/// Alias-index direct matches for the query, then BFS following only
/// edges with weight above the traversal floor, up to `max_depth` hops.
pub fn find_related(graph: &KnowledgeGraph, query: &str, max_depth: usize) -> Vec<Entity> {
    let query_lower = query.to_lowercase();
    let tokens: Vec<String> = query_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 2)
        .map(str::to_string)
        .collect();

    let seeds = graph.seed_nodes(&query_lower, &tokens);
    if seeds.is_empty() {
        return Vec::new();
    }

    let mut visited: HashSet<NodeIndex> = seeds.iter().copied().collect();
    let mut queue: VecDeque<(NodeIndex, usize)> = seeds.iter().map(|&s| (s, 0)).collect();
    let mut related: Vec<Entity> = Vec::new();

    while let Some((index, depth)) = queue.pop_front() {
        related.push(graph.graph[index].entity.clone());
        if depth >= max_depth {
            continue;
        }
        for edge in graph.graph.edges(index) {
            if edge.weight().weight <= TRAVERSAL_WEIGHT_FLOOR {
                continue;
            }
            let next = edge.target();
            if visited.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    related
}

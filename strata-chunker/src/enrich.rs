//! Local enrichment: frequency keywords, entity name tags, and the chunk
//! importance blend.

use std::collections::HashMap;

use strata_core::config::ChunkerConfig;
use strata_core::constants::{
    ENTITY_COUNT_WEIGHT, HEADER_IMPORTANCE_BONUS, HEADER_LEVEL_DECAY, KEYWORD_DENSITY_WEIGHT,
    MIN_HEADER_IMPORTANCE,
};
use strata_core::models::NodeKind;
use strata_extract::EntityExtractor;

use crate::structure::Tree;
use crate::text;

/// Enrich every node of the tree in place.
pub fn enrich(tree: &mut Tree, config: &ChunkerConfig) {
    let extractor = EntityExtractor::new();
    for index in 1..tree.nodes.len() {
        let node = &tree.nodes[index];
        let keywords = extract_keywords(&node.content, config.max_keywords);
        let entities = tag_entities(&extractor, &node.content);
        let importance = importance(
            node.kind,
            node.level,
            &node.content,
            keywords.len(),
            entities.len(),
        );

        let node = &mut tree.nodes[index];
        node.metadata.keywords = keywords;
        node.metadata.entities = entities;
        node.metadata.importance = importance;
    }
}

/// Frequency-based keywords: terms longer than 3 chars occurring more than
/// once, top `max_keywords` by frequency (first-seen order breaks ties).
pub fn extract_keywords(content: &str, max_keywords: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for token in text::tokenize(content) {
        if token.len() <= 3 {
            continue;
        }
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    let mut ranked: Vec<(usize, usize, String)> = first_seen
        .into_iter()
        .enumerate()
        .filter_map(|(order, term)| {
            let count = counts[&term];
            (count > 1).then_some((count, order, term))
        })
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked
        .into_iter()
        .map(|(_, _, t)| t)
        .take(max_keywords)
        .collect()
}

/// Entity name tags via the shared extractor, deduplicated in order.
fn tag_entities(extractor: &EntityExtractor, content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for entity in extractor.extract(content, "local", "tag") {
        if !names.contains(&entity.name) {
            names.push(entity.name);
        }
    }
    names
}

/// The importance blend. Headers start from the level-decayed structural
/// base plus the header bonus; everything else starts neutral. Keyword
/// density and entity count add on top; the result clamps to [0.0, 1.0].
pub fn importance(
    kind: NodeKind,
    level: usize,
    content: &str,
    keyword_count: usize,
    entity_count: usize,
) -> f64 {
    let mut score = if kind == NodeKind::Header {
        let structural =
            (1.0 - (level.saturating_sub(1) as f64) * HEADER_LEVEL_DECAY).max(MIN_HEADER_IMPORTANCE);
        structural + HEADER_IMPORTANCE_BONUS
    } else {
        0.5
    };

    let words = content.split_whitespace().count().max(1);
    let density = keyword_count as f64 / words as f64;
    score += density * KEYWORD_DENSITY_WEIGHT;
    score += entity_count as f64 * ENTITY_COUNT_WEIGHT;

    score.clamp(0.0, 1.0)
}

//! The four component scores and their weighted blend.

use strata_core::constants::{
    CONTEXT_MENTION_BONUS, HIERARCHICAL_BASE, HIERARCHICAL_IMPORTANCE_WEIGHT,
    MAX_KIND_AFFINITY_BONUS,
};
use strata_core::models::{
    Chunk, Entity, ExpandedQuery, IntentKind, NodeKind, QueryIntent, ScoreBreakdown,
    StrategyFilters, StrategyWeights,
};

/// Fraction of expanded query terms found in the chunk's text or keyword
/// tags. No terms means no keyword signal.
pub fn keyword_score(chunk: &Chunk, expanded: &ExpandedQuery) -> f64 {
    let terms: Vec<&str> = expanded.all_terms().collect();
    if terms.is_empty() {
        return 0.0;
    }
    let content = chunk.content.to_lowercase();
    let matched = terms
        .iter()
        .filter(|t| content.contains(**t) || chunk.metadata.keywords.iter().any(|k| k == *t))
        .count();
    matched as f64 / terms.len() as f64
}

/// Structure affinity: neutral base plus an intent/kind match bonus plus
/// an importance contribution, clamped to 1.0.
pub fn hierarchical_score(chunk: &Chunk, intent: &QueryIntent) -> f64 {
    let score = HIERARCHICAL_BASE
        + kind_affinity(intent.kind, chunk.metadata.kind)
        + chunk.metadata.importance * HIERARCHICAL_IMPORTANCE_WEIGHT;
    score.min(1.0)
}

/// How well a chunk's structural role serves an intent, capped at
/// `MAX_KIND_AFFINITY_BONUS`.
fn kind_affinity(intent: IntentKind, kind: NodeKind) -> f64 {
    let bonus: f64 = match (intent, kind) {
        (IntentKind::Factual, NodeKind::Paragraph | NodeKind::Sentence) => 0.4,
        (IntentKind::Factual, NodeKind::Header) => 0.1,
        (IntentKind::Analytical, NodeKind::Paragraph) => 0.4,
        (IntentKind::Analytical, NodeKind::Quote) => 0.2,
        (IntentKind::Comparative, NodeKind::Table) => 0.4,
        (IntentKind::Comparative, NodeKind::List) => 0.3,
        (IntentKind::Comparative, NodeKind::Paragraph) => 0.2,
        (IntentKind::Procedural, NodeKind::List | NodeKind::Code) => 0.4,
        (IntentKind::Procedural, NodeKind::Paragraph) => 0.1,
        (IntentKind::Exploratory, NodeKind::Header) => 0.3,
        (IntentKind::Exploratory, NodeKind::Paragraph) => 0.2,
        (IntentKind::Summarization, NodeKind::Header) => 0.4,
        (IntentKind::Summarization, NodeKind::Paragraph) => 0.1,
        _ => 0.0,
    };
    bonus.min(MAX_KIND_AFFINITY_BONUS)
}

/// Sum of per-entity mention bonuses scaled by entity confidence, for
/// every related entity the chunk mentions. Clamped to 1.0.
pub fn context_score(chunk: &Chunk, related: &[Entity]) -> f64 {
    if related.is_empty() {
        return 0.0;
    }
    let content = chunk.content.to_lowercase();
    let mut score = 0.0;
    for entity in related {
        let name = entity.name.to_lowercase();
        let mentioned = content.contains(name.as_str())
            || chunk.metadata.entities.iter().any(|e| e.to_lowercase() == name);
        if mentioned {
            score += CONTEXT_MENTION_BONUS * entity.confidence.value();
        }
    }
    score.min(1.0)
}

/// The relevance blend. The context signal rides on the strategy's
/// temporal weight slot; nothing ever modulates true temporal weighting.
pub fn blend(scores: &ScoreBreakdown, weights: &StrategyWeights) -> f64 {
    scores.semantic * weights.semantic
        + scores.keyword * weights.keyword
        + scores.hierarchical * weights.hierarchical
        + scores.context * weights.temporal
}

/// Hard filters applied per chunk. A chunk passes the entity filter when
/// it mentions at least one of the required names.
pub fn passes_filters(chunk: &Chunk, filters: &StrategyFilters) -> bool {
    if let Some(min) = filters.min_importance {
        if chunk.metadata.importance < min {
            return false;
        }
    }
    if let Some(required) = &filters.entities {
        let content = chunk.content.to_lowercase();
        let mentioned = required.iter().any(|name| {
            let name = name.to_lowercase();
            content.contains(name.as_str())
                || chunk.metadata.entities.iter().any(|e| e.to_lowercase() == name)
        });
        if !mentioned {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::models::{ChunkMetadata, Confidence, EntityKind, QueryScope};

    fn chunk(content: &str, kind: NodeKind, importance: f64) -> Chunk {
        Chunk {
            id: "doc_n1".into(),
            document_id: "doc".into(),
            content: content.into(),
            level: 1,
            metadata: ChunkMetadata {
                level: 1,
                parent_id: None,
                child_ids: Vec::new(),
                kind,
                importance,
                keywords: Vec::new(),
                entities: Vec::new(),
            },
            context_window: String::new(),
            embedding: None,
        }
    }

    fn intent(kind: IntentKind) -> QueryIntent {
        QueryIntent {
            kind,
            confidence: Confidence::new(0.6),
            entities: Vec::new(),
            keywords: Vec::new(),
            temporal_aspects: Vec::new(),
            scope: QueryScope::Broad,
        }
    }

    #[test]
    fn keyword_score_is_the_matched_fraction() {
        let c = chunk("training data improves the model", NodeKind::Paragraph, 0.5);
        let expanded = ExpandedQuery {
            original: "model training".into(),
            expanded_terms: vec!["model".into(), "training".into()],
            related_terms: vec!["inference".into(), "dataset".into()],
            contextual_queries: Vec::new(),
        };
        // 2 of 4 terms present.
        assert!((keyword_score(&c, &expanded) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn hierarchical_score_rewards_matching_structure() {
        let list = chunk("- step one\n- step two", NodeKind::List, 0.5);
        let paragraph = chunk("some prose", NodeKind::Paragraph, 0.5);
        let procedural = intent(IntentKind::Procedural);
        assert!(hierarchical_score(&list, &procedural) > hierarchical_score(&paragraph, &procedural));
        assert!(hierarchical_score(&list, &procedural) <= 1.0);
    }

    #[test]
    fn context_score_scales_with_entity_confidence() {
        let c = chunk("Jane Smith presented the results.", NodeKind::Paragraph, 0.5);
        let related = vec![Entity {
            id: "person_doc_c1_0".into(),
            name: "Jane Smith".into(),
            kind: EntityKind::Person,
            aliases: vec!["jane smith".into()],
            confidence: Confidence::new(0.7),
        }];
        assert!((context_score(&c, &related) - 0.2 * 0.7).abs() < 1e-9);
        assert_eq!(context_score(&c, &[]), 0.0);
    }

    #[test]
    fn blend_uses_the_temporal_slot_for_context() {
        let scores = ScoreBreakdown {
            semantic: 0.0,
            keyword: 0.0,
            hierarchical: 0.0,
            context: 1.0,
        };
        let weights = StrategyWeights {
            semantic: 0.6,
            keyword: 0.3,
            temporal: 0.05,
            hierarchical: 0.05,
        };
        assert!((blend(&scores, &weights) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn filters_gate_on_importance_and_entities() {
        let c = chunk("Acme Inc shipped the release.", NodeKind::Paragraph, 0.4);
        let mut filters = StrategyFilters::default();
        assert!(passes_filters(&c, &filters));

        filters.min_importance = Some(0.7);
        assert!(!passes_filters(&c, &filters));

        filters.min_importance = None;
        filters.entities = Some(vec!["Acme Inc".into()]);
        assert!(passes_filters(&c, &filters));
        filters.entities = Some(vec!["Globex".into()]);
        assert!(!passes_filters(&c, &filters));
    }
}

//! strata-graph integration tests: merge, mirror, traversal, context.

use strata_chunker::HierarchicalChunker;
use strata_core::models::{EntityKind, RelationKind};
use strata_graph::KnowledgeGraph;

fn chunks_from(texts: &[&str]) -> Vec<strata_core::models::Chunk> {
    let chunker = HierarchicalChunker::default();
    texts
        .iter()
        .enumerate()
        .flat_map(|(i, text)| chunker.process_document(text, &format!("doc{i}"), "txt"))
        .collect()
}

#[test]
fn duplicate_entities_merge_by_lowercase_name() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&chunks_from(&[
        "Dr. Jane Smith joined Acme Inc last year.",
        "Jane Smith now leads the research group.",
    ]));

    let janes: Vec<_> = graph
        .entities()
        .filter(|e| e.kind == EntityKind::Person && e.name == "Jane Smith")
        .collect();
    assert_eq!(janes.len(), 1, "same lowercase name must merge to one node");

    // Title boost from the first mention survives the merge (max rule).
    assert!(janes[0].confidence.value() >= 0.7);
    assert!(janes[0].aliases.contains(&"jane smith".to_string()));
    assert!(janes[0].aliases.contains(&"smith".to_string()));
}

#[test]
fn co_occurring_pair_yields_one_mirrored_relationship() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&chunks_from(&[
        "Jane Smith works at Acme Inc on retrieval systems.",
        "Acme Inc promoted Jane Smith to principal engineer.",
    ]));

    let jane = graph
        .entities()
        .find(|e| e.name == "Jane Smith")
        .expect("person node")
        .clone();
    let node = graph.node(&jane.id).expect("knowledge node");

    let to_acme: Vec<_> = node
        .connections
        .iter()
        .filter(|r| r.source == jane.id)
        .collect();
    assert_eq!(
        to_acme.len(),
        1,
        "re-observing a pair must strengthen, not duplicate"
    );
    assert_eq!(to_acme[0].kind, RelationKind::RelatedTo);
    assert!(to_acme[0].weight > 0.0);

    // Mirror invariant: the organization lists the same logical edge.
    let acme = graph
        .entities()
        .find(|e| e.kind == EntityKind::Organization)
        .expect("organization node")
        .clone();
    let acme_node = graph.node(&acme.id).expect("org knowledge node");
    let back = acme_node
        .connections
        .iter()
        .find(|r| r.target == jane.id)
        .expect("mirrored edge");
    assert_eq!(back.id, to_acme[0].id);
    assert_eq!(back.weight, to_acme[0].weight);
}

#[test]
fn person_org_pairs_get_the_affinity_bonus() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&chunks_from(&["Jane Smith works at Acme Inc."]));

    let jane = graph
        .entities()
        .find(|e| e.kind == EntityKind::Person)
        .unwrap()
        .clone();
    let node = graph.node(&jane.id).unwrap();
    let edge = node.connections.first().expect("one connection");
    // Proximity plus the person-organization bonus.
    assert!(edge.weight > 0.2);
    assert!(edge.weight <= 1.0);
}

#[test]
fn node_importance_grows_with_mentions() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&chunks_from(&[
        "Jane Smith wrote the report.",
        "Jane Smith presented the findings.",
        "Everyone thanked Jane Smith.",
        "Acme Inc archived it.",
    ]));

    let jane = graph.entities().find(|e| e.name == "Jane Smith").unwrap().clone();
    let node = graph.node(&jane.id).unwrap();
    assert_eq!(node.mentions, 3);
    // confidence + ln(4) * 0.1 + person weight
    let expected = node.entity.confidence.value() + (4.0f64).ln() * 0.1 + 0.2;
    assert!((node.importance - expected).abs() < 1e-9);
}

#[test]
fn find_related_entities_matches_aliases_and_respects_depth() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&chunks_from(&[
        "Jane Smith works at Acme Inc on machine learning research.",
    ]));

    let related = graph.find_related_entities("what does smith work on", 2);
    assert!(related.iter().any(|e| e.name == "Jane Smith"));

    // Unmatched query finds nothing — a normal empty result.
    assert!(graph.find_related_entities("unrelated gibberish", 2).is_empty());
}

#[test]
fn get_entity_context_filters_weak_edges() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&chunks_from(&["Jane Smith works at Acme Inc."]));

    let jane = graph.entities().find(|e| e.kind == EntityKind::Person).unwrap().clone();
    let context = graph.get_entity_context(&jane.id).expect("context");
    assert_eq!(context.entity.id, jane.id);
    for r in &context.relationships {
        assert!(r.weight > 0.3);
    }
    assert_eq!(context.relationships.len(), context.snippets.len());

    assert!(graph.get_entity_context("nope").is_none());
}

#[test]
fn empty_and_entity_free_chunks_are_fine() {
    let mut graph = KnowledgeGraph::new();
    graph.build(&[]);
    assert!(graph.is_empty());

    graph.build(&chunks_from(&["nothing notable here at all."]));
    // May or may not extract; must not panic either way.
    let _ = graph.len();
}

//! Query expansion from static synonym and related-term tables.

use strata_core::constants::MAX_CONTEXTUAL_QUERIES;
use strata_core::models::{ExpandedQuery, QueryIntent};

use crate::patterns::{CONTEXTUAL_TEMPLATES, RELATED_TERMS, SYNONYMS};

/// Widen a classified query. Expanded terms are the keywords plus their
/// synonyms; related terms come from the contextual table; contextual
/// queries are intent rephrasings plus entity co-occurrence variants,
/// capped at `MAX_CONTEXTUAL_QUERIES`.
pub fn expand(query: &str, intent: &QueryIntent) -> ExpandedQuery {
    let original = query.trim().to_string();

    let mut expanded_terms: Vec<String> = Vec::new();
    let push_term = |terms: &mut Vec<String>, term: &str| {
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    };

    for keyword in &intent.keywords {
        push_term(&mut expanded_terms, keyword);
        if let Some((_, synonyms)) = SYNONYMS.iter().find(|(word, _)| word == keyword) {
            for synonym in *synonyms {
                push_term(&mut expanded_terms, synonym);
            }
        }
    }

    let mut related_terms: Vec<String> = Vec::new();
    for keyword in &intent.keywords {
        if let Some((_, related)) = RELATED_TERMS.iter().find(|(word, _)| word == keyword) {
            for term in *related {
                if !expanded_terms.iter().any(|t| t == term) {
                    push_term(&mut related_terms, term);
                }
            }
        }
    }

    ExpandedQuery {
        contextual_queries: contextual_queries(&original, intent),
        original,
        expanded_terms,
        related_terms,
    }
}

fn contextual_queries(original: &str, intent: &QueryIntent) -> Vec<String> {
    let mut queries: Vec<String> = Vec::new();
    if original.is_empty() {
        return queries;
    }

    let bare = original.trim_end_matches(|c: char| c.is_ascii_punctuation());
    if let Some((_, templates)) = CONTEXTUAL_TEMPLATES
        .iter()
        .find(|(kind, _)| *kind == intent.kind)
    {
        for template in *templates {
            queries.push(template.replacen("{}", bare, 1));
        }
    }

    // Pairs of query entities form co-occurrence variants.
    for (i, a) in intent.entities.iter().enumerate() {
        for b in intent.entities.iter().skip(i + 1) {
            queries.push(format!("{a} {b}"));
        }
    }

    queries.truncate(MAX_CONTEXTUAL_QUERIES);
    queries
}

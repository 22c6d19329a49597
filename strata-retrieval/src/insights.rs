//! Per-result explanations and whole-response insight strings.

use std::collections::HashSet;

use strata_core::constants::{
    EXPLAIN_CONTEXT_THRESHOLD, EXPLAIN_HIERARCHICAL_THRESHOLD, EXPLAIN_IMPORTANCE_THRESHOLD,
    EXPLAIN_KEYWORD_THRESHOLD, EXPLAIN_SEMANTIC_THRESHOLD, STRONG_MATCH_THRESHOLD,
};
use strata_core::models::{Entity, QueryIntent, RetrievalResult, ScoreBreakdown};

/// Name the signals that drove a result's rank, from fixed thresholds.
pub fn explain(scores: &ScoreBreakdown, importance: f64) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if scores.semantic > EXPLAIN_SEMANTIC_THRESHOLD {
        parts.push("strong semantic similarity to the query");
    }
    if scores.keyword > EXPLAIN_KEYWORD_THRESHOLD {
        parts.push("matches most query terms");
    }
    if scores.hierarchical > EXPLAIN_HIERARCHICAL_THRESHOLD {
        parts.push("structurally well-suited to the intent");
    }
    if scores.context > EXPLAIN_CONTEXT_THRESHOLD {
        parts.push("mentions entities related to the query");
    }
    if importance > EXPLAIN_IMPORTANCE_THRESHOLD {
        parts.push("comes from a high-importance section");
    }
    if parts.is_empty() {
        "moderate relevance across all signals".to_string()
    } else {
        parts.join("; ")
    }
}

/// Whole-response observations: intent summary, entity highlights,
/// document coverage, strong-match count.
pub fn summarize(
    intent: &QueryIntent,
    related: &[Entity],
    results: &[RetrievalResult],
) -> Vec<String> {
    let mut insights = vec![format!(
        "query interpreted as {} ({:.2} confidence, {} scope)",
        intent.kind,
        intent.confidence.value(),
        intent.scope.as_str()
    )];

    if !related.is_empty() {
        let names: Vec<&str> = related.iter().take(3).map(|e| e.name.as_str()).collect();
        insights.push(format!("related entities: {}", names.join(", ")));
    }

    if !results.is_empty() {
        let documents: HashSet<&str> = results
            .iter()
            .map(|r| r.chunk.document_id.as_str())
            .collect();
        insights.push(format!(
            "{} results across {} documents",
            results.len(),
            documents.len()
        ));

        let strong = results
            .iter()
            .filter(|r| r.relevance > STRONG_MATCH_THRESHOLD)
            .count();
        if strong > 0 {
            insights.push(format!("{strong} strong matches"));
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::models::{Confidence, IntentKind, QueryScope};

    #[test]
    fn explanation_names_the_signals_above_threshold() {
        let scores = ScoreBreakdown {
            semantic: 0.9,
            keyword: 0.2,
            hierarchical: 0.65,
            context: 0.1,
        };
        let explanation = explain(&scores, 0.5);
        assert!(explanation.contains("semantic similarity"));
        assert!(explanation.contains("structurally"));
        assert!(!explanation.contains("query terms"));
    }

    #[test]
    fn weak_scores_get_the_fallback_explanation() {
        let explanation = explain(&ScoreBreakdown::default(), 0.3);
        assert_eq!(explanation, "moderate relevance across all signals");
    }

    #[test]
    fn summary_always_leads_with_the_intent() {
        let intent = QueryIntent {
            kind: IntentKind::Factual,
            confidence: Confidence::new(0.65),
            entities: Vec::new(),
            keywords: Vec::new(),
            temporal_aspects: Vec::new(),
            scope: QueryScope::Broad,
        };
        let insights = summarize(&intent, &[], &[]);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("factual"));
        assert!(insights[0].contains("0.65"));
    }
}

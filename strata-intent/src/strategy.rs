//! Retrieval strategy derivation from intent and expansion.

use strata_core::models::{
    ExpandedQuery, IntentKind, QueryIntent, QueryScope, RetrievalStrategy, StrategyKind,
    StrategyWeights,
};

/// Importance floor applied to summarization queries.
const SUMMARIZATION_MIN_IMPORTANCE: f64 = 0.7;

/// Map an intent to a weighted strategy, then nudge the weights for
/// scope and attach entity filters.
pub fn determine(expanded: &ExpandedQuery, intent: &QueryIntent) -> RetrievalStrategy {
    let mut strategy = RetrievalStrategy::hybrid_default();

    match intent.kind {
        IntentKind::Factual => {
            strategy.kind = StrategyKind::Keyword;
            strategy.weights = StrategyWeights {
                semantic: 0.4,
                keyword: 0.5,
                temporal: 0.05,
                hierarchical: 0.05,
            };
        }
        IntentKind::Analytical => {
            strategy.kind = StrategyKind::Semantic;
            strategy.weights = StrategyWeights {
                semantic: 0.65,
                keyword: 0.1,
                temporal: 0.05,
                hierarchical: 0.2,
            };
        }
        IntentKind::Comparative => {
            strategy.weights = StrategyWeights {
                semantic: 0.5,
                keyword: 0.4,
                temporal: 0.05,
                hierarchical: 0.05,
            };
        }
        IntentKind::Procedural => {
            strategy.weights = StrategyWeights {
                semantic: 0.4,
                keyword: 0.35,
                temporal: 0.05,
                hierarchical: 0.2,
            };
        }
        IntentKind::Exploratory => {
            strategy.kind = StrategyKind::GraphTraversal;
            strategy.weights = StrategyWeights {
                semantic: 0.6,
                keyword: 0.2,
                temporal: 0.05,
                hierarchical: 0.15,
            };
        }
        IntentKind::Summarization => {
            strategy.weights = StrategyWeights {
                semantic: 0.4,
                keyword: 0.15,
                temporal: 0.05,
                hierarchical: 0.4,
            };
            strategy.filters.min_importance = Some(SUMMARIZATION_MIN_IMPORTANCE);
        }
    }

    match intent.scope {
        QueryScope::Comprehensive => {
            strategy.weights.semantic += 0.1;
            strategy.weights.hierarchical += 0.1;
        }
        QueryScope::Specific => {
            strategy.weights.keyword += 0.2;
        }
        QueryScope::Broad => {}
    }

    // No terms to match means keyword weight is dead; fold it into the
    // semantic signal.
    if expanded.all_terms().next().is_none() {
        strategy.weights.semantic += strategy.weights.keyword;
        strategy.weights.keyword = 0.0;
    }

    if !intent.entities.is_empty() {
        strategy.filters.entities = Some(intent.entities.clone());
    }

    strategy
}

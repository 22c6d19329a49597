//! # strata-intent
//!
//! Classifies query intent, expands queries with synonyms and related
//! terms, and derives a weighted retrieval strategy. Pure text analysis:
//! no state, no errors — an empty query yields the default exploratory
//! intent.

pub mod classifier;
pub mod expansion;
pub mod patterns;
pub mod strategy;

use strata_core::models::{ExpandedQuery, QueryIntent, RetrievalStrategy};

/// The intent pipeline: analyze → expand → strategize.
///
/// Stateless; all tables are compile-time constants, so instances are
/// free to construct.
#[derive(Debug, Default)]
pub struct IntentRecognizer;

impl IntentRecognizer {
    pub fn new() -> Self {
        Self
    }

    /// Classify a query's intent, entities, keywords, temporal aspects,
    /// and scope.
    pub fn analyze_query(&self, query: &str) -> QueryIntent {
        classifier::analyze(query)
    }

    /// Widen a query with synonyms, related terms, and contextual
    /// variants.
    pub fn expand_query(&self, query: &str, intent: &QueryIntent) -> ExpandedQuery {
        expansion::expand(query, intent)
    }

    /// Derive the weighted scoring/filter configuration for a query.
    pub fn determine_strategy(
        &self,
        expanded: &ExpandedQuery,
        intent: &QueryIntent,
    ) -> RetrievalStrategy {
        strategy::determine(expanded, intent)
    }
}

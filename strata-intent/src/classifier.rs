//! Query intent classification.
//!
//! Pattern counting with a first-max scan: a later intent replaces the
//! current leader only with a strictly greater match count, so ties fall
//! to the earlier declaration.

use strata_core::constants::{
    BASE_INTENT_CONFIDENCE, COMPREHENSIVE_SCOPE_MIN_WORDS, LEXICAL_INDICATOR_CONFIDENCE,
    PATTERN_MATCH_CONFIDENCE, SPECIFIC_SCOPE_MAX_WORDS,
};
use strata_core::models::{Confidence, IntentKind, QueryIntent, QueryScope};

use crate::patterns::{
    COMPREHENSIVE_SCOPE_WORDS, INTENT_PATTERNS, QUOTED_PHRASE, SPECIFIC_SCOPE_WORDS, STOP_WORDS,
    STRONG_INDICATORS, TEMPORAL_COMPARATIVE, TEMPORAL_DATE, TEMPORAL_RELATIVE, TEMPORAL_YEAR,
};

/// Classify a query. Empty or whitespace queries yield the exploratory
/// default; queries with no pattern match keep the exploratory kind but
/// still carry extracted entities, keywords, and scope.
pub fn analyze(query: &str) -> QueryIntent {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return QueryIntent::exploratory_default();
    }

    let lower = trimmed.to_lowercase();

    let mut best_kind = IntentKind::Exploratory;
    let mut best_count = 0usize;
    for (kind, phrases) in INTENT_PATTERNS {
        let count = phrases.iter().filter(|p| lower.contains(*p)).count();
        if count > best_count {
            best_count = count;
            best_kind = *kind;
        }
    }

    let mut confidence = BASE_INTENT_CONFIDENCE;
    if best_count > 0 {
        confidence += PATTERN_MATCH_CONFIDENCE * best_count as f64;
        if leading_indicator(&lower, best_kind) {
            confidence += LEXICAL_INDICATOR_CONFIDENCE;
        }
    }

    QueryIntent {
        kind: best_kind,
        confidence: Confidence::new(confidence),
        entities: extract_entities(trimmed),
        keywords: extract_keywords(&lower),
        temporal_aspects: extract_temporal(&lower),
        scope: classify_scope(&lower),
    }
}

/// True when the query's first word is a strong indicator for `kind`.
fn leading_indicator(lower: &str, kind: IntentKind) -> bool {
    let Some(first) = lower.split_whitespace().next() else {
        return false;
    };
    let first = first.trim_matches(|c: char| !c.is_alphanumeric());
    STRONG_INDICATORS
        .iter()
        .filter(|(k, _)| *k == kind)
        .any(|(_, words)| words.contains(&first))
}

/// Capitalized words (minus stop words) and quoted phrases, deduplicated
/// in order of appearance.
fn extract_entities(query: &str) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();

    for token in query.split_whitespace() {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.len() < 2 {
            continue;
        }
        let starts_upper = word.chars().next().is_some_and(|c| c.is_uppercase());
        if !starts_upper || STOP_WORDS.contains(&word.to_lowercase().as_str()) {
            continue;
        }
        if !entities.iter().any(|e| e == word) {
            entities.push(word.to_string());
        }
    }

    for caps in QUOTED_PHRASE.captures_iter(query) {
        let phrase = caps[1].trim().to_string();
        if !phrase.is_empty() && !entities.iter().any(|e| *e == phrase) {
            entities.push(phrase);
        }
    }

    entities
}

/// Stop-word-filtered lowercase tokens longer than two characters.
fn extract_keywords(lower: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in lower.split(|c: char| !c.is_alphanumeric()) {
        if token.len() <= 2 || STOP_WORDS.contains(&token) {
            continue;
        }
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Dates, bare years, and relative or comparative temporal vocabulary.
fn extract_temporal(lower: &str) -> Vec<String> {
    let mut aspects: Vec<String> = Vec::new();
    let mut push = |s: String| {
        if !aspects.iter().any(|a| *a == s) {
            aspects.push(s);
        }
    };

    for m in TEMPORAL_DATE.find_iter(lower) {
        push(m.as_str().to_string());
    }
    for m in TEMPORAL_YEAR.find_iter(lower) {
        push(m.as_str().to_string());
    }

    let tokens: Vec<&str> = lower.split(|c: char| !c.is_alphanumeric()).collect();
    for word in TEMPORAL_RELATIVE.iter().chain(TEMPORAL_COMPARATIVE) {
        if tokens.contains(word) {
            push((*word).to_string());
        }
    }

    aspects
}

/// Scope vocabulary first, then word-count thresholds.
fn classify_scope(lower: &str) -> QueryScope {
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    if COMPREHENSIVE_SCOPE_WORDS
        .iter()
        .any(|w| tokens.contains(w))
    {
        return QueryScope::Comprehensive;
    }
    if SPECIFIC_SCOPE_WORDS.iter().any(|w| tokens.contains(w)) {
        return QueryScope::Specific;
    }
    if tokens.len() <= SPECIFIC_SCOPE_MAX_WORDS {
        QueryScope::Specific
    } else if tokens.len() > COMPREHENSIVE_SCOPE_MIN_WORDS {
        QueryScope::Comprehensive
    } else {
        QueryScope::Broad
    }
}

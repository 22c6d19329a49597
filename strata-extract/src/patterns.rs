//! Compiled patterns and term dictionaries for the five pattern families.

use std::sync::LazyLock;

use regex::Regex;

/// Person names: optional honorific, then two or more capitalized words.
pub static PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(Dr|Prof|Mr|Mrs|Ms)\.?\s+)?([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\b").unwrap()
});

/// Organization names: capitalized run ending in a legal/institutional suffix.
pub static ORGANIZATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([A-Z][A-Za-z&]*(?:\s+[A-Z][A-Za-z&]*)*)\s+(Inc|Corp|LLC|Ltd|Company|Corporation|Foundation|Institute|University)\b",
    )
    .unwrap()
});

/// Date sub-patterns: ISO, slashed numeric, written month, bare year.
pub static DATES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap(),
        Regex::new(
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
        )
        .unwrap(),
        Regex::new(r"\b(?:19|20)\d{2}\b").unwrap(),
    ]
});

/// Locations: capitalized name with a geographic suffix.
pub static LOCATION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(City|Valley|Island|Mountain|River|County|Bay|Coast)\b").unwrap()
});

/// Locations: preposition cue before a capitalized name.
pub static LOCATION_PREPOSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:in|at|near)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b").unwrap());

/// Fixed concept dictionary, matched case-insensitively. Multiword terms
/// first so they win over their substrings.
pub const CONCEPT_TERMS: &[&str] = &[
    "machine learning",
    "artificial intelligence",
    "deep learning",
    "neural network",
    "natural language processing",
    "information retrieval",
    "knowledge graph",
    "research methodology",
    "statistical analysis",
    "data science",
    "distributed systems",
    "software architecture",
    "cloud computing",
    "computer vision",
    "reinforcement learning",
    "data structure",
    "algorithm",
    "database",
    "encryption",
    "optimization",
];

/// Words whose presence marks a research context around a concept.
pub const RESEARCH_CONTEXT_WORDS: &[&str] = &[
    "research",
    "study",
    "analysis",
    "methodology",
    "theory",
    "experiment",
    "hypothesis",
    "findings",
];

/// Capitalized words that are never location candidates on their own.
pub const LOCATION_STOPWORDS: &[&str] = &[
    "The", "This", "That", "January", "February", "March", "April", "May", "June", "July",
    "August", "September", "October", "November", "December",
];

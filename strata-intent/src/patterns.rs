//! Static tables driving classification, expansion, and strategy.
//!
//! `INTENT_PATTERNS` is declared in `IntentKind` order; classification
//! scans it top to bottom and replaces the leader only on a strictly
//! greater count, so declaration order is the tie-break rule. Keep it that
//! way.

use std::sync::LazyLock;

use regex::Regex;

use strata_core::models::IntentKind;

/// Phrase patterns per intent, in tie-break order.
pub const INTENT_PATTERNS: &[(IntentKind, &[&str])] = &[
    (
        IntentKind::Factual,
        &[
            "what is",
            "what are",
            "who is",
            "who was",
            "when did",
            "when was",
            "where is",
            "define",
            "definition",
        ],
    ),
    (
        IntentKind::Analytical,
        &[
            "why",
            "how does",
            "how do",
            "explain",
            "analyze",
            "cause",
            "impact",
            "effect",
            "relationship between",
        ],
    ),
    (
        IntentKind::Comparative,
        &[
            "compare",
            "versus",
            " vs ",
            "difference between",
            "better",
            "worse",
            "similar",
            "contrast",
        ],
    ),
    (
        IntentKind::Procedural,
        &[
            "how to",
            "steps",
            "process",
            "procedure",
            "guide",
            "instructions",
            "implement",
            "build",
        ],
    ),
    (
        IntentKind::Exploratory,
        &[
            "tell me about",
            "overview",
            "explore",
            "learn about",
            "information on",
            "related to",
        ],
    ),
    (
        IntentKind::Summarization,
        &[
            "summarize",
            "summary",
            "key points",
            "main ideas",
            "tldr",
            "brief",
            "recap",
        ],
    ),
];

/// Leading interrogatives that strongly signal an intent. Each one present
/// at the start of the query adds a confidence bump.
pub const STRONG_INDICATORS: &[(IntentKind, &[&str])] = &[
    (IntentKind::Factual, &["what", "who", "when", "where"]),
    (IntentKind::Analytical, &["why", "how"]),
    (IntentKind::Comparative, &["compare"]),
    (IntentKind::Procedural, &["how"]),
    (IntentKind::Summarization, &["summarize"]),
];

/// Vocabulary that widens scope regardless of query length.
pub const COMPREHENSIVE_SCOPE_WORDS: &[&str] = &[
    "all",
    "every",
    "everything",
    "comprehensive",
    "complete",
    "entire",
    "overview",
];

/// Vocabulary that narrows scope regardless of query length.
pub const SPECIFIC_SCOPE_WORDS: &[&str] =
    &["specific", "specifically", "exactly", "precise", "particular"];

/// Static synonym table for per-keyword substitution.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("method", &["approach", "technique"]),
    ("result", &["outcome", "finding"]),
    ("show", &["demonstrate", "illustrate"]),
    ("important", &["significant", "critical"]),
    ("problem", &["issue", "challenge"]),
    ("improve", &["enhance", "optimize"]),
    ("analyze", &["examine", "evaluate"]),
    ("model", &["framework", "system"]),
    ("data", &["information", "dataset"]),
    ("research", &["study", "investigation"]),
    ("use", &["apply", "employ"]),
    ("create", &["build", "construct"]),
];

/// Static contextual related-term table.
pub const RELATED_TERMS: &[(&str, &[&str])] = &[
    ("machine", &["learning", "model", "training"]),
    ("learning", &["training", "neural", "model"]),
    ("research", &["methodology", "findings", "study"]),
    ("data", &["analysis", "processing", "quality"]),
    ("system", &["architecture", "design", "performance"]),
    ("security", &["encryption", "vulnerability", "authentication"]),
    ("network", &["protocol", "topology", "latency"]),
    ("document", &["retrieval", "indexing", "chunking"]),
];

/// Contextual query templates per intent, `{}` is the original query.
pub const CONTEXTUAL_TEMPLATES: &[(IntentKind, &[&str])] = &[
    (IntentKind::Factual, &["definition of {}", "facts about {}"]),
    (
        IntentKind::Analytical,
        &["reasons behind {}", "analysis of {}", "factors influencing {}"],
    ),
    (
        IntentKind::Comparative,
        &["comparison of {}", "alternatives to {}"],
    ),
    (
        IntentKind::Procedural,
        &["steps to {}", "guide for {}", "how to {}"],
    ),
    (
        IntentKind::Exploratory,
        &["overview of {}", "introduction to {}", "topics related to {}"],
    ),
    (
        IntentKind::Summarization,
        &["summary of {}", "key points of {}"],
    ),
];

/// Stop words excluded from keywords and entity candidates.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "how",
    "in", "is", "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "what",
    "when", "where", "which", "who", "why", "will", "with", "about", "does", "did", "do", "can",
    "could", "should", "would", "me", "my", "our", "your", "their",
];

/// Quoted phrases count as explicit entities.
pub static QUOTED_PHRASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// Explicit date expressions (ISO or slashed numeric).
pub static TEMPORAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap());

/// Bare years.
pub static TEMPORAL_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Relative temporal vocabulary.
pub const TEMPORAL_RELATIVE: &[&str] = &[
    "today",
    "yesterday",
    "tomorrow",
    "recently",
    "recent",
    "latest",
    "current",
    "now",
];

/// Ordering/comparison temporal vocabulary.
pub const TEMPORAL_COMPARATIVE: &[&str] =
    &["before", "after", "during", "since", "until", "between"];

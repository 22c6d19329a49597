// Algorithm constants shared across the pipeline. Tunable defaults that feed
// configuration live in `config::defaults`; the values here are part of the
// scoring contract and are not configurable.

// --- Chunker ---
/// Importance bonus applied to header chunks.
pub const HEADER_IMPORTANCE_BONUS: f64 = 0.3;
/// Keyword-density multiplier in the chunk importance blend.
pub const KEYWORD_DENSITY_WEIGHT: f64 = 0.2;
/// Per-entity bonus in the chunk importance blend.
pub const ENTITY_COUNT_WEIGHT: f64 = 0.05;
/// Importance floor for deeply nested headers.
pub const MIN_HEADER_IMPORTANCE: f64 = 0.3;
/// Per-level importance decay for headers.
pub const HEADER_LEVEL_DECAY: f64 = 0.2;

// --- Extraction ---
/// Base confidence for any pattern-extracted entity.
pub const BASE_EXTRACTION_CONFIDENCE: f64 = 0.5;
/// Confidence boost for title-prefixed person names.
pub const PERSON_TITLE_BOOST: f64 = 0.2;
/// Confidence boost for legal-suffixed organization names.
pub const ORGANIZATION_SUFFIX_BOOST: f64 = 0.3;
/// Confidence boost for concepts appearing in a research context.
pub const CONCEPT_CONTEXT_BOOST: f64 = 0.2;
/// Confidence boost for geographic-suffixed location names.
pub const LOCATION_SUFFIX_BOOST: f64 = 0.1;

// --- Graph ---
/// Log-mention multiplier in knowledge-node importance.
pub const MENTION_LOG_WEIGHT: f64 = 0.1;
/// Maximum weight contribution from co-occurrence proximity.
pub const MAX_PROXIMITY_WEIGHT: f64 = 0.4;
/// Weight bonus for person-organization co-occurrence.
pub const PERSON_ORG_PAIR_BONUS: f64 = 0.2;
/// Weight bonus for concept-concept co-occurrence.
pub const CONCEPT_PAIR_BONUS: f64 = 0.3;
/// Minimum edge weight followed during traversal.
pub const TRAVERSAL_WEIGHT_FLOOR: f64 = 0.5;
/// Minimum edge weight included in an entity context.
pub const CONTEXT_WEIGHT_FLOOR: f64 = 0.3;

// --- Intent ---
/// Base confidence before any pattern matches.
pub const BASE_INTENT_CONFIDENCE: f64 = 0.3;
/// Confidence gained per matched intent pattern.
pub const PATTERN_MATCH_CONFIDENCE: f64 = 0.2;
/// Confidence gained per strong lexical indicator.
pub const LEXICAL_INDICATOR_CONFIDENCE: f64 = 0.15;
/// Word count at or below which a query is Specific.
pub const SPECIFIC_SCOPE_MAX_WORDS: usize = 3;
/// Word count above which a query is Comprehensive.
pub const COMPREHENSIVE_SCOPE_MIN_WORDS: usize = 10;
/// Cap on intent-specific contextual query variants.
pub const MAX_CONTEXTUAL_QUERIES: usize = 5;

// --- Retrieval ---
/// Results at or below this relevance are dropped.
pub const RELEVANCE_FLOOR: f64 = 0.3;
/// Neutral base for the hierarchical score.
pub const HIERARCHICAL_BASE: f64 = 0.5;
/// Maximum intent/chunk-kind affinity bonus.
pub const MAX_KIND_AFFINITY_BONUS: f64 = 0.4;
/// Importance multiplier in the hierarchical score.
pub const HIERARCHICAL_IMPORTANCE_WEIGHT: f64 = 0.2;
/// Per-mention bonus (scaled by entity confidence) in the context score.
pub const CONTEXT_MENTION_BONUS: f64 = 0.2;
/// Relevance above which a result counts as a strong match in insights.
pub const STRONG_MATCH_THRESHOLD: f64 = 0.8;

// --- Explanations ---
pub const EXPLAIN_SEMANTIC_THRESHOLD: f64 = 0.7;
pub const EXPLAIN_KEYWORD_THRESHOLD: f64 = 0.5;
pub const EXPLAIN_HIERARCHICAL_THRESHOLD: f64 = 0.6;
pub const EXPLAIN_CONTEXT_THRESHOLD: f64 = 0.4;
pub const EXPLAIN_IMPORTANCE_THRESHOLD: f64 = 0.7;

// --- Citations ---
/// Shingle sizes used by the phrase index.
pub const PHRASE_MIN_WORDS: usize = 2;
pub const PHRASE_MAX_WORDS: usize = 5;
/// Minimum raw phrase length worth indexing.
pub const PHRASE_MIN_LEN: usize = 10;
/// Sentence spans cited per answer.
pub const CITATION_TOP_SPANS: usize = 3;

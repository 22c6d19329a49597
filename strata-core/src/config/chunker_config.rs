use serde::{Deserialize, Serialize};

use super::defaults;

/// Chunker subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// A node splits once its accumulated content exceeds this many characters.
    pub max_chunk_size: usize,
    /// Sentences shorter than this are dropped when splitting oversized
    /// plain-text paragraphs.
    pub min_chunk_size: usize,
    /// Maximum keywords attached to a chunk.
    pub max_keywords: usize,
    /// Length of each truncated sibling excerpt in a context window.
    pub sibling_excerpt_len: usize,
    /// Number of sibling excerpts included in a context window.
    pub sibling_excerpts: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: defaults::DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_size: defaults::DEFAULT_MIN_CHUNK_SIZE,
            max_keywords: defaults::DEFAULT_MAX_KEYWORDS,
            sibling_excerpt_len: defaults::DEFAULT_SIBLING_EXCERPT_LEN,
            sibling_excerpts: defaults::DEFAULT_SIBLING_EXCERPTS,
        }
    }
}

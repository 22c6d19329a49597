//! Hashed bag-of-words fallback provider.
//!
//! Buckets terms into a fixed-dimension vector by FNV-1a hash and weights
//! them by term frequency. No model files, no network — works anywhere,
//! and the same text always maps to the same vector.

use std::collections::HashMap;

use strata_core::config::defaults::DEFAULT_EMBEDDING_DIMENSIONS;
use strata_core::config::EmbeddingConfig;
use strata_core::errors::StrataResult;
use strata_core::traits::EmbeddingProvider;

/// Deterministic character-derived embedding provider.
///
/// Not semantically meaningful the way neural embeddings are, but shared
/// vocabulary still raises cosine similarity, which is enough for the
/// keyword-heavy scoring blend to behave sensibly.
pub struct HashedEmbedder {
    dimensions: usize,
}

impl HashedEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Provider sized by the embedding section of the configuration.
    pub fn from_config(config: &EmbeddingConfig) -> Self {
        Self::new(config.dimensions)
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms carry more signal than short, stopword-like ones.
            let weight = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * weight;
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSIONS)
    }
}

impl EmbeddingProvider for HashedEmbedder {
    fn embed(&self, text: &str) -> StrataResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> StrataResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-fallback"
    }
}

use crate::errors::StrataResult;

/// A pluggable text-embedding capability.
///
/// The retriever only assumes determinism per provider instance: embedding
/// the same text twice yields the same vector. The workspace default is a
/// deterministic character-derived placeholder, never semantically
/// meaningful; production callers inject a real provider here.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> StrataResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> StrataResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool {
        true
    }
}

//! # strata-embeddings
//!
//! The workspace's default [`EmbeddingProvider`]: a deterministic
//! hashed bag-of-words vectorizer, plus cosine similarity over the
//! resulting vectors. Always available; callers with a real neural
//! provider inject their own implementation instead.
//!
//! [`EmbeddingProvider`]: strata_core::traits::EmbeddingProvider

pub mod hashed;
pub mod similarity;

pub use hashed::HashedEmbedder;
pub use similarity::cosine_similarity;

//! Trait seams between subsystems.

mod embedding;

pub use embedding::EmbeddingProvider;

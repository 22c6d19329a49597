//! Error types for the Strata workspace.
//!
//! The pipeline degrades instead of failing: malformed input yields a
//! minimal structure, unknown ids yield `None`, and a query that matches
//! nothing yields an empty result list. The variants here cover the
//! remaining genuine failure conditions — provider-contract violations and
//! configuration parsing.

mod embedding_error;
mod retrieval_error;

pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the Strata workspace.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the workspace.
pub type StrataResult<T> = Result<T, StrataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_error_converts_to_strata_error() {
        let err: StrataError = EmbeddingError::DimensionMismatch {
            expected: 256,
            actual: 128,
        }
        .into();
        assert!(err.to_string().contains("dimension mismatch"));
    }
}

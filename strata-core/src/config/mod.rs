//! Configuration for every subsystem, composed into [`StrataConfig`].
//!
//! Each struct is `#[serde(default)]` so a partial TOML file only overrides
//! the keys it names. Defaults live in one place: [`defaults`].

pub mod chunker_config;
pub mod defaults;
pub mod embedding_config;
pub mod graph_config;
pub mod retrieval_config;

pub use chunker_config::ChunkerConfig;
pub use embedding_config::EmbeddingConfig;
pub use graph_config::GraphConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::StrataResult;

/// Top-level configuration for the Strata pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    pub chunker: ChunkerConfig,
    pub graph: GraphConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
}

impl StrataConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(input: &str) -> StrataResult<Self> {
        Ok(toml::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = StrataConfig::default();
        assert_eq!(config.chunker.max_chunk_size, 512);
        assert_eq!(config.chunker.min_chunk_size, 100);
        assert_eq!(config.graph.traversal_depth, 2);
        assert_eq!(config.retrieval.max_results, 10);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = StrataConfig::from_toml(
            r#"
            [chunker]
            max_chunk_size = 1024

            [retrieval]
            max_results = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.chunker.max_chunk_size, 1024);
        assert_eq!(config.chunker.min_chunk_size, 100);
        assert_eq!(config.retrieval.max_results, 5);
        assert!(config.retrieval.query_expansion);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(StrataConfig::from_toml("chunker = 3").is_err());
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Default result cap for `retrieve`.
    pub max_results: usize,
    /// Enable query expansion before scoring.
    pub query_expansion: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::DEFAULT_MAX_RESULTS,
            query_expansion: defaults::DEFAULT_QUERY_EXPANSION,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge-graph subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Default maximum depth for related-entity traversal.
    pub traversal_depth: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            traversal_depth: defaults::DEFAULT_TRAVERSAL_DEPTH,
        }
    }
}

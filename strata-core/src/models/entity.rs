use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// The six recognized entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Organization,
    Concept,
    Location,
    Date,
    Topic,
}

impl EntityKind {
    /// All variants for iteration.
    pub const ALL: [EntityKind; 6] = [
        Self::Person,
        Self::Organization,
        Self::Concept,
        Self::Location,
        Self::Date,
        Self::Topic,
    ];

    /// Kind contribution to knowledge-node importance. Concepts and topics
    /// carry the most signal in a retrieval graph; dates the least.
    pub fn type_weight(&self) -> f64 {
        match self {
            Self::Concept | Self::Topic => 0.3,
            Self::Organization => 0.25,
            Self::Person => 0.2,
            Self::Location => 0.1,
            Self::Date => 0.05,
        }
    }

    /// String name matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Concept => "concept",
            Self::Location => "location",
            Self::Date => "date",
            Self::Topic => "topic",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized named or conceptual thing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Deterministic id: `{kind}_{document_id}_{chunk_id}_{index}`.
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    /// Lowercase variants of the name, used for duplicate detection and
    /// query matching.
    pub aliases: Vec<String>,
    pub confidence: Confidence,
}

impl Entity {
    /// The merge key: lowercase canonical name.
    pub fn merge_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether any alias (or the name itself) matches the given lowercase
    /// term.
    pub fn matches_term(&self, term_lower: &str) -> bool {
        self.name.to_lowercase() == term_lower
            || self.aliases.iter().any(|a| a == term_lower)
    }
}

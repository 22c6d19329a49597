use serde::{Deserialize, Serialize};

/// The six relationship kinds. Co-occurrence construction produces
/// `RelatedTo`; the remaining variants are surface for callers that insert
/// edges explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Mentions,
    RelatedTo,
    PartOf,
    Causes,
    Temporal,
    Spatial,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentions => "mentions",
            Self::RelatedTo => "related_to",
            Self::PartOf => "part_of",
            Self::Causes => "causes",
            Self::Temporal => "temporal",
            Self::Spatial => "spatial",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weighted, typed, directional association between two entities.
///
/// Every logical relationship is stored as a mirrored pair, one edge in
/// each direction, so both endpoints list the connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// UUID v4, shared by both directions of a mirrored pair.
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
    /// Association strength, clamped to [0.0, 1.0] at construction.
    pub weight: f64,
    /// Snippet of the text that evidenced the association.
    pub context: String,
    /// Document the evidence came from.
    pub document_id: String,
    /// Chunk the evidence came from.
    pub chunk_id: String,
}

impl Relationship {
    /// Clamp-and-construct.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
        weight: f64,
        context: impl Into<String>,
        document_id: impl Into<String>,
        chunk_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
            weight: weight.clamp(0.0, 1.0),
            context: context.into(),
            document_id: document_id.into(),
            chunk_id: chunk_id.into(),
        }
    }

    /// The same logical relationship pointing the other way.
    pub fn mirrored(&self) -> Self {
        Self {
            id: self.id.clone(),
            source: self.target.clone(),
            target: self.source.clone(),
            kind: self.kind,
            weight: self.weight,
            context: self.context.clone(),
            document_id: self.document_id.clone(),
            chunk_id: self.chunk_id.clone(),
        }
    }
}

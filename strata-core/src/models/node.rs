use serde::{Deserialize, Serialize};

/// Structural role of a node in the parsed document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Header,
    Paragraph,
    Sentence,
    List,
    Table,
    Code,
    Quote,
}

impl NodeKind {
    /// String name matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Sentence => "sentence",
            Self::List => "list",
            Self::Table => "table",
            Self::Code => "code",
            Self::Quote => "quote",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local enrichment signals attached to a node during parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Structural importance in [0.0, 1.0].
    pub importance: f64,
    /// Frequency-derived keywords.
    pub keywords: Vec<String>,
    /// Locally tagged entity names (string tags, no confidence).
    pub entities: Vec<String>,
}

/// An element of the parsed document tree. Children are owned; the parent
/// link is a weak reference by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Document-scoped node id, e.g. `doc1_n3`.
    pub id: String,
    pub content: String,
    pub kind: NodeKind,
    /// Nesting depth. Headers carry their markdown level; the root is 0.
    pub level: usize,
    pub children: Vec<DocumentNode>,
    pub parent_id: Option<String>,
    pub metadata: NodeMetadata,
}

impl DocumentNode {
    /// Create a leafless node with default metadata.
    pub fn new(id: impl Into<String>, content: impl Into<String>, kind: NodeKind, level: usize) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            kind,
            level,
            children: Vec::new(),
            parent_id: None,
            metadata: NodeMetadata::default(),
        }
    }

    /// Total node count of this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

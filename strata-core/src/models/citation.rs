use serde::{Deserialize, Serialize};

/// A sentence's position within an indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentenceRef {
    pub document_id: String,
    /// Zero-based sentence index within the document.
    pub sentence_index: usize,
}

/// One bracketed citation attached to an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// The bracketed marker number, starting at 1.
    pub marker: usize,
    pub document_id: String,
    pub sentence_index: usize,
    /// The cited sentence, for expandable preview.
    pub snippet: String,
    /// Token-overlap relevance of the cited sentence.
    pub relevance: f64,
}

/// Inline-cited answer text plus its expandable citation previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitedAnswer {
    /// Answer text with bracketed markers, e.g. `... [1] ... [2]`.
    pub text: String,
    pub citations: Vec<Citation>,
}

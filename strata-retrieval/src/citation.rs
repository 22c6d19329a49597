//! CitationAwareRetriever: a phrase n-gram index over sentences.
//!
//! Precision-oriented sibling of the context-aware engine. Indexing
//! shingles each sentence into 2 to 5 word phrases; retrieval scores
//! documents by phrase overlap, sentences by token overlap, and answers
//! with the top spans as bracketed inline citations.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use strata_chunker::text::{split_sentences, tokenize};
use strata_core::constants::{
    CITATION_TOP_SPANS, PHRASE_MAX_WORDS, PHRASE_MIN_LEN, PHRASE_MIN_WORDS,
};
use strata_core::models::{Citation, CitedAnswer, SentenceRef};

/// Sentence store plus phrase index. Construct one per collection;
/// indexing is single-writer like the core retriever.
#[derive(Debug, Default)]
pub struct CitationAwareRetriever {
    /// Document id → its sentences in order.
    sentences: HashMap<String, Vec<String>>,
    /// Normalized phrase → every sentence it occurs in.
    phrase_index: HashMap<String, Vec<SentenceRef>>,
}

impl CitationAwareRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a document into sentences and index every 2 to 5 word
    /// shingle longer than the minimum phrase length. Re-indexing a
    /// document id replaces its previous sentences.
    pub fn index_document(&mut self, document_id: &str, text: &str) {
        if let Some(old) = self.sentences.remove(document_id) {
            // Drop stale refs so replacement never leaves dangling indexes.
            if !old.is_empty() {
                for refs in self.phrase_index.values_mut() {
                    refs.retain(|r| r.document_id != document_id);
                }
                self.phrase_index.retain(|_, refs| !refs.is_empty());
            }
        }

        let sentences = split_sentences(text);
        for (index, sentence) in sentences.iter().enumerate() {
            let tokens = tokenize(sentence);
            for size in PHRASE_MIN_WORDS..=PHRASE_MAX_WORDS {
                if tokens.len() < size {
                    break;
                }
                for window in tokens.windows(size) {
                    let phrase = window.join(" ");
                    if phrase.len() <= PHRASE_MIN_LEN {
                        continue;
                    }
                    let sentence_ref = SentenceRef {
                        document_id: document_id.to_string(),
                        sentence_index: index,
                    };
                    let refs = self.phrase_index.entry(phrase).or_default();
                    if !refs.contains(&sentence_ref) {
                        refs.push(sentence_ref);
                    }
                }
            }
        }
        debug!(
            document_id,
            sentences = sentences.len(),
            phrases = self.phrase_index.len(),
            "indexed document"
        );
        self.sentences.insert(document_id.to_string(), sentences);
    }

    pub fn document_count(&self) -> usize {
        self.sentences.len()
    }

    /// Answer a query with the top cited sentence spans. No phrase
    /// overlap means an empty answer, not an error.
    pub fn retrieve_with_citations(&self, query: &str) -> CitedAnswer {
        let tokens = tokenize(query);
        if tokens.is_empty() || self.sentences.is_empty() {
            return CitedAnswer {
                text: String::new(),
                citations: Vec::new(),
            };
        }

        // Phrase-overlap document scoring; candidate sentences fall out of
        // the same lookups.
        let mut document_scores: HashMap<&str, usize> = HashMap::new();
        let mut candidates: HashSet<&SentenceRef> = HashSet::new();
        for size in PHRASE_MIN_WORDS..=PHRASE_MAX_WORDS {
            if tokens.len() < size {
                break;
            }
            for window in tokens.windows(size) {
                let phrase = window.join(" ");
                if phrase.len() <= PHRASE_MIN_LEN {
                    continue;
                }
                if let Some(refs) = self.phrase_index.get(&phrase) {
                    for sentence_ref in refs {
                        *document_scores
                            .entry(sentence_ref.document_id.as_str())
                            .or_default() += 1;
                        candidates.insert(sentence_ref);
                    }
                }
            }
        }

        // Per-sentence token-overlap relevance.
        let query_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let mut spans: Vec<(&SentenceRef, &str, f64)> = Vec::new();
        for sentence_ref in candidates {
            let Some(sentence) = self
                .sentences
                .get(&sentence_ref.document_id)
                .and_then(|s| s.get(sentence_ref.sentence_index))
            else {
                continue;
            };
            let sentence_tokens = tokenize(sentence);
            let overlap: HashSet<&str> = sentence_tokens
                .iter()
                .map(String::as_str)
                .filter(|t| query_set.contains(t))
                .collect();
            let relevance = overlap.len() as f64 / query_set.len() as f64;
            if relevance > 0.0 {
                spans.push((sentence_ref, sentence.as_str(), relevance));
            }
        }

        // Sentence relevance first, then document phrase score, then
        // position for determinism.
        spans.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let score_a = document_scores.get(a.0.document_id.as_str()).copied();
                    let score_b = document_scores.get(b.0.document_id.as_str()).copied();
                    score_b.cmp(&score_a)
                })
                .then_with(|| a.0.document_id.cmp(&b.0.document_id))
                .then_with(|| a.0.sentence_index.cmp(&b.0.sentence_index))
        });
        spans.truncate(CITATION_TOP_SPANS);

        let mut text = String::new();
        let mut citations = Vec::new();
        for (marker, (sentence_ref, sentence, relevance)) in spans.into_iter().enumerate() {
            let marker = marker + 1;
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&format!("{sentence} [{marker}]"));
            citations.push(Citation {
                marker,
                document_id: sentence_ref.document_id.clone(),
                sentence_index: sentence_ref.sentence_index,
                snippet: sentence.to_string(),
                relevance,
            });
        }

        CitedAnswer { text, citations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed() -> CitationAwareRetriever {
        let mut retriever = CitationAwareRetriever::new();
        retriever.index_document(
            "ml",
            "Machine learning models require training data. \
             Training data quality determines model accuracy. \
             Unrelated filler sentence about weather patterns.",
        );
        retriever.index_document("cooking", "Slow braising develops deep flavor over hours.");
        retriever
    }

    #[test]
    fn short_shingles_are_not_indexed() {
        let mut retriever = CitationAwareRetriever::new();
        retriever.index_document("d", "a b c d.");
        // Every 2-5 gram here is at or under the minimum phrase length.
        assert!(retriever.phrase_index.is_empty());
    }

    #[test]
    fn citations_carry_consistent_markers() {
        let retriever = indexed();
        let answer = retriever.retrieve_with_citations("how does training data affect model accuracy");

        assert!(!answer.citations.is_empty());
        assert!(answer.citations.len() <= CITATION_TOP_SPANS);
        for (i, citation) in answer.citations.iter().enumerate() {
            assert_eq!(citation.marker, i + 1);
            assert!(answer.text.contains(&format!("[{}]", citation.marker)));
            assert!(answer.text.contains(citation.snippet.as_str()));
            assert!(citation.relevance > 0.0);
        }
    }

    #[test]
    fn best_span_has_the_highest_token_overlap() {
        let retriever = indexed();
        let answer = retriever.retrieve_with_citations("training data quality and model accuracy");
        let first = &answer.citations[0];
        assert_eq!(first.document_id, "ml");
        for citation in &answer.citations[1..] {
            assert!(citation.relevance <= first.relevance);
        }
    }

    #[test]
    fn unmatched_or_empty_queries_return_an_empty_answer() {
        let retriever = indexed();
        assert!(retriever.retrieve_with_citations("").citations.is_empty());
        let answer = retriever.retrieve_with_citations("zebra xylophone quantum");
        assert!(answer.text.is_empty());
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn reindexing_a_document_replaces_its_sentences() {
        let mut retriever = indexed();
        retriever.index_document("ml", "Completely different content about databases now.");
        let answer = retriever.retrieve_with_citations("training data quality model accuracy");
        assert!(answer
            .citations
            .iter()
            .all(|c| c.document_id != "ml" || c.snippet.contains("databases")));
    }
}

//! Small text primitives shared by the chunker and the citation retriever.

use std::sync::LazyLock;

use regex::Regex;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Split text into sentences on `.`, `!`, `?` followed by whitespace.
/// Abbreviation handling is deliberately naive.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let bytes = text.as_bytes();

    let mut i = 0usize;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let boundary = bytes
                .get(i + 1)
                .map(|&b| (b as char).is_whitespace())
                .unwrap_or(true);
            if boundary {
                let sentence = text[start..=i].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = i + 1;
            }
        }
        i += 1;
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Strip HTML tags, collapsing them to spaces.
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, " ").to_string()
}

/// Truncate to at most `max_len` bytes at a char boundary, appending an
/// ellipsis when anything was cut.
pub fn excerpt(text: &str, max_len: usize) -> String {
    let trimmed = text.trim();
    if trimmed.len() <= max_len {
        return trimmed.to_string();
    }
    let mut end = max_len;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &trimmed[..end])
}

/// Lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

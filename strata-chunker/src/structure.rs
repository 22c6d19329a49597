//! Structural parsing: raw text → document tree.
//!
//! Markdown headers open sections; fenced code, list runs, quote runs, and
//! table runs become typed nodes; paragraphs accumulate until they exceed
//! the configured chunk size. Plain text splits on blank lines, with
//! oversized paragraphs gaining sentence children. HTML is tag-stripped and
//! parsed as plain text.

use std::sync::LazyLock;

use regex::Regex;

use strata_core::config::ChunkerConfig;
use strata_core::models::{DocumentNode, NodeKind, NodeMetadata};

use crate::text;

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+\.)\s+").unwrap());

/// One node in the flat parse arena. Assembled into an owned
/// [`DocumentNode`] tree after parsing.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: String,
    pub content: String,
    pub kind: NodeKind,
    pub level: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub metadata: NodeMetadata,
}

/// Flat arena representation of a parsed document. Index 0 is the
/// synthetic root.
#[derive(Debug)]
pub struct Tree {
    pub document_id: String,
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    fn new(document_id: &str) -> Self {
        let root = TreeNode {
            id: format!("{document_id}_n0"),
            content: String::new(),
            kind: NodeKind::Document,
            level: 0,
            parent: None,
            children: Vec::new(),
            metadata: NodeMetadata::default(),
        };
        Self {
            document_id: document_id.to_string(),
            nodes: vec![root],
        }
    }

    fn push(&mut self, content: String, kind: NodeKind, level: usize, parent: usize) -> usize {
        let index = self.nodes.len();
        let id = format!("{}_n{}", self.document_id, index);
        self.nodes.push(TreeNode {
            id,
            content,
            kind,
            level,
            parent: Some(parent),
            children: Vec::new(),
            metadata: NodeMetadata::default(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    /// Pre-order indices, root excluded.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut stack: Vec<usize> = self.nodes[0].children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            for &child in self.nodes[index].children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// Assemble the owned tree.
    pub fn to_document_node(&self) -> DocumentNode {
        self.build(0)
    }

    fn build(&self, index: usize) -> DocumentNode {
        let raw = &self.nodes[index];
        DocumentNode {
            id: raw.id.clone(),
            content: raw.content.clone(),
            kind: raw.kind,
            level: raw.level,
            children: raw.children.iter().map(|&c| self.build(c)).collect(),
            parent_id: raw.parent.map(|p| self.nodes[p].id.clone()),
            metadata: raw.metadata.clone(),
        }
    }
}

/// Parse `content` into a tree according to `document_kind`.
///
/// Unknown kinds fall back to plain text. Never fails; unparseable input
/// yields a root-only tree.
pub fn parse(content: &str, document_id: &str, document_kind: &str, config: &ChunkerConfig) -> Tree {
    match document_kind.to_lowercase().as_str() {
        "md" | "markdown" => parse_markdown(content, document_id, config),
        "html" | "htm" => {
            let stripped = text::strip_html(content);
            parse_plain(&stripped, document_id, config)
        }
        _ => parse_plain(content, document_id, config),
    }
}

fn parse_markdown(content: &str, document_id: &str, config: &ChunkerConfig) -> Tree {
    let mut tree = Tree::new(document_id);
    // Stack of (markdown header level, node index) for open sections.
    let mut sections: Vec<(usize, usize)> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut block_kind: Option<NodeKind> = None;
    let mut in_fence = false;

    let parent_of = |sections: &[(usize, usize)]| sections.last().map(|&(_, i)| i).unwrap_or(0);

    macro_rules! flush_paragraph {
        () => {
            if !paragraph.is_empty() {
                let parent = parent_of(&sections);
                let level = tree.nodes[parent].level + 1;
                tree.push(paragraph.join(" "), NodeKind::Paragraph, level, parent);
                paragraph.clear();
            }
        };
    }
    macro_rules! flush_block {
        () => {
            if let Some(kind) = block_kind.take() {
                if !block.is_empty() {
                    let parent = parent_of(&sections);
                    let level = tree.nodes[parent].level + 1;
                    tree.push(block.join("\n"), kind, level, parent);
                    block.clear();
                }
            }
        };
    }

    for line in content.lines() {
        let trimmed = line.trim_end();

        if trimmed.trim_start().starts_with("```") {
            if in_fence {
                // Closing fence: emit the accumulated code node.
                if !block.is_empty() {
                    let parent = parent_of(&sections);
                    let level = tree.nodes[parent].level + 1;
                    tree.push(block.join("\n"), NodeKind::Code, level, parent);
                    block.clear();
                }
                block_kind = None;
                in_fence = false;
            } else {
                flush_paragraph!();
                flush_block!();
                in_fence = true;
                block_kind = Some(NodeKind::Code);
            }
            continue;
        }
        if in_fence {
            block.push(trimmed);
            continue;
        }

        if let Some(caps) = HEADER.captures(trimmed) {
            flush_paragraph!();
            flush_block!();
            let header_level = caps[1].len();
            while sections
                .last()
                .is_some_and(|&(open_level, _)| open_level >= header_level)
            {
                sections.pop();
            }
            let parent = parent_of(&sections);
            let index = tree.push(caps[2].trim().to_string(), NodeKind::Header, header_level, parent);
            sections.push((header_level, index));
            continue;
        }

        let run_kind = if LIST_ITEM.is_match(trimmed) {
            Some(NodeKind::List)
        } else if trimmed.starts_with('>') {
            Some(NodeKind::Quote)
        } else if trimmed.starts_with('|') {
            Some(NodeKind::Table)
        } else {
            None
        };

        if let Some(kind) = run_kind {
            flush_paragraph!();
            if block_kind != Some(kind) {
                flush_block!();
                block_kind = Some(kind);
            }
            block.push(trimmed);
            continue;
        }

        flush_block!();

        if trimmed.is_empty() {
            flush_paragraph!();
            continue;
        }

        paragraph.push(trimmed.trim_start());
        // Over-long accumulations split into a fresh node.
        let accumulated: usize = paragraph.iter().map(|l| l.len() + 1).sum();
        if accumulated > config.max_chunk_size {
            flush_paragraph!();
        }
    }
    flush_paragraph!();
    flush_block!();

    tree
}

fn parse_plain(content: &str, document_id: &str, config: &ChunkerConfig) -> Tree {
    let mut tree = Tree::new(document_id);

    for paragraph in content.split("\n\n") {
        let normalized = paragraph
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if normalized.is_empty() {
            continue;
        }

        let index = tree.push(normalized.clone(), NodeKind::Paragraph, 1, 0);

        // Oversized paragraphs gain sentence granularity; only sentences
        // of substance survive the split.
        if normalized.len() > config.max_chunk_size {
            for sentence in text::split_sentences(&normalized) {
                if sentence.len() > config.min_chunk_size {
                    tree.push(sentence, NodeKind::Sentence, 2, index);
                }
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChunkerConfig {
        ChunkerConfig::default()
    }

    #[test]
    fn markdown_headers_open_sections() {
        let tree = parse("# Title\n\nSome text.\n\n## Sub\n\nMore text.", "d", "md", &config());
        let root_children = &tree.nodes[0].children;
        assert_eq!(root_children.len(), 1); // only the H1
        let h1 = &tree.nodes[root_children[0]];
        assert_eq!(h1.kind, NodeKind::Header);
        assert_eq!(h1.level, 1);
        // H1 owns the paragraph and the H2; the H2 owns its paragraph.
        assert_eq!(h1.children.len(), 2);
    }

    #[test]
    fn sibling_header_closes_section() {
        let tree = parse("## A\n\ntext a\n\n## B\n\ntext b", "d", "md", &config());
        assert_eq!(tree.nodes[0].children.len(), 2);
    }

    #[test]
    fn fenced_code_becomes_code_node() {
        let tree = parse("# T\n\n```\nlet x = 1;\n```", "d", "md", &config());
        assert!(tree.nodes.iter().any(|n| n.kind == NodeKind::Code && n.content.contains("let x")));
    }

    #[test]
    fn list_run_becomes_one_node() {
        let tree = parse("- one\n- two\n- three", "d", "md", &config());
        let lists: Vec<_> = tree.nodes.iter().filter(|n| n.kind == NodeKind::List).collect();
        assert_eq!(lists.len(), 1);
        assert!(lists[0].content.contains("two"));
    }

    #[test]
    fn empty_content_yields_root_only() {
        let tree = parse("", "d", "md", &config());
        assert_eq!(tree.nodes.len(), 1);
        assert!(tree.preorder().is_empty());
    }

    #[test]
    fn unknown_kind_falls_back_to_plain() {
        let tree = parse("Just a paragraph.", "d", "docx", &config());
        assert_eq!(tree.nodes.len(), 2);
        assert_eq!(tree.nodes[1].kind, NodeKind::Paragraph);
    }

    #[test]
    fn oversized_plain_paragraph_gains_sentence_children() {
        let long_sentence = "This sentence is deliberately padded with words so that it comfortably exceeds the minimum chunk size threshold used by the splitter. ";
        let paragraph = long_sentence.repeat(5);
        let tree = parse(&paragraph, "d", "txt", &config());
        let sentences: Vec<_> = tree
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Sentence)
            .collect();
        assert!(!sentences.is_empty());
        for s in sentences {
            assert!(s.content.len() > config().min_chunk_size);
        }
    }

    #[test]
    fn html_is_stripped_before_parsing() {
        let tree = parse("<p>Hello world.</p>", "d", "html", &config());
        assert_eq!(tree.nodes.len(), 2);
        assert!(tree.nodes[1].content.contains("Hello world."));
    }
}

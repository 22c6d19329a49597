//! # strata-chunker
//!
//! Converts raw document text into a structural node tree, then flattens it
//! into ordered, metadata-annotated chunks with derived context windows.
//!
//! ```text
//! HierarchicalChunker
//! ├── structure   (markdown / plain / HTML-stripped → DocumentNode tree)
//! ├── enrich      (keywords, entity tags, importance blend)
//! ├── flatten     (pre-order walk → chunks)
//! └── text        (sentence splitting, excerpts — shared with citations)
//! ```
//!
//! Empty or garbage content yields a root-only tree and therefore an empty
//! chunk list; an unknown document kind falls back to plain-text parsing.
//! Nothing here returns an error.

pub mod chunker;
pub mod enrich;
pub mod flatten;
pub mod structure;
pub mod text;

pub use chunker::HierarchicalChunker;

// Single source of truth for all configurable default values.

// --- Chunker ---
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 512;
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 100;
pub const DEFAULT_MAX_KEYWORDS: usize = 10;
pub const DEFAULT_SIBLING_EXCERPT_LEN: usize = 120;
pub const DEFAULT_SIBLING_EXCERPTS: usize = 2;

// --- Graph ---
pub const DEFAULT_TRAVERSAL_DEPTH: usize = 2;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;

// --- Retrieval ---
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_QUERY_EXPANSION: bool = true;

//! Word-level suggestion diffing.
//!
//! This module turns an original string and a proposed rewrite into an
//! ordered list of reviewable chunks:
//!
//! - [`tokenize`]: lossless word/whitespace tokenization
//! - [`compute_diff`]: LCS diff over tokens into equal/insert/delete runs,
//!   with a cleanup pass that keeps one conceptual edit in one run pair
//! - [`classify`]: merges runs into typed [`Chunk`]s with stable ids and
//!   human-facing preview context

mod chunk;
mod engine;
mod token;

// Re-export main types
pub use chunk::{classify, Chunk, ChunkId, ChunkKind, IdGenerator};
pub use engine::{compute_diff, DiffKind, DiffOp};
pub use token::{concat, tokenize, Token};

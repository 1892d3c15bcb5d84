//! Redraft - word-level suggestion review for short-form text
//!
//! This crate provides the core logic for reviewing an AI-proposed rewrite
//! of a short text as independent word-level edits: diffing the proposal
//! against the original, tracking per-edit accept/reject decisions,
//! deterministically reconstructing the resulting text, and managing the
//! lifecycle of competing full-text drafts.
//!
//! It owns no UI, network, or storage. Upstream code supplies proposed
//! strings, a renderer consumes [`DisplaySegment`] lists, and a persistence
//! layer receives the committed plain text.

pub mod diff;
pub mod error;
pub mod review;
pub mod session;

// Re-export commonly used types
pub use diff::{
    classify, compute_diff, concat, tokenize, Chunk, ChunkId, ChunkKind, IdGenerator, Token,
};
pub use error::SuggestionError;
pub use review::{
    display_form, final_text, DecisionState, DecisionStore, DisplaySegment, SuggestionBatch,
};
pub use session::{CycleDirection, Draft, DraftInput, SuggestionSession};

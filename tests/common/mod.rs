//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use redraft::{
    Chunk, ChunkId, ChunkKind, DraftInput, IdGenerator, SuggestionBatch, SuggestionSession,
};

/// Build a batch for an (original, proposed) pair with a fixed id seed
pub fn test_batch(original: &str, proposed: &str) -> SuggestionBatch {
    SuggestionBatch::new(original, proposed, &mut IdGenerator::from_seed("test"))
}

/// Draft inputs with generated ids, one per proposed text
pub fn draft_inputs(texts: &[&str]) -> Vec<DraftInput> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| DraftInput {
            id: format!("draft-{i}"),
            proposed_text: (*text).to_string(),
        })
        .collect()
}

/// A session with a draft set already presented
pub fn presented_session(original: &str, texts: &[&str]) -> SuggestionSession {
    let mut session = SuggestionSession::new(original);
    session
        .present(&draft_inputs(texts))
        .expect("present from Empty");
    session
}

/// Ids of all edit (non-unchanged) chunks in order
pub fn edit_ids(chunks: &[Chunk]) -> Vec<ChunkId> {
    chunks
        .iter()
        .filter(|c| c.is_edit())
        .map(|c| c.id.clone())
        .collect()
}

/// The single edit chunk of the given kind, panicking if absent
pub fn edit_of_kind(chunks: &[Chunk], kind: ChunkKind) -> Chunk {
    chunks
        .iter()
        .find(|c| c.kind == kind)
        .unwrap_or_else(|| panic!("no {kind:?} chunk"))
        .clone()
}

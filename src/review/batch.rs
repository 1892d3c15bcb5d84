//! One diff computation's chunks plus their decision state.

use crate::diff::{classify, compute_diff, tokenize, Chunk, ChunkId, IdGenerator};

use super::decision::DecisionStore;
use super::reconstruct::{display_form, final_text, DisplaySegment};

/// The unit of supersession: the chunk list and decision map produced from
/// one `(original, proposed)` pair.
///
/// A new batch for the same editing slot replaces the previous one
/// wholesale; chunk ids are never shared across batches. Both the
/// single-suggestion flow and the multi-draft flow are built from this one
/// type, with draft sets holding one batch per alternative.
#[derive(Debug, Clone)]
pub struct SuggestionBatch {
    original: String,
    proposed: String,
    chunks: Vec<Chunk>,
    decisions: DecisionStore,
}

impl SuggestionBatch {
    /// Diff `proposed` against `original` and start every edit pending.
    pub fn new(original: &str, proposed: &str, ids: &mut IdGenerator) -> Self {
        let ops = compute_diff(&tokenize(original), &tokenize(proposed));
        let chunks = classify(&ops, ids);
        let decisions = DecisionStore::for_chunks(&chunks);
        tracing::debug!(
            seed = ids.seed(),
            chunks = chunks.len(),
            edits = chunks.iter().filter(|c| c.is_edit()).count(),
            "built suggestion batch"
        );
        Self {
            original: original.to_string(),
            proposed: proposed.to_string(),
            chunks,
            decisions,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn proposed(&self) -> &str {
        &self.proposed
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn decisions(&self) -> &DecisionStore {
        &self.decisions
    }

    pub fn accept(&mut self, id: &ChunkId) {
        self.decisions.accept(id);
    }

    pub fn reject(&mut self, id: &ChunkId) {
        self.decisions.reject(id);
    }

    pub fn reset(&mut self, id: &ChunkId) {
        self.decisions.reset(id);
    }

    pub fn accept_all(&mut self) {
        self.decisions.accept_all();
    }

    pub fn reject_all(&mut self) {
        self.decisions.reject_all();
    }

    /// Number of edit chunks still awaiting a decision.
    pub fn pending_count(&self) -> usize {
        self.decisions.pending_count()
    }

    /// True once every edit chunk has been accepted or rejected.
    pub fn is_fully_resolved(&self) -> bool {
        self.decisions.is_fully_resolved()
    }

    /// The plain text this batch resolves to under its current decisions.
    pub fn final_text(&self) -> String {
        final_text(&self.chunks, &self.decisions)
    }

    /// The display-annotated form for the renderer.
    pub fn display_form(&self) -> Vec<DisplaySegment> {
        display_form(&self.chunks, &self.decisions)
    }
}

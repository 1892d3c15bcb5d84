//! Per-chunk accept/reject decision tracking.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::diff::{Chunk, ChunkId};

/// A renderer-facing view of one chunk's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionState {
    Pending,
    Accepted,
    Rejected,
}

/// The accept/reject tri-state for one chunk.
///
/// Fields are private so the accepted/rejected flags can never both be set;
/// all writes go through [`DecisionStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    accepted: bool,
    rejected: bool,
}

impl Decision {
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn rejected(&self) -> bool {
        self.rejected
    }

    pub fn is_pending(&self) -> bool {
        !self.accepted && !self.rejected
    }

    pub fn state(&self) -> DecisionState {
        if self.accepted {
            DecisionState::Accepted
        } else if self.rejected {
            DecisionState::Rejected
        } else {
            DecisionState::Pending
        }
    }
}

/// Decision map for one batch's edit chunks.
///
/// Unchanged chunks never hold a meaningful decision: accept/reject on
/// their ids is a silent no-op. An id absent from the batch entirely is
/// also a no-op, but logged, since it means the caller holds a stale
/// reference to a superseded batch.
#[derive(Debug, Clone, Default)]
pub struct DecisionStore {
    decisions: HashMap<ChunkId, Decision>,
    unchanged: HashSet<ChunkId>,
}

impl DecisionStore {
    /// Build an all-pending store for the given chunk list.
    pub fn for_chunks(chunks: &[Chunk]) -> Self {
        let mut store = Self::default();
        for chunk in chunks {
            if chunk.is_edit() {
                store.decisions.insert(chunk.id.clone(), Decision::default());
            } else {
                store.unchanged.insert(chunk.id.clone());
            }
        }
        store
    }

    /// Mark the chunk accepted. Clears a prior rejection; touches no other id.
    pub fn accept(&mut self, id: &ChunkId) {
        self.set(id, "accept", |d| {
            d.accepted = true;
            d.rejected = false;
        });
    }

    /// Mark the chunk rejected. Clears a prior acceptance; touches no other id.
    pub fn reject(&mut self, id: &ChunkId) {
        self.set(id, "reject", |d| {
            d.accepted = false;
            d.rejected = true;
        });
    }

    /// Return the chunk to pending.
    pub fn reset(&mut self, id: &ChunkId) {
        self.set(id, "reset", |d| *d = Decision::default());
    }

    /// Accept every edit chunk in the batch.
    pub fn accept_all(&mut self) {
        for decision in self.decisions.values_mut() {
            decision.accepted = true;
            decision.rejected = false;
        }
    }

    /// Reject every edit chunk in the batch.
    pub fn reject_all(&mut self) {
        for decision in self.decisions.values_mut() {
            decision.accepted = false;
            decision.rejected = true;
        }
    }

    /// Current decision for `id` (pending for unchanged or unknown ids).
    pub fn decision(&self, id: &ChunkId) -> Decision {
        self.decisions.get(id).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, id: &ChunkId) -> bool {
        self.decision(id).is_pending()
    }

    /// Number of edit chunks still pending.
    pub fn pending_count(&self) -> usize {
        self.decisions.values().filter(|d| d.is_pending()).count()
    }

    /// True once every edit chunk has been accepted or rejected.
    pub fn is_fully_resolved(&self) -> bool {
        self.pending_count() == 0
    }

    fn set(&mut self, id: &ChunkId, operation: &str, write: impl FnOnce(&mut Decision)) {
        if let Some(decision) = self.decisions.get_mut(id) {
            write(decision);
        } else if !self.unchanged.contains(id) {
            // Stale reference to a superseded batch; harmless, but the
            // embedding layer should know about it.
            tracing::warn!(chunk_id = %id, operation, "decision for unknown chunk id ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{classify, compute_diff, tokenize, IdGenerator};

    fn store_for(original: &str, proposed: &str) -> (Vec<Chunk>, DecisionStore) {
        let ops = compute_diff(&tokenize(original), &tokenize(proposed));
        let chunks = classify(&ops, &mut IdGenerator::from_seed("test"));
        let store = DecisionStore::for_chunks(&chunks);
        (chunks, store)
    }

    fn first_edit_id(chunks: &[Chunk]) -> ChunkId {
        chunks.iter().find(|c| c.is_edit()).unwrap().id.clone()
    }

    #[test]
    fn test_all_chunks_start_pending() {
        let (chunks, store) = store_for("I love cats", "I really love dogs");
        for chunk in &chunks {
            assert!(store.is_pending(&chunk.id));
        }
    }

    #[test]
    fn test_accept_sets_exclusive_flags() {
        let (chunks, mut store) = store_for("I love cats", "I love dogs");
        let id = first_edit_id(&chunks);
        store.accept(&id);
        let decision = store.decision(&id);
        assert!(decision.accepted());
        assert!(!decision.rejected());
    }

    #[test]
    fn test_reject_after_accept_flips_cleanly() {
        let (chunks, mut store) = store_for("I love cats", "I love dogs");
        let id = first_edit_id(&chunks);
        store.accept(&id);
        store.reject(&id);
        let decision = store.decision(&id);
        assert!(!decision.accepted());
        assert!(decision.rejected());
    }

    #[test]
    fn test_accept_is_idempotent() {
        let (chunks, mut store) = store_for("I love cats", "I love dogs");
        let id = first_edit_id(&chunks);
        store.accept(&id);
        let once = store.decision(&id);
        store.accept(&id);
        assert_eq!(store.decision(&id), once);
    }

    #[test]
    fn test_deciding_one_chunk_leaves_others_untouched() {
        let (chunks, mut store) = store_for("a b c d e", "a x c y e");
        let edits: Vec<ChunkId> = chunks.iter().filter(|c| c.is_edit()).map(|c| c.id.clone()).collect();
        assert!(edits.len() >= 2);
        store.accept(&edits[0]);
        for other in &edits[1..] {
            assert!(store.is_pending(other));
        }
    }

    #[test]
    fn test_unchanged_chunk_decisions_are_noops() {
        let (chunks, mut store) = store_for("I love cats", "I love dogs");
        let unchanged = chunks.iter().find(|c| !c.is_edit()).unwrap().id.clone();
        store.accept(&unchanged);
        assert!(store.decision(&unchanged).is_pending());
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let (chunks, mut store) = store_for("I love cats", "I love dogs");
        let foreign = {
            let mut other = IdGenerator::from_seed("other-batch");
            other.next_id()
        };
        store.accept(&foreign);
        for chunk in &chunks {
            assert!(store.is_pending(&chunk.id));
        }
    }

    #[test]
    fn test_reset_returns_to_pending() {
        let (chunks, mut store) = store_for("I love cats", "I love dogs");
        let id = first_edit_id(&chunks);
        store.reject(&id);
        store.reset(&id);
        assert!(store.is_pending(&id));
    }

    #[test]
    fn test_accept_all_and_pending_count() {
        let (chunks, mut store) = store_for("a b c d e", "a x c y e");
        let edit_count = chunks.iter().filter(|c| c.is_edit()).count();
        assert_eq!(store.pending_count(), edit_count);
        assert!(!store.is_fully_resolved());
        store.accept_all();
        assert_eq!(store.pending_count(), 0);
        assert!(store.is_fully_resolved());
    }
}

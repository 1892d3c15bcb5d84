//! Per-text suggestion session: single-suggestion slot and draft lifecycle.

use serde::{Deserialize, Serialize};

use crate::diff::IdGenerator;
use crate::error::SuggestionError;
use crate::review::SuggestionBatch;

/// A proposed full-text alternative as supplied by the upstream generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInput {
    pub id: String,
    pub proposed_text: String,
}

/// One presented draft: the upstream proposal plus its review batch.
#[derive(Debug, Clone)]
pub struct Draft {
    pub id: String,
    pub proposed_text: String,
    pub batch: SuggestionBatch,
}

/// Direction for cycling through presented drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone)]
enum SessionState {
    /// No suggestion or draft set is active.
    Empty,
    /// A single proposed rewrite is under review.
    SuggestionActive(SuggestionBatch),
    /// A set of full-text drafts is being compared.
    DraftsPresented {
        checkpoint: String,
        drafts: Vec<Draft>,
        selected: usize,
    },
    /// Terminal until the next `present`/`suggest`.
    Applied,
    /// Terminal until the next `present`/`suggest`.
    AllRejected,
}

/// Suggestion state for one editable text.
///
/// Instantiated per text instance and passed by reference to whichever code
/// needs it; there is no ambient shared session. At most one batch (a
/// single suggestion or one draft set) is active at a time. Nothing here
/// persists beyond the session: committing hands the caller a plain string
/// for the persistence layer.
///
/// Draft lifecycle: `Empty → DraftsPresented → {Applied | AllRejected}`,
/// with the terminal states acting as `Empty` for the next presentation.
/// Repeating the transition that produced a terminal state is an idempotent
/// no-op; any other lifecycle call outside `DraftsPresented` is a
/// [`SuggestionError::State`].
#[derive(Debug, Clone)]
pub struct SuggestionSession {
    text: String,
    state: SessionState,
    batches_issued: u64,
}

impl SuggestionSession {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            text: initial_text.into(),
            state: SessionState::Empty,
            batches_issued: 0,
        }
    }

    /// The current base text. While drafts are presented this is the
    /// selected draft's proposal; it reverts to the checkpoint if all
    /// drafts are rejected.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name of the current lifecycle state, for logging and UI gating.
    pub fn state_name(&self) -> &'static str {
        match self.state {
            SessionState::Empty => "Empty",
            SessionState::SuggestionActive(_) => "SuggestionActive",
            SessionState::DraftsPresented { .. } => "DraftsPresented",
            SessionState::Applied => "Applied",
            SessionState::AllRejected => "AllRejected",
        }
    }

    pub fn has_active_batch(&self) -> bool {
        matches!(
            self.state,
            SessionState::SuggestionActive(_) | SessionState::DraftsPresented { .. }
        )
    }

    fn next_ids(&mut self) -> IdGenerator {
        self.batches_issued += 1;
        IdGenerator::from_seed(format!("b{}", self.batches_issued))
    }

    // ------------------------------------------------------------------
    // Single-suggestion flow
    // ------------------------------------------------------------------

    /// Put a single proposed rewrite of the current text under review.
    ///
    /// A proposal arriving while one is already under review supersedes it
    /// wholesale: the old batch's chunks and decisions are discarded, never
    /// merged, since chunk ids are not comparable across batches. Invalid
    /// while a draft set is presented.
    pub fn suggest(&mut self, proposed: &str) -> Result<(), SuggestionError> {
        match self.state {
            SessionState::DraftsPresented { .. } => Err(self.state_error("suggest")),
            SessionState::SuggestionActive(_) => {
                tracing::warn!("new proposal supersedes unresolved suggestion batch");
                self.start_suggestion(proposed);
                Ok(())
            }
            SessionState::Empty | SessionState::Applied | SessionState::AllRejected => {
                self.start_suggestion(proposed);
                Ok(())
            }
        }
    }

    fn start_suggestion(&mut self, proposed: &str) {
        let mut ids = self.next_ids();
        let batch = SuggestionBatch::new(&self.text, proposed, &mut ids);
        self.state = SessionState::SuggestionActive(batch);
        tracing::debug!(state = self.state_name(), "suggestion presented");
    }

    /// The batch under review in the single-suggestion flow.
    pub fn active_batch(&self) -> Option<&SuggestionBatch> {
        match &self.state {
            SessionState::SuggestionActive(batch) => Some(batch),
            _ => None,
        }
    }

    pub fn active_batch_mut(&mut self) -> Option<&mut SuggestionBatch> {
        match &mut self.state {
            SessionState::SuggestionActive(batch) => Some(batch),
            _ => None,
        }
    }

    /// Resolve the active suggestion into the base text and clear it.
    ///
    /// Pending chunks resolve to their original text. Returns the committed
    /// string for the persistence layer.
    pub fn commit(&mut self) -> Result<String, SuggestionError> {
        match &self.state {
            SessionState::SuggestionActive(batch) => {
                let committed = batch.final_text();
                self.text = committed.clone();
                self.state = SessionState::Empty;
                tracing::debug!("suggestion committed");
                Ok(committed)
            }
            _ => Err(self.state_error("commit")),
        }
    }

    // ------------------------------------------------------------------
    // Draft flow
    // ------------------------------------------------------------------

    /// Present a set of full-text alternatives to the current text.
    ///
    /// Saves the current text as the checkpoint, diffs every draft against
    /// it, and selects the first draft. Invalid while any batch is active;
    /// callers that want to replace an active batch call [`discard`]
    /// (or [`Self::reject_all`]) first.
    ///
    /// [`discard`]: Self::discard
    pub fn present(&mut self, drafts: &[DraftInput]) -> Result<(), SuggestionError> {
        match self.state {
            SessionState::Empty | SessionState::Applied | SessionState::AllRejected => {}
            _ => return Err(self.state_error("present")),
        }
        if drafts.is_empty() {
            return Err(SuggestionError::EmptyDrafts);
        }

        let checkpoint = self.text.clone();
        let drafts: Vec<Draft> = drafts
            .iter()
            .map(|input| {
                let mut ids = self.next_ids();
                Draft {
                    id: input.id.clone(),
                    proposed_text: input.proposed_text.clone(),
                    batch: SuggestionBatch::new(&checkpoint, &input.proposed_text, &mut ids),
                }
            })
            .collect();

        tracing::debug!(count = drafts.len(), "drafts presented");
        self.text = drafts[0].proposed_text.clone();
        self.state = SessionState::DraftsPresented {
            checkpoint,
            drafts,
            selected: 0,
        };
        Ok(())
    }

    /// Move the selection circularly through the presented drafts.
    ///
    /// Returns the new selected index. No-op when only one draft is
    /// presented.
    pub fn cycle(&mut self, direction: CycleDirection) -> Result<usize, SuggestionError> {
        match &mut self.state {
            SessionState::DraftsPresented {
                drafts, selected, ..
            } => {
                let count = drafts.len();
                if count > 1 {
                    *selected = match direction {
                        CycleDirection::Next => (*selected + 1) % count,
                        CycleDirection::Prev => (*selected + count - 1) % count,
                    };
                    self.text = drafts[*selected].proposed_text.clone();
                }
                Ok(*selected)
            }
            _ => Err(self.state_error("cycle")),
        }
    }

    /// Index of the currently selected draft, if drafts are presented.
    pub fn selected_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::DraftsPresented { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// The currently selected draft, if drafts are presented.
    pub fn selected_draft(&self) -> Option<&Draft> {
        match &self.state {
            SessionState::DraftsPresented {
                drafts, selected, ..
            } => drafts.get(*selected),
            _ => None,
        }
    }

    /// All presented drafts (empty outside `DraftsPresented`).
    pub fn drafts(&self) -> &[Draft] {
        match &self.state {
            SessionState::DraftsPresented { drafts, .. } => drafts,
            _ => &[],
        }
    }

    /// Commit the selected draft's text as the new base text and discard
    /// all draft state. Returns the committed string for the persistence
    /// layer. Idempotent once applied.
    pub fn apply_selected(&mut self) -> Result<String, SuggestionError> {
        match &self.state {
            SessionState::DraftsPresented {
                drafts, selected, ..
            } => {
                self.text = drafts[*selected].proposed_text.clone();
                self.state = SessionState::Applied;
                tracing::debug!("draft applied");
                Ok(self.text.clone())
            }
            SessionState::Applied => Ok(self.text.clone()),
            _ => Err(self.state_error("apply_selected")),
        }
    }

    /// Reject every draft, restoring the checkpointed text. Idempotent once
    /// rejected.
    pub fn reject_all(&mut self) -> Result<(), SuggestionError> {
        match &mut self.state {
            SessionState::DraftsPresented { checkpoint, .. } => {
                self.text = std::mem::take(checkpoint);
                self.state = SessionState::AllRejected;
                tracing::debug!("all drafts rejected");
                Ok(())
            }
            SessionState::AllRejected => Ok(()),
            _ => Err(self.state_error("reject_all")),
        }
    }

    /// Abandon any active batch without committing.
    ///
    /// The single-suggestion flow keeps the base text as it was; a
    /// presented draft set rolls back to its checkpoint. No-op when nothing
    /// is active. This is the only way unresolved state is reclaimed; the
    /// session never discards it on its own.
    pub fn discard(&mut self) {
        match &mut self.state {
            SessionState::SuggestionActive(_) => {
                tracing::debug!("suggestion discarded");
                self.state = SessionState::Empty;
            }
            SessionState::DraftsPresented { checkpoint, .. } => {
                tracing::debug!("draft set discarded");
                self.text = std::mem::take(checkpoint);
                self.state = SessionState::Empty;
            }
            SessionState::Empty | SessionState::Applied | SessionState::AllRejected => {
                self.state = SessionState::Empty;
            }
        }
    }

    fn state_error(&self, operation: &'static str) -> SuggestionError {
        SuggestionError::State {
            operation,
            state: self.state_name(),
        }
    }
}

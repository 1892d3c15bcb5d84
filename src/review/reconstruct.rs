//! Deterministic reconstruction of the reviewed text.

use serde::{Deserialize, Serialize};

use crate::diff::{Chunk, ChunkId, ChunkKind};

use super::decision::DecisionStore;

/// The text a single chunk contributes to the final output under the given
/// decisions. Pending counts as rejected: the reconstruction of an
/// all-pending batch is exactly the original text.
fn emitted_text(chunk: &Chunk, decisions: &DecisionStore) -> String {
    let accepted = decisions.decision(&chunk.id).accepted();
    match chunk.kind {
        ChunkKind::Unchanged => chunk.text.clone(),
        ChunkKind::Addition => {
            if accepted {
                chunk.text.clone()
            } else {
                String::new()
            }
        }
        ChunkKind::Deletion => {
            if accepted {
                String::new()
            } else {
                chunk.text.clone()
            }
        }
        ChunkKind::Replacement => {
            if accepted {
                chunk.replacement_text.clone().unwrap_or_default()
            } else {
                chunk.text.clone()
            }
        }
    }
}

/// Derive the plain output text from chunks and decisions.
///
/// Traverses chunks in sequence order. With every edit pending or rejected
/// this returns the original text; with every edit accepted it returns the
/// proposed text.
pub fn final_text(chunks: &[Chunk], decisions: &DecisionStore) -> String {
    let mut out = String::new();
    for chunk in chunks {
        out.push_str(&emitted_text(chunk, decisions));
    }
    out
}

/// One element of the display-annotated form handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum DisplaySegment {
    /// Unchanged text, or an edit whose decision is settled: rendered as
    /// plain text with no diff styling. `text` is exactly what
    /// [`final_text`] emits for the chunk, possibly empty.
    Plain { id: ChunkId, text: String },
    /// An edit still awaiting a decision; kind and both texts are kept so
    /// the renderer can style it.
    Pending(Chunk),
}

/// Derive the display-annotated form from chunks and decisions.
///
/// Settled chunks collapse to [`DisplaySegment::Plain`]; pending edits pass
/// through untouched. Resolving one chunk never changes whether any other
/// chunk is pending or settled.
pub fn display_form(chunks: &[Chunk], decisions: &DecisionStore) -> Vec<DisplaySegment> {
    chunks
        .iter()
        .map(|chunk| {
            if chunk.is_edit() && decisions.is_pending(&chunk.id) {
                DisplaySegment::Pending(chunk.clone())
            } else {
                DisplaySegment::Plain {
                    id: chunk.id.clone(),
                    text: emitted_text(chunk, decisions),
                }
            }
        })
        .collect()
}

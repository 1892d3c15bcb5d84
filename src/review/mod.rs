//! Decision tracking and text reconstruction for a reviewed suggestion.
//!
//! - [`DecisionStore`]: per-chunk accept/reject/pending state
//! - [`final_text`] / [`display_form`]: deterministic derivation of the
//!   plain output text and the renderer-facing annotated form
//! - [`SuggestionBatch`]: one diff computation's chunks and decisions,
//!   the unit both the single-suggestion and multi-draft flows build on

mod batch;
mod decision;
mod reconstruct;

// Re-export main types
pub use batch::SuggestionBatch;
pub use decision::{Decision, DecisionState, DecisionStore};
pub use reconstruct::{display_form, final_text, DisplaySegment};

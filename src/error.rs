//! Error types for the suggestion session state machine.

use thiserror::Error;

/// Errors surfaced by [`SuggestionSession`](crate::session::SuggestionSession).
///
/// Decision calls with a stale chunk id are deliberately not errors: they
/// are no-ops logged at `warn` level, since per-click error handling would
/// burden every UI call site for a condition the core can absorb safely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    /// A lifecycle operation was called in a state that does not allow it.
    /// This always indicates a caller bug (for example a race between two
    /// user actions) and is never silently ignored.
    #[error("`{operation}` is not valid in state `{state}`")]
    State {
        operation: &'static str,
        state: &'static str,
    },

    /// `present` was called with no drafts to show.
    #[error("cannot present an empty draft set")]
    EmptyDrafts,
}

//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing the next pair.
///
/// An exhausted deck is not an error: draws after the decks run out report
/// the game-over status instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid round phase for drawing (a trait selection is pending).
    #[error("invalid round phase for drawing")]
    InvalidState,
}

/// Errors that can occur when resolving a trait contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid round phase for resolving (no pair is awaiting a selection).
    #[error("invalid round phase for resolving")]
    InvalidState,
    /// The selected trait is absent from one of the drawn creatures.
    #[error("trait is absent from a drawn creature")]
    InvalidTrait,
}

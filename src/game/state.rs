//! Round phase types.

/// Phase of the current round.
///
/// Phases advance linearly within a round and return to [`RoundPhase::Draw`]
/// at game start. [`RoundPhase::GameOver`] is terminal until the game is
/// restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the next draw.
    Draw,
    /// A pair is face up; waiting for the player to pick a trait
    /// (Clash only).
    SelectTrait,
    /// The round is resolved; the result stays readable until the next draw.
    Resolved,
    /// A deck ran out; further draws are rejected with this status.
    GameOver,
}

/// Outcome of drawing the next pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome<C> {
    /// One card drawn from the front of each deck.
    Cards {
        /// The player's card.
        player: C,
        /// The computer's card.
        computer: C,
    },
    /// A deck was empty; the game is over.
    GameOver,
}

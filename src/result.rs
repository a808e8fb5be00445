//! Round result and score types.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;

/// Which side won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundWinner {
    /// The player won the round.
    Player,
    /// The computer won the round.
    Computer,
    /// Equal values; nobody scores.
    Tie,
}

/// Result of a resolved Clash round.
///
/// Remains available from the game until the next draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClashResult {
    /// The trait the contest was fought over.
    pub trait_name: String,
    /// Which side won.
    pub winner: RoundWinner,
    /// The player's dice total.
    pub player_roll: u32,
    /// The computer's dice total.
    pub computer_roll: u32,
}

/// Result of a resolved War round.
///
/// Remains available from the game until the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarResult {
    /// Which side won.
    pub winner: RoundWinner,
    /// The card the player turned over.
    pub player_card: Card,
    /// The card the computer turned over.
    pub computer_card: Card,
}

/// Running score for a game session.
///
/// Reset at game start; incremented at most once per round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the computer.
    pub computer: u32,
}

impl Score {
    /// Credits the round to its winner. Ties leave the score unchanged.
    pub const fn record(&mut self, winner: RoundWinner) {
        match winner {
            RoundWinner::Player => self.player += 1,
            RoundWinner::Computer => self.computer += 1,
            RoundWinner::Tie => {}
        }
    }
}

/// Compares two round values under strictly-greater-wins rules.
#[must_use]
pub(crate) fn winner_of(player: u32, computer: u32) -> RoundWinner {
    match player.cmp(&computer) {
        core::cmp::Ordering::Greater => RoundWinner::Player,
        core::cmp::Ordering::Less => RoundWinner::Computer,
        core::cmp::Ordering::Equal => RoundWinner::Tie,
    }
}

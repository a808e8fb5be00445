use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_deck};
use crate::deck::build_decks;
use crate::error::DrawError;
use crate::options::GameOptions;
use crate::result::{Score, WarResult, winner_of};

use super::state::{DrawOutcome, RoundPhase};

/// The War engine.
///
/// Each round draws one card from the front of each deck and compares ranks
/// under the fixed order 2 < 3 < ... < 10 < J < Q < K < A; the higher rank
/// wins and equal ranks tie. Resolution happens inside the draw, so there is
/// no selection step and no war/pot mechanic on ties.
///
/// The catalog is the standard 52-card deck; with default options one full
/// copy is dealt, 26 cards per side.
///
/// # Example
///
/// ```
/// use clashrs::{DrawOutcome, GameOptions, WarGame};
///
/// let mut game = WarGame::new(GameOptions::default(), 42);
/// assert_eq!(game.cards_remaining(), 26);
///
/// if let DrawOutcome::Cards { .. } = game.draw().unwrap() {
///     let result = game.last_result().unwrap();
///     let _ = result.winner;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WarGame<R: Rng = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// The player's deck, drawn from the front.
    pub player_deck: VecDeque<Card>,
    /// The computer's deck, drawn from the front.
    pub computer_deck: VecDeque<Card>,
    catalog: Vec<Card>,
    phase: RoundPhase,
    score: Score,
    last_result: Option<WarResult>,
    rng: R,
}

impl WarGame {
    /// Creates a game with the given seed and deals the first decks.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> WarGame<R> {
    /// Creates a game from an explicit generator and deals the first decks.
    #[must_use]
    pub fn from_rng(options: GameOptions, rng: R) -> Self {
        let mut game = Self {
            options,
            player_deck: VecDeque::new(),
            computer_deck: VecDeque::new(),
            catalog: standard_deck(),
            phase: RoundPhase::Draw,
            score: Score::default(),
            last_result: None,
            rng,
        };
        game.start();
        game
    }

    /// Starts a new game: rebuilds and reshuffles both decks, resets the
    /// score, and returns the round phase to [`RoundPhase::Draw`].
    pub fn start(&mut self) {
        let (player, computer) =
            build_decks(&self.catalog, self.options.deck_size, &mut self.rng);
        self.player_deck = player;
        self.computer_deck = computer;
        self.phase = RoundPhase::Draw;
        self.score = Score::default();
        self.last_result = None;
    }

    /// Draws the next card from the front of each deck and resolves the
    /// round immediately.
    ///
    /// On a successful draw the winner is credited and the result stays
    /// readable via [`last_result`](Self::last_result) until the next draw.
    /// When either deck is empty the game is over: the phase becomes
    /// terminal and this (and every later draw) returns
    /// [`DrawOutcome::GameOver`] without touching the score.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the error type is shared with the Clash
    /// variant, whose selection step can reject a draw.
    pub fn draw(&mut self) -> Result<DrawOutcome<Card>, DrawError> {
        match self.phase {
            RoundPhase::Draw | RoundPhase::Resolved => {}
            RoundPhase::SelectTrait => return Err(DrawError::InvalidState),
            RoundPhase::GameOver => return Ok(DrawOutcome::GameOver),
        }

        let Some(player) = self.player_deck.pop_front() else {
            self.phase = RoundPhase::GameOver;
            return Ok(DrawOutcome::GameOver);
        };
        let Some(computer) = self.computer_deck.pop_front() else {
            self.player_deck.push_front(player);
            self.phase = RoundPhase::GameOver;
            return Ok(DrawOutcome::GameOver);
        };

        let result = WarResult {
            winner: winner_of(u32::from(player.rank), u32::from(computer.rank)),
            player_card: player,
            computer_card: computer,
        };

        self.score.record(result.winner);
        self.last_result = Some(result);
        self.phase = RoundPhase::Resolved;

        Ok(DrawOutcome::Cards { player, computer })
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the result of the last resolved round, if any.
    ///
    /// Cleared by the next draw.
    #[must_use]
    pub const fn last_result(&self) -> Option<&WarResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards left in the player's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.player_deck.len()
    }

    /// Returns whether the game has reached the terminal status.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }
}

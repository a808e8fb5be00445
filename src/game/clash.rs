use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::creature::Creature;
use crate::deck::build_decks;
use crate::error::{DrawError, ResolveError};
use crate::options::GameOptions;
use crate::result::{ClashResult, Score, winner_of};

use super::state::{DrawOutcome, RoundPhase};

/// The Creature Clash engine.
///
/// Each round draws one creature from the front of each deck, waits for the
/// player to pick a trait, then rolls both sides' dice for that trait. The
/// strictly greater total wins the round.
///
/// # Example
///
/// ```
/// use clashrs::{ClashGame, DrawOutcome, GameOptions, standard_catalog};
///
/// let mut game = ClashGame::new(standard_catalog(), GameOptions::default(), 42);
/// if let DrawOutcome::Cards { player, .. } = game.draw().unwrap() {
///     let result = game.select_trait("strength").unwrap();
///     let _ = (player, result);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClashGame<R: Rng = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// The player's deck, drawn from the front.
    pub player_deck: VecDeque<Creature>,
    /// The computer's deck, drawn from the front.
    pub computer_deck: VecDeque<Creature>,
    catalog: Vec<Creature>,
    phase: RoundPhase,
    score: Score,
    current: Option<(Creature, Creature)>,
    last_result: Option<ClashResult>,
    rng: R,
}

impl ClashGame {
    /// Creates a game with the given seed and deals the first decks.
    ///
    /// # Example
    ///
    /// ```
    /// use clashrs::{ClashGame, GameOptions, standard_catalog};
    ///
    /// let game = ClashGame::new(standard_catalog(), GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 8);
    /// ```
    #[must_use]
    pub fn new(catalog: Vec<Creature>, options: GameOptions, seed: u64) -> Self {
        Self::from_rng(catalog, options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ClashGame<R> {
    /// Creates a game from an explicit generator and deals the first decks.
    ///
    /// Useful for deterministic tests and for callers that manage their own
    /// randomness.
    #[must_use]
    pub fn from_rng(catalog: Vec<Creature>, options: GameOptions, rng: R) -> Self {
        let mut game = Self {
            options,
            player_deck: VecDeque::new(),
            computer_deck: VecDeque::new(),
            catalog,
            phase: RoundPhase::Draw,
            score: Score::default(),
            current: None,
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
        self.current = None;
        self.last_result = None;
    }

    /// Draws the next creature from the front of each deck.
    ///
    /// When either deck is empty the game is over: the phase becomes
    /// terminal and this (and every later draw) returns
    /// [`DrawOutcome::GameOver`] without touching the score.
    ///
    /// # Errors
    ///
    /// Returns an error if a trait selection is still pending.
    pub fn draw(&mut self) -> Result<DrawOutcome<Creature>, DrawError> {
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
            // Undo the player's pop so a retried draw sees the same decks.
            self.player_deck.push_front(player);
            self.phase = RoundPhase::GameOver;
            return Ok(DrawOutcome::GameOver);
        };

        self.current = Some((player.clone(), computer.clone()));
        self.last_result = None;
        self.phase = RoundPhase::SelectTrait;

        Ok(DrawOutcome::Cards { player, computer })
    }

    /// Resolves the round on the named trait.
    ///
    /// Rolls both creatures' dice for the trait (the two sides may carry
    /// different formulas), credits the winner, and advances the phase to
    /// [`RoundPhase::Resolved`]. The result stays readable via
    /// [`last_result`](Self::last_result) until the next draw.
    ///
    /// # Errors
    ///
    /// Returns an error if no pair is awaiting a selection, or if the trait
    /// is absent from either drawn creature. Failed selections change
    /// nothing; the caller may select again.
    pub fn select_trait(&mut self, name: &str) -> Result<ClashResult, ResolveError> {
        if self.phase != RoundPhase::SelectTrait {
            return Err(ResolveError::InvalidState);
        }
        let Some((player, computer)) = &self.current else {
            return Err(ResolveError::InvalidState);
        };

        let player_spec = *player.trait_spec(name).ok_or(ResolveError::InvalidTrait)?;
        let computer_spec = *computer
            .trait_spec(name)
            .ok_or(ResolveError::InvalidTrait)?;

        let player_roll = player_spec.roll(&mut self.rng);
        let computer_roll = computer_spec.roll(&mut self.rng);

        let result = ClashResult {
            trait_name: name.to_string(),
            winner: winner_of(player_roll, computer_roll),
            player_roll,
            computer_roll,
        };

        self.score.record(result.winner);
        self.last_result = Some(result.clone());
        self.phase = RoundPhase::Resolved;

        Ok(result)
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

    /// Returns the face-up pair, if a round is in progress.
    #[must_use]
    pub const fn current_cards(&self) -> Option<(&Creature, &Creature)> {
        match &self.current {
            Some((player, computer)) => Some((player, computer)),
            None => None,
        }
    }

    /// Returns the result of the last resolved round, if any.
    ///
    /// Cleared by the next draw.
    #[must_use]
    pub const fn last_result(&self) -> Option<&ClashResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of creatures left in the player's deck.
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

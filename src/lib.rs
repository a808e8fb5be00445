//! A creature comparison card game engine with optional `no_std` support.
//!
//! Two decks are dealt from a shuffled catalog and one round is played at a
//! time: draw a card from the front of each deck, compare a trait or rank,
//! tally the score. The crate provides two engines: [`ClashGame`], where the
//! player picks a named trait and both creatures roll its dice formula, and
//! [`WarGame`], where card ranks are compared directly.
//!
//! # Example
//!
//! ```
//! use clashrs::{ClashGame, DrawOutcome, GameOptions, standard_catalog};
//!
//! let mut game = ClashGame::new(standard_catalog(), GameOptions::default(), 42);
//!
//! if let DrawOutcome::Cards { .. } = game.draw().unwrap() {
//!     let result = game.select_trait("agility").unwrap();
//!     println!("{:?}: {} vs {}", result.winner, result.player_roll, result.computer_roll);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod creature;
pub mod deck;
pub mod dice;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, standard_deck};
pub use creature::{Creature, standard_catalog};
pub use dice::DiceSpec;
pub use error::{DrawError, ResolveError};
pub use game::{ClashGame, DrawOutcome, RoundPhase, WarGame};
pub use options::GameOptions;
pub use result::{ClashResult, RoundWinner, Score, WarResult};

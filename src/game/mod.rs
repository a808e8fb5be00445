//! Game engines for the two variants.
//!
//! [`ClashGame`] runs the creature variant: draw a pair, pick a trait, roll
//! both sides' dice for it. [`WarGame`] runs the card variant: draw a pair
//! and compare ranks directly. Both deal from a replicated, shuffled catalog
//! split evenly between the player and the computer, and both are plain
//! values mutated through their round operations, so a presentation layer
//! can own one per session.

mod clash;
pub mod state;
mod war;

pub use clash::ClashGame;
pub use state::{DrawOutcome, RoundPhase};
pub use war::WarGame;

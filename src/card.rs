//! Playing card types for the War variant.

use core::cmp::Ordering;

use alloc::vec::Vec;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// All four suits, in catalog order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of an Ace. Aces are always high in War.
pub const ACE: u8 = 14;

/// A playing card.
///
/// Ranks run from 2 through 14 under the fixed War ordering
/// 2 < 3 < ... < 10 < J < Q < K < A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, or [`JACK`], [`QUEEN`], [`KING`], [`ACE`]).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted but have no display label and sort at the extremes.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Compares two cards by rank alone; suits never break ties.
    ///
    /// The ordering is total and antisymmetric:
    /// `a.compare_rank(b) == b.compare_rank(a).reverse()`.
    #[must_use]
    pub fn compare_rank(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Returns the display label for the rank ("2".."10", "J", "Q", "K", "A").
    ///
    /// Ranks outside 2..=14 yield `"?"`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            JACK => "J",
            QUEEN => "Q",
            KING => "K",
            ACE => "A",
            _ => "?",
        }
    }
}

/// Number of cards in the standard catalog.
pub const DECK_SIZE: usize = 52;

/// Returns the standard 52-card catalog: every suit crossed with every rank.
///
/// # Example
///
/// ```
/// use clashrs::card::{DECK_SIZE, standard_deck};
///
/// assert_eq!(standard_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in 2..=ACE {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

//! Deck construction: replicate, shuffle, split.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

/// Builds the two decks for a game.
///
/// The catalog is replicated with enough whole copies to reach at least
/// `target_size` entries, shuffled uniformly, and split at the midpoint.
/// When the pool size is odd the extra card goes to the player's deck.
/// Decks are drawn from the front.
///
/// An empty catalog yields two empty decks; the first draw then reports
/// game over.
#[must_use]
pub fn build_decks<T: Clone, R: Rng>(
    catalog: &[T],
    target_size: usize,
    rng: &mut R,
) -> (VecDeque<T>, VecDeque<T>) {
    if catalog.is_empty() {
        return (VecDeque::new(), VecDeque::new());
    }

    let copies = target_size.div_ceil(catalog.len()).max(1);
    let mut pool: Vec<T> = Vec::with_capacity(copies * catalog.len());
    for _ in 0..copies {
        pool.extend_from_slice(catalog);
    }

    pool.shuffle(rng);

    let mid = pool.len().div_ceil(2);
    let computer: VecDeque<T> = pool.split_off(mid).into();
    let player: VecDeque<T> = pool.into();

    (player, computer)
}

//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use clashrs::GameOptions;
///
/// let options = GameOptions::default().with_deck_size(32);
/// assert_eq!(options.deck_size, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Target size of the combined card pool before the split.
    ///
    /// The catalog is replicated in whole copies until the pool reaches at
    /// least this size, so the actual pool may be slightly larger.
    pub deck_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        // Four copies of the standard four-creature catalog.
        Self { deck_size: 16 }
    }
}

impl GameOptions {
    /// Sets the target pool size.
    ///
    /// # Example
    ///
    /// ```
    /// use clashrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_deck_size(52);
    /// assert_eq!(options.deck_size, 52);
    /// ```
    #[must_use]
    pub const fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }
}

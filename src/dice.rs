//! Dice formulas for trait contests.

use core::fmt;

use rand::Rng;

/// A dice formula in NdS notation: the sum of `count` independent uniform
/// rolls of a `sides`-sided die.
///
/// # Example
///
/// ```
/// use clashrs::DiceSpec;
///
/// let spec = DiceSpec::new(3, 4);
/// assert_eq!(spec.to_string(), "3d4");
/// assert_eq!(spec.min_total(), 3);
/// assert_eq!(spec.max_total(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceSpec {
    /// Number of dice rolled.
    pub count: u8,
    /// Number of sides per die.
    pub sides: u8,
}

impl DiceSpec {
    /// Creates a new dice formula.
    ///
    /// Note: This function does not validate its arguments. A formula with
    /// zero dice or zero sides always rolls 0.
    #[must_use]
    pub const fn new(count: u8, sides: u8) -> Self {
        Self { count, sides }
    }

    /// Returns the smallest possible total (every die shows 1).
    #[must_use]
    pub const fn min_total(self) -> u32 {
        self.count as u32
    }

    /// Returns the largest possible total (every die shows `sides`).
    #[must_use]
    pub const fn max_total(self) -> u32 {
        self.count as u32 * self.sides as u32
    }

    /// Rolls the formula: `count` uniform draws from `1..=sides`, summed.
    ///
    /// The total always lies in `min_total()..=max_total()`.
    #[must_use]
    pub fn roll<R: Rng>(self, rng: &mut R) -> u32 {
        if self.sides == 0 {
            return 0;
        }

        (0..self.count)
            .map(|_| u32::from(rng.random_range(1..=self.sides)))
            .sum()
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

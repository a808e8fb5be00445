//! Creature fixtures for the Clash variant.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::dice::DiceSpec;

/// A creature card: a name plus a set of named traits, each with its own
/// dice formula.
///
/// Creatures are immutable fixture data; the two sides of a contest may have
/// different dice for the same trait.
///
/// # Example
///
/// ```
/// use clashrs::{Creature, DiceSpec};
///
/// let golem = Creature::new("Stone Golem")
///     .with_trait("strength", DiceSpec::new(3, 4))
///     .with_trait("agility", DiceSpec::new(1, 6));
///
/// assert_eq!(golem.trait_spec("strength"), Some(&DiceSpec::new(3, 4)));
/// assert_eq!(golem.trait_spec("luck"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    /// The creature's display name.
    pub name: String,
    /// Trait name to dice formula.
    pub traits: HashMap<String, DiceSpec>,
}

impl Creature {
    /// Creates a creature with no traits.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            traits: HashMap::new(),
        }
    }

    /// Adds a trait, replacing any existing formula under the same name.
    #[must_use]
    pub fn with_trait(mut self, name: impl Into<String>, spec: DiceSpec) -> Self {
        self.traits.insert(name.into(), spec);
        self
    }

    /// Looks up the dice formula for a trait.
    ///
    /// Returns `None` if the creature does not have the trait.
    #[must_use]
    pub fn trait_spec(&self, name: &str) -> Option<&DiceSpec> {
        self.traits.get(name)
    }

    /// Returns the trait names in sorted order.
    #[must_use]
    pub fn trait_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.traits.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Returns the standard four-creature catalog with balanced trait dice.
#[must_use]
pub fn standard_catalog() -> Vec<Creature> {
    alloc::vec![
        Creature::new("Stone Golem")
            .with_trait("strength", DiceSpec::new(3, 4))
            .with_trait("agility", DiceSpec::new(1, 6))
            .with_trait("magic", DiceSpec::new(1, 4))
            .with_trait("cunning", DiceSpec::new(2, 4)),
        Creature::new("Swift Sprite")
            .with_trait("strength", DiceSpec::new(1, 4))
            .with_trait("agility", DiceSpec::new(3, 6))
            .with_trait("magic", DiceSpec::new(2, 4))
            .with_trait("cunning", DiceSpec::new(1, 8)),
        Creature::new("Mystic Dragon")
            .with_trait("strength", DiceSpec::new(2, 6))
            .with_trait("agility", DiceSpec::new(1, 8))
            .with_trait("magic", DiceSpec::new(2, 8))
            .with_trait("cunning", DiceSpec::new(1, 4)),
        Creature::new("Shadow Fox")
            .with_trait("strength", DiceSpec::new(1, 6))
            .with_trait("agility", DiceSpec::new(2, 6))
            .with_trait("magic", DiceSpec::new(1, 4))
            .with_trait("cunning", DiceSpec::new(3, 6)),
    ]
}

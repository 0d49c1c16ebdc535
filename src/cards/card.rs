//! Card types and the predator relation.
//!
//! The 13 card types are totally ordered by their enumeration index, which
//! fixes the display order of hands and moves.
//!
//! A type's *predators* are the types that may defeat it when played in the
//! same quantity. The relation is asymmetric and not transitive.

use serde::{Deserialize, Serialize};

/// A type of card, e.g. whale, elephant, joker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Whale,
    Elephant,
    Crocodile,
    Bear,
    Lion,
    Seal,
    Fox,
    Perch,
    Hedgehog,
    Fish,
    Mouse,
    Mosquito,
    Joker,
}

impl CardType {
    /// Number of distinct card types.
    pub const COUNT: usize = 13;

    /// All card types in enumeration order.
    pub const ALL: [CardType; Self::COUNT] = [
        CardType::Whale,
        CardType::Elephant,
        CardType::Crocodile,
        CardType::Bear,
        CardType::Lion,
        CardType::Seal,
        CardType::Fox,
        CardType::Perch,
        CardType::Hedgehog,
        CardType::Fish,
        CardType::Mouse,
        CardType::Mosquito,
        CardType::Joker,
    ];

    /// Enumeration index (0 for whale, 12 for joker).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The types that can defeat this type in equal number.
    ///
    /// Whale and joker have no predators.
    ///
    /// ```
    /// use franks_zoo::cards::CardType;
    ///
    /// assert_eq!(CardType::Hedgehog.predators(), &[CardType::Fox]);
    /// assert!(CardType::Whale.predators().is_empty());
    /// ```
    #[must_use]
    pub const fn predators(self) -> &'static [CardType] {
        use CardType::*;

        match self {
            Elephant => &[Mouse],
            Crocodile => &[Elephant],
            Bear => &[Whale, Elephant],
            Lion => &[Elephant],
            Seal => &[Bear, Whale],
            Fox => &[Elephant, Crocodile, Bear, Lion],
            Perch => &[Whale, Crocodile, Bear, Seal],
            Hedgehog => &[Fox],
            Fish => &[Whale, Crocodile, Seal, Perch],
            Mouse => &[Crocodile, Bear, Lion, Seal, Fox, Hedgehog],
            Mosquito => &[Hedgehog, Fish, Mouse],
            Whale | Joker => &[],
        }
    }

    /// Whether this type is listed as a predator of `prey`.
    #[must_use]
    pub fn is_predator_of(self, prey: CardType) -> bool {
        prey.predators().contains(&self)
    }

    /// Lowercase name, as used in serialized payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use CardType::*;

        match self {
            Whale => "whale",
            Elephant => "elephant",
            Crocodile => "crocodile",
            Bear => "bear",
            Lion => "lion",
            Seal => "seal",
            Fox => "fox",
            Perch => "perch",
            Hedgehog => "hedgehog",
            Fish => "fish",
            Mouse => "mouse",
            Mosquito => "mosquito",
            Joker => "joker",
        }
    }

    /// How many copies of this type the 60-card deck holds.
    #[must_use]
    pub const fn copies_in_deck(self) -> u32 {
        match self {
            CardType::Mosquito => 4,
            CardType::Joker => 1,
            _ => 5,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown card name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card type: {0}")]
pub struct ParseCardTypeError(pub String);

impl std::str::FromStr for CardType {
    type Err = ParseCardTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        CardType::ALL
            .iter()
            .copied()
            .find(|card| card.name() == lower)
            .ok_or(ParseCardTypeError(s.to_string()))
    }
}

/// Total number of cards in the deck.
pub const DECK_SIZE: usize = 60;

/// The full deck as a sorted list of 60 cards.
#[must_use]
pub fn deck() -> Vec<CardType> {
    CardType::ALL
        .iter()
        .flat_map(|&card| std::iter::repeat(card).take(card.copies_in_deck() as usize))
        .collect()
}

//! Heuristic AI configuration parameters.

use serde::{Deserialize, Serialize};

use crate::cards::CardType;

/// Per-type weight table used to rank candidate moves.
///
/// Higher weights are played earlier. The defaults rank joker lowest (0) and
/// fish highest (84).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardWeights([u32; CardType::COUNT]);

impl CardWeights {
    /// Weight of a card type.
    #[must_use]
    pub fn get(&self, card: CardType) -> u32 {
        self.0[card.index()]
    }

    /// Replace the weight of one card type.
    pub fn with_weight(mut self, card: CardType, weight: u32) -> Self {
        self.0[card.index()] = weight;
        self
    }
}

impl Default for CardWeights {
    fn default() -> Self {
        use CardType::*;

        let table = [
            (Joker, 0),
            (Elephant, 2),
            (Whale, 8),
            (Bear, 14),
            (Crocodile, 18),
            (Seal, 30),
            (Fox, 40),
            (Mouse, 46),
            (Lion, 48),
            (Hedgehog, 62),
            (Perch, 70),
            (Mosquito, 76),
            (Fish, 84),
        ];

        let mut weights = [0; CardType::COUNT];
        for (card, weight) in table {
            weights[card.index()] = weight;
        }
        Self(weights)
    }
}

/// Heuristic AI configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Seed for the tie-break RNG.
    /// Same seed produces the same choices.
    pub seed: u64,

    /// How many moves deep the winning-sequence search looks (default: 3).
    pub search_depth: u32,

    /// Lower weight bound at the start of the game.
    /// Moves at or below the lower bound are held back.
    pub lower_bound_base: f64,

    /// The lower bound drops by `played * players / lower_bound_divisor`.
    pub lower_bound_divisor: f64,

    /// Upper weight bound at the start of the game.
    /// Moves above the upper bound are preferred, highest weight first.
    pub upper_bound_base: f64,

    /// The upper bound drops by `played * players / upper_bound_divisor`,
    /// but never below the lower bound.
    pub upper_bound_divisor: f64,

    /// Divider applied to the weight of a move that breaks up a stack.
    pub split_divider: f64,

    /// Per-type weights.
    pub weights: CardWeights,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            search_depth: 3,
            lower_bound_base: 15.0,
            lower_bound_divisor: 10.0,
            upper_bound_base: 30.0,
            upper_bound_divisor: 5.0,
            split_divider: 4.0,
            weights: CardWeights::default(),
        }
    }
}

impl AiConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Create a new config with a custom weight table.
    pub fn with_weights(mut self, weights: CardWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The (lower, upper) weight bounds after `played` cards at a table of
    /// `players` seats.
    #[must_use]
    pub fn bounds(&self, played: u32, players: usize) -> (f64, f64) {
        let progress = f64::from(played) * players as f64;
        let lower = self.lower_bound_base - progress / self.lower_bound_divisor;
        let upper = self.upper_bound_base - progress / self.upper_bound_divisor;
        (lower, upper.max(lower))
    }
}

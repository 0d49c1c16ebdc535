//! Builder for setting up a game in a known position.
//!
//! Without explicit hands the builder deals from `seed` (or OS entropy).
//! Explicit hands are how tests, tutorials and puzzle positions start a game
//! mid-way.

use super::game::{deal_hands, Game, PLAYER_COUNT};
use crate::cards::{Hand, Move};
use crate::core::{GameRng, PlayerId, PlayerMap};

/// Builder for creating a [`Game`].
///
/// ```
/// use franks_zoo::cards::{CardType, Hand, Move};
/// use franks_zoo::core::PlayerId;
/// use franks_zoo::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .hands([
///         Hand::from([(CardType::Fish, 2)]),
///         Hand::from([(CardType::Perch, 1)]),
///         Hand::from([(CardType::Whale, 1)]),
///         Hand::from([(CardType::Mouse, 1)]),
///     ])
///     .last_move(Move::of(CardType::Fish, 1), PlayerId::new(3))
///     .build();
///
/// assert!(game.can_make_move(&Move::of(CardType::Fish, 2)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    hands: Option<PlayerMap<Hand>>,
    current_turn: PlayerId,
    last_move: Option<(Move, PlayerId)>,
    total_played_card_count: u32,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for the deal. Ignored when hands are given.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Explicit hands, one per seat in seat order.
    pub fn hands(mut self, hands: impl IntoIterator<Item = Hand>) -> Self {
        let hands: Vec<Hand> = hands.into_iter().collect();
        assert_eq!(hands.len(), PLAYER_COUNT, "Exactly {} hands required", PLAYER_COUNT);
        self.hands = Some(PlayerMap::from_vec(hands));
        self
    }

    /// The seat to act first.
    pub fn current_turn(mut self, seat: PlayerId) -> Self {
        assert!(seat.index() < PLAYER_COUNT, "Seat out of range");
        self.current_turn = seat;
        self
    }

    /// The move currently on the table and who made it.
    pub fn last_move(mut self, mv: Move, made_by: PlayerId) -> Self {
        assert!(made_by.index() < PLAYER_COUNT, "Seat out of range");
        self.last_move = Some((mv, made_by));
        self
    }

    /// Cards already played, which drives the AI's weight bounds.
    pub fn total_played_card_count(mut self, count: u32) -> Self {
        self.total_played_card_count = count;
        self
    }

    /// Build the game.
    pub fn build(self) -> Game {
        let hands = match self.hands {
            Some(hands) => hands,
            None => {
                let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
                deal_hands(&mut rng)
            }
        };

        Game::from_parts(
            hands,
            self.current_turn,
            self.last_move,
            self.total_played_card_count,
        )
    }
}

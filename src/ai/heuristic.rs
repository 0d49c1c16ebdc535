//! The heuristic AI.
//!
//! ## Decision order
//!
//! 1. A single possible move is played at once.
//! 2. A move that empties the hand is played.
//! 3. Moves that would leave only a lone joker are discarded.
//! 4. The first move that starts a forced win is played.
//! 5. Otherwise moves are ranked by weight (see [`HeuristicAi::find_move_by_weights`]).

use tracing::debug;

use super::config::AiConfig;
use super::search::{self, has_winning_sequence, is_undefeatable_move};
use super::GameAi;
use crate::cards::{CardType, Cards, Hand, Move};
use crate::core::{GameRng, PlayerId};
use crate::rules::Game;

/// AI that plays by card weights and looks ahead for forced wins.
///
/// ```
/// use franks_zoo::ai::{GameAi, HeuristicAi};
/// use franks_zoo::rules::Game;
///
/// let game = Game::new(42);
/// let mut ai = HeuristicAi::new(&game, game.current_turn());
/// let mv = ai.next_move();
/// assert!(game.can_make_move(&mv));
/// ```
#[derive(Clone, Debug)]
pub struct HeuristicAi<'a> {
    game: &'a Game,
    player: PlayerId,
    config: AiConfig,
    rng: GameRng,
}

impl<'a> HeuristicAi<'a> {
    /// Create an AI for `player` with the default configuration.
    #[must_use]
    pub fn new(game: &'a Game, player: PlayerId) -> Self {
        Self::with_config(game, player, AiConfig::default())
    }

    /// Create an AI for `player`. The tie-break RNG is seeded from the config.
    #[must_use]
    pub fn with_config(game: &'a Game, player: PlayerId, config: AiConfig) -> Self {
        assert!(player.index() < game.player_count(), "Seat out of range");
        let rng = GameRng::new(config.seed);
        Self {
            game,
            player,
            config,
            rng,
        }
    }

    /// Use `rng` for tie-breaks instead of the config seed.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Whether `mv` empties this seat's hand.
    #[must_use]
    pub fn is_winning_move(&self, mv: &Move) -> bool {
        search::is_winning_move(mv, self.my_hand())
    }

    /// Whether `mv` would leave this seat holding nothing but one joker.
    ///
    /// A lone joker can never be played, so that hand can never finish.
    #[must_use]
    pub fn is_losing_move(&self, mv: &Move) -> bool {
        let mut after = self.my_hand().clone();
        after.make_move(mv) && after == Hand::from([(CardType::Joker, 1)])
    }

    /// Every opponent's cards, added together.
    #[must_use]
    pub fn opponent_hand_sum(&self) -> Hand {
        self.game
            .player_hands()
            .iter()
            .filter(|&(seat, _)| seat != self.player)
            .map(|(_, hand)| hand)
            .sum()
    }

    /// Whether `mv` cannot be answered by the opponents and leaves a hand
    /// that can force its way out within the configured search depth.
    #[must_use]
    pub fn is_start_of_winning_sequence(&self, mv: &Move) -> bool {
        self.starts_winning_sequence(mv, &self.opponent_hand_sum())
    }

    fn starts_winning_sequence(&self, mv: &Move, available: &Hand) -> bool {
        if !is_undefeatable_move(mv, available) {
            return false;
        }
        let mut after = self.my_hand().clone();
        after.make_move(mv) && has_winning_sequence(&after, available, self.config.search_depth)
    }

    /// Weight of a move, or `None` for pass and illegal moves.
    ///
    /// The weight of the main card type, divided by the split divider unless
    /// the move plays every card of that type the hand holds.
    #[must_use]
    pub fn weight(&self, mv: &Move) -> Option<f64> {
        let main = mv.main_card_type()?;
        let base = f64::from(self.config.weights.get(main));

        if mv.count_of(main) == self.my_hand().count_of(main) {
            Some(base)
        } else {
            Some(base / self.config.split_divider)
        }
    }

    /// Pick a move by weight.
    ///
    /// Moves without a weight (pass, illegal moves) and moves at or below the
    /// lower bound are dropped. The heaviest move above the upper bound wins; failing that a random move between the bounds is
    /// chosen; failing that the AI passes. Both bounds fall as cards are played.
    pub fn find_move_by_weights(&mut self, moves: &[Move]) -> Move {
        let (lower, upper) = self
            .config
            .bounds(self.game.total_played_card_count(), self.game.player_count());

        let mut weighted: Vec<(&Move, f64)> = moves
            .iter()
            .filter_map(|mv| Some((mv, self.weight(mv)?)))
            .filter(|&(_, weight)| weight > lower)
            .collect();
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

        if let Some(&(mv, weight)) = weighted.first().filter(|&&(_, weight)| weight > upper) {
            debug!(seat = %self.player, %mv, weight, "preferred move");
            return mv.clone();
        }

        let candidates: Vec<&Move> = weighted.iter().map(|&(mv, _)| mv).collect();
        match self.rng.choose(&candidates) {
            Some(&mv) => {
                debug!(seat = %self.player, %mv, lower, upper, "random candidate");
                mv.clone()
            }
            None => {
                debug!(seat = %self.player, lower, "nothing above lower bound, passing");
                Move::pass()
            }
        }
    }
}

impl GameAi for HeuristicAi<'_> {
    fn game(&self) -> &Game {
        self.game
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn next_move(&mut self) -> Move {
        if self.game.ended() {
            return Move::pass();
        }

        let mut moves = self.all_possible_moves(self.my_hand());

        if moves.len() == 1 {
            debug!(seat = %self.player, mv = %moves[0], "only one possible move");
            return moves.remove(0);
        }

        if let Some(mv) = moves.iter().find(|mv| self.is_winning_move(mv)) {
            debug!(seat = %self.player, %mv, "winning move");
            return mv.clone();
        }

        moves.retain(|mv| !self.is_losing_move(mv));

        let available = self.opponent_hand_sum();
        if let Some(mv) = moves
            .iter()
            .find(|mv| self.starts_winning_sequence(mv, &available))
        {
            debug!(seat = %self.player, %mv, "start of winning sequence");
            return mv.clone();
        }

        self.find_move_by_weights(&moves)
    }
}
